// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, table, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the title bar with the total selected count
// - table: Renders the artwork table with checkboxes
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (page, per-page counts, load time)
// - dialogs: Renders the bulk-select and help dialogs
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod table;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
