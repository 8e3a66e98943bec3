use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar area
    pub header_area: Rect,
    /// Artwork table area
    pub table_area: Rect,
    /// Hotkey legend area (hidden on short terminals)
    pub legend_area: Option<Rect>,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Below this height the legend is dropped to keep rows visible
const MIN_HEIGHT_FOR_LEGEND: u16 = 16;

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let legend_height = if terminal_size.height >= MIN_HEIGHT_FOR_LEGEND {
        legend_height
    } else {
        0
    };

    // Header (top) + table + legend + status bar (bottom)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (top border, text, bottom border)
            Constraint::Min(3),                // Table
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        table_area: chunks[1],
        legend_area: if legend_height > 0 { Some(chunks[2]) } else { None },
        status_area: chunks[3],
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
