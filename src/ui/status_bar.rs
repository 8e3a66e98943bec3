use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use artview::logic;

/// Snapshot of what the status bar shows
pub struct StatusInfo {
    pub page: u32,
    pub total_pages: Option<u32>,
    pub rows_on_page: usize,
    pub selected_on_page: usize,
    pub total_selected: usize,
    pub loading_page: Option<u32>,
    pub last_load_time_ms: Option<u64>,
}

/// Build the status line spans (extracted for testability)
fn build_status_spans(info: &StatusInfo) -> Vec<Span<'static>> {
    let label = Style::default().fg(Color::Yellow);
    let mut spans = vec![
        Span::styled(logic::pagination::page_label(info.page, info.total_pages), label),
        Span::raw(" │ "),
        Span::raw(format!(
            "Selected on page: {}/{}",
            info.selected_on_page, info.rows_on_page
        )),
        Span::raw(" │ "),
        Span::raw(format!("Total Selected: {}", info.total_selected)),
    ];

    if let Some(page) = info.loading_page {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Loading page {}...", page),
            Style::default().fg(Color::Cyan),
        ));
    } else if let Some(ms) = info.last_load_time_ms {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Loaded in {}ms", ms),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let paragraph = Paragraph::new(Line::from(build_status_spans(info)))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}
