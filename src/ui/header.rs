use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "Art Institute of Chicago - Artworks";

/// Render the title bar with the global selection count
pub fn render_header(f: &mut Frame, area: Rect, total_selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));

    let count_style = if total_selected > 0 {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let count = Paragraph::new(Line::from(vec![
        Span::raw("Total Selected: "),
        Span::styled(total_selected.to_string(), count_style),
    ]))
    .alignment(ratatui::layout::Alignment::Right);

    f.render_widget(title, halves[0]);
    f.render_widget(count, halves[1]);
}
