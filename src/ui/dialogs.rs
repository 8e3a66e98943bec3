use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

/// Render the "select first N rows" dialog
pub fn render_bulk_select(f: &mut Frame, input: &str, rows_on_page: usize) {
    let key = Style::default().fg(Color::Yellow);

    let lines = vec![
        Line::from(Span::styled(
            "Select the first N rows of this page",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Rows on this page: {}", rows_on_page)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Rows: "),
            Span::styled(
                format!("{}█", input),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", key),
            Span::raw(":Submit  "),
            Span::styled("↑/↓", key),
            Span::raw(":Adjust  "),
            Span::styled("Esc", key),
            Span::raw(":Cancel"),
        ]),
    ];

    let area = centered_rect(f.area(), 50, 10);
    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select Multiple Rows")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

/// Render the keybinding help dialog
pub fn render_help(f: &mut Frame, vim_mode: bool) {
    let key = Style::default().fg(Color::Yellow);
    let entry = |keys: &'static str, what: &'static str| {
        Line::from(vec![Span::styled(format!("{:<16}", keys), key), Span::raw(what)])
    };

    let mut lines = vec![
        entry("↑/↓", "Move between rows"),
        entry("←/→ n/p", "Previous / next page"),
        entry("Home/End", "First / last page"),
        entry("Space/Enter", "Select or deselect row"),
        entry("a", "Select or deselect whole page"),
        entry("s", "Select first N rows of page"),
        entry("r", "Reload current page"),
        entry("q/Esc", "Quit"),
    ];
    if vim_mode {
        lines.insert(1, entry("j/k", "Move between rows"));
        lines.insert(3, entry("h/l", "Previous / next page"));
        lines.insert(5, entry("gg/G", "First / last page"));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Selections are kept when changing pages",
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(f.area(), 56, height);
    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help (any key to close)")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}
