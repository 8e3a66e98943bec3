use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, has_total: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(":Row  "),
            Span::styled("h/l", Style::default().fg(Color::Yellow)),
            Span::raw(":Page  "),
        ]);
        if has_total {
            hotkey_spans.extend(vec![
                Span::styled("gg/G", Style::default().fg(Color::Yellow)),
                Span::raw(":First/Last  "),
            ]);
        }
    } else {
        hotkey_spans.extend(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Row  "),
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(":Page  "),
        ]);
        if has_total {
            hotkey_spans.extend(vec![
                Span::styled("Home/End", Style::default().fg(Color::Yellow)),
                Span::raw(":First/Last  "),
            ]);
        }
    }

    hotkey_spans.extend(vec![
        Span::styled("Space", Style::default().fg(Color::Yellow)),
        Span::raw(":Select  "),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::raw(":Select Page  "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(":Select Rows  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":Reload  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(":Help  "),
    ]);

    // Quit - always available
    hotkey_spans.extend(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph
pub fn build_legend_paragraph(vim_mode: bool, has_total: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, has_total));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, has_total: bool) {
    f.render_widget(build_legend_paragraph(vim_mode, has_total), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, has_total: bool) -> u16 {
    // line_count() doesn't account for borders correctly when a block is attached
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, has_total));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
