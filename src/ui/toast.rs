use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use artview::model::{Toast, ToastSeverity};

/// Icon and color for each severity
fn severity_theme(severity: ToastSeverity) -> (&'static str, Color) {
    match severity {
        ToastSeverity::Success => ("✓ ", Color::Green),
        ToastSeverity::Warn => ("! ", Color::Yellow),
        ToastSeverity::Error => ("✗ ", Color::Red),
    }
}

/// Place the toast near the top of `area`, never past its bottom edge
fn toast_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    // Three rows down when there is room, otherwise as low as still fits
    let offset = 3.min(area.height - height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + offset,
        width,
        height,
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Toast) {
    let (icon, color) = severity_theme(toast.severity);

    // Summary on the border, detail inside
    let content_width = toast.detail.width().max(toast.summary.width()) + 6;
    let max_width = (area.width as usize).min(80);
    let toast_width = content_width.min(max_width) as u16;
    let toast_area = toast_rect(area, toast_width, 4);
    if toast_area.is_empty() {
        return;
    }

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(toast.detail.as_str()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", toast.summary),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn error_toast() -> Toast {
        Toast {
            severity: ToastSeverity::Error,
            summary: "Request timed out".to_string(),
            detail: "operation timed out".to_string(),
            shown_at: Instant::now(),
            life_ms: 5000,
        }
    }

    #[test]
    fn test_toast_rect_stays_inside_short_area() {
        let area = Rect::new(0, 0, 80, 5);
        let rect = toast_rect(area, 30, 4);
        assert_eq!(rect.y, 1);
        assert!(rect.bottom() <= area.bottom());
    }

    #[test]
    fn test_toast_rect_tiny_area() {
        let area = Rect::new(0, 0, 10, 2);
        let rect = toast_rect(area, 30, 4);
        assert_eq!(rect, Rect::new(0, 0, 10, 2));
    }

    #[test]
    fn test_toast_renders_on_short_terminal() {
        for height in 1..8 {
            let mut terminal = Terminal::new(TestBackend::new(80, height)).unwrap();
            let toast = error_toast();
            terminal
                .draw(|f| render_toast(f, f.area(), &toast))
                .unwrap();
        }
    }

    #[test]
    fn test_toast_shows_summary_and_detail() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let toast = error_toast();
        terminal
            .draw(|f| render_toast(f, f.area(), &toast))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Request timed out"));
        assert!(text.contains("operation timed out"));
    }
}
