use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use artview::api::Artwork;
use artview::logic::formatting::{text_or_placeholder, truncate_to_width, year_or_placeholder};
use artview::model::SelectionSet;

const CHECKBOX_WIDTH: u16 = 3;
const YEAR_WIDTH: u16 = 6;

/// Column widths; the text columns share what is left
fn column_constraints() -> [Constraint; 7] {
    [
        Constraint::Length(CHECKBOX_WIDTH),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(YEAR_WIDTH),
        Constraint::Length(YEAR_WIDTH),
    ]
}

/// Header checkbox: all, some or none of the visible rows selected
pub fn header_checkbox(selected_on_page: usize, rows: usize) -> &'static str {
    if rows > 0 && selected_on_page == rows {
        "[x]"
    } else if selected_on_page > 0 {
        "[-]"
    } else {
        "[ ]"
    }
}

fn checkbox(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Build the cell texts for one artwork, each fitted to its column width
pub fn row_cells(artwork: &Artwork, selected: bool, widths: &[u16]) -> Vec<String> {
    let texts = [
        checkbox(selected).to_string(),
        text_or_placeholder(artwork.title.as_deref()),
        text_or_placeholder(artwork.place_of_origin.as_deref()),
        text_or_placeholder(artwork.artist_display.as_deref()),
        text_or_placeholder(artwork.inscriptions.as_deref()),
        year_or_placeholder(artwork.date_start),
        year_or_placeholder(artwork.date_end),
    ];

    texts
        .iter()
        .zip(widths.iter())
        .map(|(text, width)| truncate_to_width(text, *width as usize))
        .collect()
}

/// Render the artwork table for the current page
pub fn render_table(
    f: &mut Frame,
    area: Rect,
    items: &[Artwork],
    selection: &SelectionSet,
    cursor: Option<usize>,
    loading: bool,
) {
    let selected_on_page = items.iter().filter(|a| selection.contains(a.id)).count();

    let title = if loading {
        " Artworks (loading...) ".to_string()
    } else {
        format!(" Artworks ({} rows) ", items.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(if loading { Color::Cyan } else { Color::White }));

    if items.is_empty() {
        let message = if loading { "Loading..." } else { "No records found" };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Resolve column widths the same way the table will, so truncation matches.
    // The highlight symbol takes 2 columns on the left.
    let inner = block.inner(area);
    let row_area = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width.saturating_sub(2),
        height: 1,
    };
    let widths: Vec<u16> = Layout::horizontal(column_constraints())
        .spacing(1)
        .split(row_area)
        .iter()
        .map(|r| r.width)
        .collect();

    let header_labels = [
        header_checkbox(selected_on_page, items.len()),
        "Title",
        "Place of Origin",
        "Artist",
        "Inscriptions",
        "Start",
        "End",
    ];
    let header = Row::new(
        header_labels
            .iter()
            .zip(widths.iter())
            .map(|(label, width)| Cell::from(truncate_to_width(label, *width as usize))),
    )
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = items
        .iter()
        .map(|artwork| {
            let selected = selection.contains(artwork.id);
            let style = if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Row::new(row_cells(artwork, selected, &widths).into_iter().map(Cell::from)).style(style)
        })
        .collect();

    let table = Table::new(rows, column_constraints())
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    let mut state = TableState::default();
    state.select(cursor);
    f.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_checkbox_states() {
        assert_eq!(header_checkbox(0, 12), "[ ]");
        assert_eq!(header_checkbox(5, 12), "[-]");
        assert_eq!(header_checkbox(12, 12), "[x]");
        assert_eq!(header_checkbox(0, 0), "[ ]");
    }

    #[test]
    fn test_row_cells_placeholders_and_truncation() {
        let mut artwork = Artwork::bare(7);
        artwork.title = Some("A Sunday on La Grande Jatte".to_string());
        artwork.date_start = Some(1884);

        let cells = row_cells(&artwork, true, &[3, 10, 10, 10, 10, 6, 6]);
        assert_eq!(cells[0], "[x]");
        assert_eq!(cells[1], "A Sunday …");
        assert_eq!(cells[2], "N/A");
        assert_eq!(cells[5], "1884");
        assert_eq!(cells[6], "N/A");
    }
}
