//! Currency info table.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use coinpane_core::pane::TableRow;

use crate::styles::ColorTheme;

/// Render the info table: label column, then the formatted value.
pub fn render_info_table(
    frame: &mut Frame,
    area: Rect,
    rows: &[TableRow],
    cursor: usize,
    focused: bool,
) {
    let theme = ColorTheme::default();
    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.label).style(theme.muted_style()),
                Cell::from(row.cell.text.as_str()).style(theme.tone_style(row.cell.tone)),
            ])
        })
        .collect();

    let table = Table::new(body, [Constraint::Length(18), Constraint::Min(8)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Currency Info ")
                .border_style(theme.border_style(focused)),
        )
        .row_highlight_style(theme.cursor_style(focused));

    let mut state = TableState::default();
    if !rows.is_empty() {
        state.select(Some(cursor));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use coinpane_core::format::{format_cell, FormattedCell};
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;
    use ratatui::Terminal;

    use super::*;

    fn row(key: &'static str, label: &'static str, cell: FormattedCell) -> TableRow {
        TableRow { key, label, cell }
    }

    #[test]
    fn renders_labels_values_and_tones() {
        let rows = vec![
            row("PRICE", "Price", format_cell("PRICE", "$ 20,000")),
            row("CHANGE24HOUR", "24hr Change", format_cell("CHANGE24HOUR", "$ -5")),
            row("LOW24HOUR", "24hr Low", FormattedCell::placeholder()),
        ];
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_info_table(frame, area, &rows, 0, false);
            })
            .unwrap();

        let line = |y: u16| -> String {
            (0..buf.area.width)
                .map(|x| buf.buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(line(0).contains("Currency Info"));
        assert!(line(1).contains("Price"));
        assert!(line(1).contains("$ 20,000"));
        assert!(line(2).contains("$ -5"));
        assert!(line(3).contains('-'));

        let dollar = (0..buf.area.width)
            .find(|&x| buf.buffer[(x, 2)].symbol() == "$")
            .unwrap();
        assert_eq!(buf.buffer[(dollar, 2)].fg, Color::Red);
    }
}
