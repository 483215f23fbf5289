//! Quote output formatting.

use console::style;

use coinpane_core::format::{FormattedCell, Tone};
use coinpane_core::pane::TableRow;

/// Width of the label column in printed tables.
pub const LABEL_WIDTH: usize = 18;

/// Render a cell, coloured by tone when `color` is set.
#[must_use]
pub fn styled_cell(cell: &FormattedCell, color: bool) -> String {
    if !color {
        return cell.text.clone();
    }
    match cell.tone {
        Tone::Neutral => cell.text.clone(),
        Tone::Positive => style(&cell.text).green().to_string(),
        Tone::Negative => style(&cell.text).red().to_string(),
    }
}

/// One printed line per table row: padded label, then the value.
#[must_use]
pub fn format_table(rows: &[TableRow], color: bool) -> Vec<String> {
    rows.iter()
        .map(|row| {
            format!(
                "  {:<width$} {}",
                row.label,
                styled_cell(&row.cell, color),
                width = LABEL_WIDTH
            )
        })
        .collect()
}

/// Header line for a quote.
#[must_use]
pub fn format_header(title: &str, pair: &str, color: bool) -> String {
    let text = format!("=== {title}: {pair} ===");
    if color {
        style(text).bold().cyan().to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use coinpane_core::format::format_cell;

    use super::*;

    #[test]
    fn plain_cells_have_no_escape_codes() {
        let cell = format_cell("CHANGE24HOUR", "$ -4");
        assert_eq!(styled_cell(&cell, false), "$ -4");
    }

    #[test]
    fn table_lines_are_aligned() {
        let rows = vec![
            TableRow {
                key: "PRICE",
                label: "Price",
                cell: format_cell("PRICE", "$ 1"),
            },
            TableRow {
                key: "CHANGEPCT24HOUR",
                label: "24hr % Change",
                cell: format_cell("CHANGEPCT24HOUR", "2.5"),
            },
        ];
        let lines = format_table(&rows, false);
        assert_eq!(lines[0], format!("  {:<18} $ 1", "Price"));
        assert_eq!(lines[1], format!("  {:<18} 2.5 %", "24hr % Change"));
    }

    #[test]
    fn header_plain() {
        assert_eq!(
            format_header("CryptoCompare", "BTC -> USDT", false),
            "=== CryptoCompare: BTC -> USDT ==="
        );
    }
}
