//! Quote presenter.

use std::io::{self, Write};

use coinpane_core::converter::FieldSide;
use coinpane_core::pane::InfoPane;

use crate::output::{format_header, format_table};

/// Prints a settled pane as a quote.
pub struct QuotePresenter {
    quiet: bool,
    color: bool,
}

impl QuotePresenter {
    #[must_use]
    pub fn new(quiet: bool, color: bool) -> Self {
        Self { quiet, color }
    }

    /// Write the quote: header, table and conversion line, or only the
    /// converted value when quiet.
    pub fn present(&self, pane: &InfoPane, out: &mut dyn Write) -> io::Result<()> {
        let converter = pane.converter();
        if self.quiet {
            return writeln!(out, "{}", converter.field(FieldSide::To).text());
        }

        writeln!(out, "{}", format_header(pane.title(), &pane.pair_label(), self.color))?;
        for line in format_table(pane.table(), self.color) {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", converter.conversion_text())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use coinpane_core::dispatch::{FetchCompletion, QueuedDispatcher};
    use coinpane_core::payload::PricePayload;

    use super::*;

    fn settled_pane() -> InfoPane {
        let dispatcher = Arc::new(QueuedDispatcher::new());
        let mut pane = InfoPane::mount("CryptoCompare", Box::new(dispatcher.clone()));
        let request = dispatcher.drain().remove(0);
        pane.complete(FetchCompletion {
            request,
            payload: PricePayload::new(json!({
                "RAW": { "BTC": { "USDT": { "PRICE": 100.0 } } },
                "DISPLAY": { "BTC": { "USDT": {
                    "PRICE": "$ 100",
                    "CHANGE24HOUR": "$ -1"
                } } }
            })),
        });
        pane
    }

    fn render(presenter: &QuotePresenter, pane: &InfoPane) -> String {
        let mut buf = Vec::new();
        presenter.present(pane, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn full_quote() {
        let out = render(&QuotePresenter::new(false, false), &settled_pane());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "=== CryptoCompare: BTC -> USDT ===");
        assert!(lines[1].contains("Price") && lines[1].ends_with("$ 100"));
        assert!(out.contains("$ -1"));
        assert!(out.contains("24hr Low"));
        assert_eq!(lines.last(), Some(&"BTC 1 = USDT 100"));
    }

    #[test]
    fn quiet_prints_only_value() {
        let out = render(&QuotePresenter::new(true, false), &settled_pane());
        assert_eq!(out, "100\n");
    }
}
