//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header: pane title, current pair, and whether a request is in flight.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, pair: &str, loading: bool) {
    let theme = ColorTheme::default();
    let mut spans = vec![
        Span::styled(title, theme.header_style()),
        Span::raw(format!(" | {pair}")),
    ];
    if loading {
        spans.push(Span::styled(" | loading...", theme.muted_style()));
    }

    let block = Block::default().borders(Borders::BOTTOM);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn first_line(loading: bool) -> String {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, "CryptoCompare", "BTC -> USDT", loading);
            })
            .unwrap();
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_title_and_pair() {
        let line = first_line(false);
        assert!(line.contains("CryptoCompare | BTC -> USDT"));
        assert!(!line.contains("loading"));
    }

    #[test]
    fn shows_loading_marker() {
        assert!(first_line(true).contains("loading"));
    }
}
