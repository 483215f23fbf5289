//! Converter panel: the two linked fields.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use coinpane_core::converter::{Converter, FieldSide};

use crate::styles::ColorTheme;

/// Render both fields. The field under the cursor is highlighted; `editing`
/// shows the text box contents in place of that field's text.
pub fn render_converter(
    frame: &mut Frame,
    area: Rect,
    converter: &Converter,
    cursor: FieldSide,
    editing: Option<&str>,
    focused: bool,
) {
    let theme = ColorTheme::default();
    let line = |side: FieldSide| -> Line<'static> {
        let field = converter.field(side);
        let marker = if side == cursor { "> " } else { "  " };
        let (text, caret) = match editing {
            Some(buffer) if side == cursor => (buffer, "_"),
            _ => (field.text(), ""),
        };
        let style = if focused && side == cursor {
            theme.cursor_style(true)
        } else {
            theme.text_style()
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<6}", field.label()), theme.header_style()),
            Span::styled(text.to_string(), style),
            Span::styled(caret, theme.key_style()),
        ])
    };

    let paragraph = Paragraph::new(vec![line(FieldSide::From), line(FieldSide::To)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Converter ")
            .border_style(theme.border_style(focused)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn rows(converter: &Converter, editing: Option<&str>) -> Vec<String> {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_converter(frame, area, converter, FieldSide::From, editing, true);
            })
            .unwrap();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn shows_labels_and_values() {
        let mut c = Converter::new();
        c.set_labels("BTC", "USDT");
        c.set_rates(20000.0);
        let out = rows(&c, None);
        assert!(out[0].contains("Converter"));
        assert!(out[1].contains("> BTC"));
        assert!(out[1].contains('1'));
        assert!(out[2].contains("USDT"));
        assert!(out[2].contains("20000"));
    }

    #[test]
    fn editing_shows_buffer() {
        let c = Converter::new();
        let out = rows(&c, Some("2.5"));
        assert!(out[1].contains("2.5_"));
    }
}
