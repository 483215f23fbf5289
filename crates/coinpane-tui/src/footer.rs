//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::{Focus, Mode};
use crate::styles::ColorTheme;

/// Key hints for the focused panel, `(key, meaning)`.
#[must_use]
pub fn key_hints(focus: Focus, mode: Mode) -> Vec<(&'static str, &'static str)> {
    match mode {
        Mode::Insert(_) => return vec![("enter", "add"), ("esc", "cancel")],
        Mode::Edit(_) => return vec![("enter", "convert"), ("esc", "done")],
        Mode::Normal => {}
    }
    let mut hints = match focus {
        Focus::FromMenu | Focus::ToMenu => vec![
            ("enter", "select"),
            ("f", "flag"),
            ("+", "flagged"),
            ("a", "all"),
            ("i", "add"),
            ("x", "remove"),
        ],
        Focus::Table => vec![("enter", "log row")],
        Focus::Converter => vec![("e", "edit"), ("l", "log")],
        Focus::Log => vec![("enter", "dismiss"), ("C", "clear")],
    };
    hints.extend([("tab", "focus"), ("r", "refresh"), ("q", "quit")]);
    hints
}

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, focus: Focus, mode: Mode) {
    let theme = ColorTheme::default();
    let hints = key_hints(focus, mode);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, meaning)) in hints.into_iter().enumerate() {
        let sep = if i == 0 { "" } else { " | " };
        spans.push(Span::raw(sep));
        spans.push(Span::styled(key, theme.key_style()));
        spans.push(Span::raw(format!(": {meaning}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use coinpane_core::converter::FieldSide;
    use coinpane_core::selector::Side;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn hint_line(width: u16, focus: Focus, mode: Mode) -> String {
        let backend = TestBackend::new(width, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, focus, mode);
            })
            .unwrap();

        // Row 1 (after the border) holds the hints
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn menu_hints() {
        let content = hint_line(120, Focus::FromMenu, Mode::Normal);
        assert!(content.contains("select"));
        assert!(content.contains("flag"));
        assert!(content.contains("quit"));
    }

    #[test]
    fn hints_follow_focus() {
        assert!(hint_line(100, Focus::Table, Mode::Normal).contains("log row"));
        assert!(hint_line(100, Focus::Log, Mode::Normal).contains("dismiss"));
        assert!(hint_line(100, Focus::Converter, Mode::Normal).contains("edit"));
    }

    #[test]
    fn text_box_hints_replace_global_ones() {
        let hints = key_hints(Focus::ToMenu, Mode::Insert(Side::To));
        assert_eq!(hints, [("enter", "add"), ("esc", "cancel")]);
        let hints = key_hints(Focus::Converter, Mode::Edit(FieldSide::To));
        assert!(!hints.iter().any(|(_, meaning)| *meaning == "quit"));
    }

    #[test]
    fn small_area() {
        hint_line(20, Focus::Log, Mode::Normal);
    }
}
