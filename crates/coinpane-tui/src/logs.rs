//! Log panel with a highlighted entry.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use coinpane_core::log::{Log, LogContent, LogEntry};

use crate::styles::ColorTheme;

/// Cursor over the log entries.
#[derive(Debug, Clone)]
pub struct LogCursor {
    /// Index of the highlighted entry.
    pub selected: usize,
    /// Whether the cursor jumps to each new entry.
    pub follow: bool,
}

impl LogCursor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: 0,
            follow: true,
        }
    }

    /// Re-clamp after the log changed length, following new entries if enabled.
    pub fn sync(&mut self, total: usize) {
        let last = total.saturating_sub(1);
        if self.follow || self.selected > last {
            self.selected = last;
        }
    }

    pub fn up(&mut self) {
        self.follow = false;
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self, total: usize) {
        let last = total.saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
        if self.selected >= last {
            self.follow = true;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.follow = false;
        self.selected = self.selected.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, total: usize) {
        let last = total.saturating_sub(1);
        self.selected = (self.selected + page_size).min(last);
        if self.selected >= last {
            self.follow = true;
        }
    }

    pub fn home(&mut self) {
        self.follow = false;
        self.selected = 0;
    }

    pub fn end(&mut self, total: usize) {
        self.follow = true;
        self.selected = total.saturating_sub(1);
    }
}

impl Default for LogCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines shown for one entry: the pair header (if any) then the body.
fn entry_lines<'a>(entry: &'a LogEntry, theme: &ColorTheme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if let Some(pair) = entry.content.pair() {
        lines.push(Line::from(Span::styled(pair, theme.header_style())));
    }
    match &entry.content {
        LogContent::Row { cells, .. } => {
            let mut spans = Vec::with_capacity(cells.len() * 2);
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(cell.text.as_str(), theme.tone_style(cell.tone)));
            }
            lines.push(Line::from(spans));
        }
        LogContent::Conversion { text, .. } => {
            lines.push(Line::from(Span::styled(text.as_str(), theme.text_style())));
        }
        LogContent::Text(text) => {
            lines.extend(text.iter().map(|l| Line::styled(l.as_str(), theme.muted_style())));
        }
    }
    lines
}

/// Render the log panel.
pub fn render_log(frame: &mut Frame, area: Rect, log: &Log, cursor: &LogCursor, focused: bool) {
    let theme = ColorTheme::default();
    let items: Vec<ListItem> = log
        .entries()
        .iter()
        .map(|entry| ListItem::new(entry_lines(entry, &theme)))
        .collect();

    let title = if log.is_empty() {
        " Log ".to_string()
    } else {
        format!(" Log ({}/{}) ", cursor.selected + 1, log.len())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border_style(focused)),
        )
        .highlight_style(theme.cursor_style(focused));

    let mut state = ListState::default();
    if !log.is_empty() {
        state.select(Some(cursor.selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use coinpane_core::format::{FormattedCell, Tone};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    #[test]
    fn cursor_initial() {
        let cursor = LogCursor::new();
        assert_eq!(cursor.selected, 0);
        assert!(cursor.follow);
    }

    #[test]
    fn sync_follows_new_entries() {
        let mut cursor = LogCursor::new();
        cursor.sync(10);
        assert_eq!(cursor.selected, 9);
    }

    #[test]
    fn sync_clamps_after_removal() {
        let mut cursor = LogCursor::new();
        cursor.follow = false;
        cursor.selected = 5;
        cursor.sync(3);
        assert_eq!(cursor.selected, 2);
        cursor.sync(0);
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn up_stops_following() {
        let mut cursor = LogCursor::new();
        cursor.selected = 5;
        cursor.up();
        assert_eq!(cursor.selected, 4);
        assert!(!cursor.follow);
        cursor.sync(20);
        assert_eq!(cursor.selected, 4);
    }

    #[test]
    fn down_to_bottom_follows_again() {
        let mut cursor = LogCursor::new();
        cursor.follow = false;
        cursor.selected = 8;
        cursor.down(10);
        assert_eq!(cursor.selected, 9);
        assert!(cursor.follow);
    }

    #[test]
    fn paging() {
        let mut cursor = LogCursor::new();
        cursor.selected = 15;
        cursor.page_up(10);
        assert_eq!(cursor.selected, 5);
        cursor.page_up(10);
        assert_eq!(cursor.selected, 0);
        cursor.page_down(100, 20);
        assert_eq!(cursor.selected, 19);
        assert!(cursor.follow);
    }

    #[test]
    fn home_end() {
        let mut cursor = LogCursor::new();
        cursor.selected = 50;
        cursor.home();
        assert_eq!(cursor.selected, 0);
        assert!(!cursor.follow);
        cursor.end(30);
        assert_eq!(cursor.selected, 29);
        assert!(cursor.follow);
    }

    fn rendered(log: &Log) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut cursor = LogCursor::new();
        cursor.sync(log.len());
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_log(frame, area, log, &cursor, true);
            })
            .unwrap();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_every_entry_kind() {
        let mut log = Log::new();
        log.append(LogContent::Text(vec!["hello there".into()]));
        log.append(LogContent::Row {
            pair: "BTC -> USDT".into(),
            cells: vec![
                FormattedCell {
                    text: "24hr Change".into(),
                    tone: Tone::Neutral,
                },
                FormattedCell {
                    text: "$ -12".into(),
                    tone: Tone::Negative,
                },
            ],
        });
        log.append(LogContent::Conversion {
            pair: "BTC -> USDT".into(),
            text: "BTC 1 = USDT 5".into(),
        });

        let screen = rendered(&log);
        assert!(screen.contains("hello there"));
        assert!(screen.contains("24hr Change"));
        assert!(screen.contains("$ -12"));
        assert!(screen.contains("BTC 1 = USDT 5"));
        assert!(screen.contains("Log (3/3)"));
    }

    #[test]
    fn renders_empty_log() {
        let screen = rendered(&Log::new());
        assert!(screen.contains(" Log "));
    }
}
