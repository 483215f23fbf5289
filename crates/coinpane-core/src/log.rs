//! Append-only interaction log with dismissible entries.

use crate::format::FormattedCell;

/// Identifier of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// What a log entry shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogContent {
    /// A table row: one cell per column.
    Row {
        pair: String,
        cells: Vec<FormattedCell>,
    },
    /// A converter line such as `BTC 2 = USDT 40000`.
    Conversion { pair: String, text: String },
    /// Free text, one string per line.
    Text(Vec<String>),
}

impl LogContent {
    /// The `FROM -> TO` header, for entries that carry one.
    #[must_use]
    pub fn pair(&self) -> Option<&str> {
        match self {
            LogContent::Row { pair, .. } | LogContent::Conversion { pair, .. } => Some(pair),
            LogContent::Text(_) => None,
        }
    }
}

/// A single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: EntryId,
    pub content: LogContent,
}

/// Entries in append order (oldest first). Grows until dismissed or cleared.
#[derive(Debug, Clone, Default)]
pub struct Log {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl Log {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end.
    pub fn append(&mut self, content: LogContent) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(LogEntry { id, content });
        id
    }

    /// Remove an entry. Returns `false` if it is already gone.
    pub fn dismiss(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> LogContent {
        LogContent::Text(vec![s.to_string()])
    }

    #[test]
    fn append_keeps_order() {
        let mut log = Log::new();
        log.append(text("b"));
        log.append(text("a"));
        let texts: Vec<_> = log
            .entries()
            .iter()
            .map(|e| match &e.content {
                LogContent::Text(lines) => lines[0].clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(texts, ["b", "a"]);
    }

    #[test]
    fn dismiss_by_identity() {
        let mut log = Log::new();
        let first = log.append(text("same"));
        let second = log.append(text("same"));
        assert!(log.dismiss(first));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].id, second);
        assert!(!log.dismiss(first));
    }

    #[test]
    fn clear_empties() {
        let mut log = Log::new();
        log.append(text("x"));
        log.append(text("y"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn ids_not_reused_after_clear() {
        let mut log = Log::new();
        let a = log.append(text("x"));
        log.clear();
        let b = log.append(text("y"));
        assert_ne!(a, b);
    }

    #[test]
    fn pair_header() {
        let content = LogContent::Conversion {
            pair: "BTC -> USDT".into(),
            text: "BTC 1 = USDT 2".into(),
        };
        assert_eq!(content.pair(), Some("BTC -> USDT"));
        assert_eq!(text("hi").pair(), None);
    }
}
