//! Currency info pane: the orchestrator.
//!
//! Owns the From and To menus, the current symbol pair, the rendered table, the
//! converter and the log. Selecting an item issues a sequence-numbered fetch
//! through the [`FetchDispatcher`]; a completion is applied only if it answers
//! the most recent request, so a slow reply to an old selection can never
//! overwrite a newer one.

use tracing::{debug, info, warn};

use crate::constants::{
    DEFAULT_FROM_SYMBOL, DEFAULT_FROM_SYMBOLS, DEFAULT_TO_SYMBOL, DEFAULT_TO_SYMBOLS,
};
use crate::converter::Converter;
use crate::dispatch::{FetchCompletion, FetchDispatcher, FetchRequest};
use crate::error::PaneError;
use crate::format::{FormattedCell, Tone, TABLE_FORMATS};
use crate::log::{EntryId, Log, LogContent};
use crate::payload::PricePayload;
use crate::selector::{ItemId, SelectorMenu, Side};

/// Welcome text logged when a pane mounts.
pub const WELCOME_MESSAGE: [&str; 8] = [
    "Welcome to coinpane.",
    "Pick a currency in the From menu, then one in the To menu.",
    "Conversion data for the pair appears in the Currency Info table.",
    "Press Enter on a table row to copy it into this log.",
    "Press l in the converter to log the current conversion.",
    "Press f to flag a currency and + to show only flagged ones.",
    "-",
    "Press Enter on an entry to delete it.",
];

/// One rendered row of the info table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: &'static str,
    pub label: &'static str,
    pub cell: FormattedCell,
}

/// The currency info pane.
pub struct InfoPane {
    title: String,
    from_menu: SelectorMenu,
    to_menu: SelectorMenu,
    from_symbol: String,
    to_symbol: String,
    last_payload: Option<PricePayload>,
    table: Vec<TableRow>,
    converter: Converter,
    log: Log,
    seq: u64,
    dispatcher: Box<dyn FetchDispatcher>,
}

impl InfoPane {
    /// Build a pane with the default menus and the given pair, without
    /// fetching.
    ///
    /// Symbols missing from the default item sets are added to their menu.
    pub fn new(
        title: impl Into<String>,
        from: &str,
        to: &str,
        dispatcher: Box<dyn FetchDispatcher>,
    ) -> Result<Self, PaneError> {
        let mut from_menu = SelectorMenu::new("From", Side::From, DEFAULT_FROM_SYMBOLS);
        let mut to_menu = SelectorMenu::new("To", Side::To, DEFAULT_TO_SYMBOLS);

        let from_id = from_menu
            .ensure(from)
            .map_err(|reason| PaneError::InvalidSymbol {
                symbol: from.to_string(),
                reason,
            })?;
        let to_id = to_menu.ensure(to).map_err(|reason| PaneError::InvalidSymbol {
            symbol: to.to_string(),
            reason,
        })?;

        // Highlight the starting pair without issuing requests.
        let from_symbol = from_menu
            .select(from_id)
            .map(|s| s.symbol)
            .ok_or(PaneError::UnknownItem(from_id.get()))?;
        let to_symbol = to_menu
            .select(to_id)
            .map(|s| s.symbol)
            .ok_or(PaneError::UnknownItem(to_id.get()))?;

        let mut converter = Converter::new();
        converter.set_labels(&from_symbol, &to_symbol);

        Ok(Self {
            title: title.into(),
            from_menu,
            to_menu,
            from_symbol,
            to_symbol,
            last_payload: None,
            table: placeholder_table(),
            converter,
            log: Log::new(),
            seq: 0,
            dispatcher,
        })
    }

    /// Build the pane with the default pair, log the welcome message and issue
    /// the initial fetch.
    #[must_use]
    pub fn mount(title: impl Into<String>, dispatcher: Box<dyn FetchDispatcher>) -> Self {
        Self::mount_with(title, DEFAULT_FROM_SYMBOL, DEFAULT_TO_SYMBOL, dispatcher)
            .expect("default symbols are valid")
    }

    /// [`InfoPane::mount`] with a chosen starting pair.
    pub fn mount_with(
        title: impl Into<String>,
        from: &str,
        to: &str,
        dispatcher: Box<dyn FetchDispatcher>,
    ) -> Result<Self, PaneError> {
        let mut pane = Self::new(title, from, to, dispatcher)?;
        pane.log_text(WELCOME_MESSAGE.iter().map(ToString::to_string).collect());
        pane.request_fetch();
        Ok(pane)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn from_symbol(&self) -> &str {
        &self.from_symbol
    }

    #[must_use]
    pub fn to_symbol(&self) -> &str {
        &self.to_symbol
    }

    /// `"FROM -> TO"`.
    #[must_use]
    pub fn pair_label(&self) -> String {
        format!("{} -> {}", self.from_symbol, self.to_symbol)
    }

    #[must_use]
    pub fn menu(&self, side: Side) -> &SelectorMenu {
        match side {
            Side::From => &self.from_menu,
            Side::To => &self.to_menu,
        }
    }

    /// Mutable access for submit, flag, remove and view changes.
    pub fn menu_mut(&mut self, side: Side) -> &mut SelectorMenu {
        match side {
            Side::From => &mut self.from_menu,
            Side::To => &mut self.to_menu,
        }
    }

    #[must_use]
    pub fn table(&self) -> &[TableRow] {
        &self.table
    }

    #[must_use]
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn converter_mut(&mut self) -> &mut Converter {
        &mut self.converter
    }

    #[must_use]
    pub fn log(&self) -> &Log {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut Log {
        &mut self.log
    }

    /// Body of the last applied completion.
    #[must_use]
    pub fn last_payload(&self) -> Option<&PricePayload> {
        self.last_payload.as_ref()
    }

    /// Sequence number of the most recently issued request (0 before any).
    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    /// Toggle an item in one of the menus and fetch data for the new pair.
    ///
    /// Returns the issued request, or `None` when the id is unknown.
    pub fn select(&mut self, side: Side, id: ItemId) -> Option<FetchRequest> {
        let selection = self.menu_mut(side).select(id)?;
        match selection.side {
            Side::From => self.from_symbol = selection.symbol,
            Side::To => self.to_symbol = selection.symbol,
        }
        Some(self.request_fetch())
    }

    /// Re-issue the fetch for the current pair.
    pub fn refresh(&mut self) -> FetchRequest {
        self.request_fetch()
    }

    fn request_fetch(&mut self) -> FetchRequest {
        self.seq += 1;
        let request = FetchRequest {
            seq: self.seq,
            from: self.from_symbol.clone(),
            to: self.to_symbol.clone(),
        };
        info!(seq = request.seq, from = %request.from, to = %request.to, "fetching prices");
        self.dispatcher.dispatch(request.clone());
        request
    }

    /// Apply a finished request. Stale completions are discarded.
    ///
    /// Returns whether the completion was applied.
    pub fn complete(&mut self, completion: FetchCompletion) -> bool {
        let FetchCompletion { request, payload } = completion;
        if request.seq != self.seq {
            debug!(
                seq = request.seq,
                latest = self.seq,
                "discarding stale price data"
            );
            return false;
        }

        let price = if payload.is_error() {
            warn!(
                from = %request.from,
                to = %request.to,
                message = payload.message().unwrap_or("unknown error"),
                "price request failed"
            );
            self.table = placeholder_table();
            0.0
        } else {
            self.table = render_table(&payload, &request.from, &request.to);
            payload.raw_price(&request.from, &request.to).unwrap_or(0.0)
        };

        self.converter.set_labels(&request.from, &request.to);
        self.converter.set_rates(price);
        self.last_payload = Some(payload);
        true
    }

    /// Copy a table row into the log: label cell then value cell.
    pub fn log_row(&mut self, index: usize) -> Result<EntryId, PaneError> {
        let row = self
            .table
            .get(index)
            .ok_or(PaneError::RowOutOfRange(index))?;
        let cells = vec![
            FormattedCell {
                text: row.label.to_string(),
                tone: Tone::Neutral,
            },
            row.cell.clone(),
        ];
        let pair = self.pair_label();
        Ok(self.log.append(LogContent::Row { pair, cells }))
    }

    /// Log the converter's current line.
    pub fn log_conversion(&mut self) -> EntryId {
        let pair = self.pair_label();
        let text = self.converter.conversion_text();
        self.log.append(LogContent::Conversion { pair, text })
    }

    /// Log free text.
    pub fn log_text(&mut self, lines: Vec<String>) -> EntryId {
        self.log.append(LogContent::Text(lines))
    }
}

fn placeholder_table() -> Vec<TableRow> {
    TABLE_FORMATS
        .iter()
        .map(|fmt| TableRow {
            key: fmt.key,
            label: fmt.display_name,
            cell: FormattedCell::placeholder(),
        })
        .collect()
}

fn render_table(payload: &PricePayload, from: &str, to: &str) -> Vec<TableRow> {
    TABLE_FORMATS
        .iter()
        .map(|fmt| TableRow {
            key: fmt.key,
            label: fmt.display_name,
            cell: payload
                .display(from, to, fmt.key)
                .map_or_else(FormattedCell::placeholder, |raw| fmt.format(&raw)),
        })
        .collect()
}
