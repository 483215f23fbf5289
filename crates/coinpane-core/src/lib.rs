//! # coinpane-core
//!
//! Core state of the currency info pane: ordered selector menus with a flagged
//! subset, a pair of rate-linked conversion fields, the table formatter, the
//! append-only log, and the pane that ties them to sequence-numbered price fetches.
//! Nothing in this crate performs I/O.

pub mod constants;
pub mod converter;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod log;
pub mod pane;
pub mod payload;
pub mod selector;

pub use constants::{DEFAULT_FROM_SYMBOL, DEFAULT_TO_SYMBOL, PLACEHOLDER};
pub use converter::{Converter, FieldSide};
pub use dispatch::{FetchCompletion, FetchDispatcher, FetchRequest, QueuedDispatcher};
pub use error::PaneError;
pub use format::{format_cell, FormattedCell, TableFormat, Tone, TABLE_FORMATS};
pub use log::{EntryId, Log, LogContent, LogEntry};
pub use pane::{InfoPane, TableRow};
pub use payload::PricePayload;
pub use selector::{
    validate_symbol, Item, ItemId, MenuView, RejectReason, Selection, SelectorMenu, Side,
    SubmitOutcome,
};
