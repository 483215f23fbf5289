//! Error type for pane-level operations.

use crate::selector::RejectReason;

/// Errors surfaced by the pane API.
///
/// None of these halt the pane; they report misuse of the API (unknown ids,
/// out-of-range rows) or invalid configured symbols.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaneError {
    /// The symbol does not satisfy the 2-5 uppercase letter rule.
    #[error("invalid symbol {symbol:?}: {reason}")]
    InvalidSymbol {
        symbol: String,
        reason: RejectReason,
    },

    /// No item with this id lives in the menu.
    #[error("unknown item id {0}")]
    UnknownItem(u64),

    /// The table has no row at this index.
    #[error("table row {0} out of range")]
    RowOutOfRange(usize),
}
