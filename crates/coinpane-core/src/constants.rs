//! Default symbols, endpoint and display constants.

/// From-symbol shown when the pane mounts.
pub const DEFAULT_FROM_SYMBOL: &str = "BTC";

/// To-symbol shown when the pane mounts.
pub const DEFAULT_TO_SYMBOL: &str = "USDT";

/// Items seeded into the From menu (sorted on construction).
pub const DEFAULT_FROM_SYMBOLS: [&str; 10] = [
    "BTC", "ETC", "XRP", "DOGE", "STR", "BCH", "MAID", "DASH", "BCN", "XEM",
];

/// Items seeded into the To menu (sorted on construction).
pub const DEFAULT_TO_SYMBOLS: [&str; 3] = ["USDT", "BTC", "ETH"];

/// Glyph rendered in table cells that have no data.
pub const PLACEHOLDER: &str = "-";

/// Text written into conversion fields that hold no number.
pub const NAN_MARKER: &str = "NaN";

/// Default title of the pane.
pub const DEFAULT_TITLE: &str = "CryptoCompare";

/// Price endpoint queried for a from/to pair.
pub const PRICE_ENDPOINT: &str = "https://min-api.cryptocompare.com/data/pricemultifull";

/// Query key carrying the from-symbol list.
pub const FROM_QUERY_KEY: &str = "fsyms";

/// Query key carrying the to-symbol list.
pub const TO_QUERY_KEY: &str = "tsyms";

/// Shortest accepted symbol.
pub const MIN_SYMBOL_LEN: usize = 2;

/// Longest accepted symbol (the input box holds five characters).
pub const MAX_SYMBOL_LEN: usize = 5;

/// Exit codes for the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
