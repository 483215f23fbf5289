//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use coinpane_core::constants::{DEFAULT_FROM_SYMBOL, DEFAULT_TITLE, DEFAULT_TO_SYMBOL, PRICE_ENDPOINT};
use coinpane_core::selector::{validate_symbol, RejectReason};

/// Invalid flag values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid --{flag} symbol {value:?}: {reason}")]
    InvalidSymbol {
        flag: &'static str,
        value: String,
        reason: RejectReason,
    },
    #[error("invalid --timeout {0:?}: expected a duration such as 5s, 500ms or 0")]
    InvalidTimeout(String),
}

/// coinpane: cryptocurrency prices and conversion in the terminal.
#[derive(Parser, Debug)]
#[command(name = "coinpane", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Pane title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Starting currency to convert from.
    #[arg(long, default_value = DEFAULT_FROM_SYMBOL, env = "COINPANE_FROM")]
    pub from: String,

    /// Starting currency to convert to.
    #[arg(long, default_value = DEFAULT_TO_SYMBOL, env = "COINPANE_TO")]
    pub to: String,

    /// Price endpoint URL.
    #[arg(long, default_value = PRICE_ENDPOINT, env = "COINPANE_ENDPOINT")]
    pub endpoint: String,

    /// Serve prices from a JSON file instead of the network.
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Request timeout (e.g., "5s", "500ms"); "0" waits forever.
    #[arg(long, default_value = "0")]
    pub timeout: String,

    /// Print one quote and exit instead of opening the interactive pane.
    #[arg(long)]
    pub quote: bool,

    /// Amount to convert in quote mode.
    #[arg(long, default_value = "1")]
    pub amount: String,

    /// Quiet mode (only output the converted value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file (the interactive pane never logs to the terminal).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Normalised from-symbol.
    pub fn from_symbol(&self) -> Result<String, ConfigError> {
        checked_symbol("from", &self.from)
    }

    /// Normalised to-symbol.
    pub fn to_symbol(&self) -> Result<String, ConfigError> {
        checked_symbol("to", &self.to)
    }

    /// Parse the timeout. `None` means no timeout.
    pub fn timeout_duration(&self) -> Result<Option<Duration>, ConfigError> {
        match parse_duration(&self.timeout) {
            Some(d) if d.is_zero() => Ok(None),
            Some(d) => Ok(Some(d)),
            None => Err(ConfigError::InvalidTimeout(self.timeout.clone())),
        }
    }
}

/// Command-line values tolerate surrounding whitespace; menu input does not.
fn checked_symbol(flag: &'static str, value: &str) -> Result<String, ConfigError> {
    validate_symbol(value.trim()).map_err(|reason| ConfigError::InvalidSymbol {
        flag,
        value: value.to_string(),
        reason,
    })
}

/// Parse a duration string like "5m", "30s", "500ms"; bare numbers are seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
