//! # coinpane-cli
//!
//! One-shot quote output, spinner display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod quote;
pub mod ui;

pub use presenter::QuotePresenter;
pub use quote::{fetch_quote, QuoteError, QuoteRequest};
