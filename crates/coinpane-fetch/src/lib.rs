//! # coinpane-fetch
//!
//! Remote data fetch for the currency info pane. A [`PriceSource`] turns a
//! from/to pair into a parsed JSON body; [`spawn_fetch`] runs one source call on
//! a worker thread and hands the result to a completion callback exactly once.

pub mod error;
pub mod source;
pub mod spawn;
pub mod url;

pub use error::FetchError;
pub use source::{FixtureSource, HttpPriceSource, PriceSource};
pub use spawn::{spawn_fetch, ThreadDispatcher};
pub use url::price_url;
