//! coinpane library: application logic for the currency info pane.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
