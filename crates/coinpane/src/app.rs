//! Application entry point and dispatch.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use coinpane_cli::presenter::QuotePresenter;
use coinpane_cli::quote::{fetch_quote, QuoteRequest};
use coinpane_cli::ui::{is_color_disabled, print_warning};
use coinpane_core::converter::parse_number;
use coinpane_fetch::{FixtureSource, HttpPriceSource, PriceSource};
use coinpane_tui::MountOptions;

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        coinpane_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    info!(version = %full_version(), "starting");
    let from = config.from_symbol()?;
    let to = config.to_symbol()?;
    let source = build_source(config)?;

    if config.quote {
        return run_quote(config, from, to, source);
    }
    run_tui(config, from, to, source)
}

/// Pick the price source: a fixture file when given, the HTTP endpoint otherwise.
pub fn build_source(config: &AppConfig) -> Result<Arc<dyn PriceSource>> {
    if let Some(path) = &config.fixture {
        info!(path = %path.display(), "serving prices from fixture");
        return Ok(Arc::new(FixtureSource::new(path)));
    }
    let timeout = config.timeout_duration()?;
    let source = HttpPriceSource::new(config.endpoint.as_str(), timeout)
        .context("failed to build HTTP client")?;
    Ok(Arc::new(source))
}

fn run_quote(config: &AppConfig, from: String, to: String, source: Arc<dyn PriceSource>) -> Result<()> {
    let request = QuoteRequest {
        title: config.title.clone(),
        from,
        to,
        amount: config.amount.clone(),
    };
    if parse_number(&request.amount).is_none() {
        print_warning(&format!("amount {:?} is not a number", request.amount));
    }
    let spinner = !config.quiet && io::stderr().is_terminal();
    let pane = fetch_quote(&request, source, spinner)?;

    let presenter = QuotePresenter::new(config.quiet, !is_color_disabled());
    presenter.present(&pane, &mut io::stdout().lock())?;

    if let Some(payload) = pane.last_payload().filter(|p| p.is_error()) {
        anyhow::bail!(
            "price request failed: {}",
            payload.message().unwrap_or("unknown error")
        );
    }
    Ok(())
}

fn run_tui(config: &AppConfig, from: String, to: String, source: Arc<dyn PriceSource>) -> Result<()> {
    let options = MountOptions { from, to, source };
    coinpane_tui::mount(&config.title, options)?;
    Ok(())
}
