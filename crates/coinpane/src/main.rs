//! coinpane: cryptocurrency prices and conversion in the terminal.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use coinpane_cli::ui::print_error;
use coinpane_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = config::AppConfig::parse();

    if let Err(err) = init_tracing(&config).and_then(|()| app::run(&config)) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}

/// Install the subscriber. The interactive pane owns the terminal, so it only
/// logs when a log file is given.
fn init_tracing(config: &config::AppConfig) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if config.quote {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
