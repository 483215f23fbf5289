//! Headless quote: mount a pane, wait for its first fetch, convert an amount.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use coinpane_core::converter::FieldSide;
use coinpane_core::dispatch::QueuedDispatcher;
use coinpane_core::error::PaneError;
use coinpane_core::pane::InfoPane;
use coinpane_fetch::{spawn_fetch, PriceSource};

/// Errors from [`fetch_quote`].
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error(transparent)]
    Pane(#[from] PaneError),
    #[error("price worker exited without answering")]
    Disconnected,
}

/// What to quote.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub title: String,
    pub from: String,
    pub to: String,
    /// Raw text committed into the from-field.
    pub amount: String,
}

/// Mount a pane, apply the answer to its initial fetch and commit `amount`.
///
/// A spinner is shown on stderr while waiting when `spinner` is set. The
/// returned pane holds the table and the converted value.
pub fn fetch_quote(
    request: &QuoteRequest,
    source: Arc<dyn PriceSource>,
    spinner: bool,
) -> Result<InfoPane, QuoteError> {
    let queue = Arc::new(QueuedDispatcher::new());
    let mut pane = InfoPane::mount_with(
        request.title.as_str(),
        &request.from,
        &request.to,
        Box::new(Arc::clone(&queue)),
    )?;

    // Only the workers hold senders, so a worker that dies disconnects the channel.
    let (tx, rx) = crossbeam_channel::unbounded();
    for fetch in queue.drain() {
        let tx = tx.clone();
        spawn_fetch(Arc::clone(&source), fetch, move |completion| {
            let _ = tx.send(completion);
        });
    }
    drop(tx);

    let bar = if spinner {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(format!("Fetching {}", pane.pair_label()));

    loop {
        match rx.recv_timeout(Duration::from_millis(80)) {
            Ok(completion) => {
                if pane.complete(completion) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => bar.tick(),
            Err(RecvTimeoutError::Disconnected) => {
                bar.finish_and_clear();
                return Err(QuoteError::Disconnected);
            }
        }
    }
    bar.finish_and_clear();

    let converter = pane.converter_mut();
    converter.set_text(FieldSide::From, request.amount.as_str());
    converter.commit(FieldSide::From);
    debug!(conversion = %pane.converter().conversion_text(), "quote ready");
    Ok(pane)
}
