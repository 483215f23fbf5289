//! Bridge between price requests and TUI messages.

use std::sync::Arc;

use crossbeam_channel::Sender;

use coinpane_core::dispatch::{FetchDispatcher, FetchRequest};
use coinpane_fetch::{spawn_fetch, PriceSource};

use crate::messages::TuiMessage;

/// Dispatcher that runs each request on a worker thread and posts the
/// completion to the TUI channel.
pub struct TuiFetchDispatcher {
    source: Arc<dyn PriceSource>,
    tx: Sender<TuiMessage>,
}

impl TuiFetchDispatcher {
    #[must_use]
    pub fn new(source: Arc<dyn PriceSource>, tx: Sender<TuiMessage>) -> Self {
        Self { source, tx }
    }
}

impl FetchDispatcher for TuiFetchDispatcher {
    fn dispatch(&self, request: FetchRequest) {
        let tx = self.tx.clone();
        spawn_fetch(Arc::clone(&self.source), request, move |completion| {
            let _ = tx.send(TuiMessage::Fetched(completion));
        });
    }
}
