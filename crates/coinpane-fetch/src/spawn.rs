//! Threaded request execution.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use tracing::debug;

use coinpane_core::dispatch::{FetchCompletion, FetchDispatcher, FetchRequest};

use crate::source::PriceSource;

/// Run one request on a worker thread and call `on_complete` with the result.
///
/// The callback fires exactly once, with an error payload if the request
/// failed. There is no retry and no cancellation.
pub fn spawn_fetch<F>(source: Arc<dyn PriceSource>, request: FetchRequest, on_complete: F) -> JoinHandle<()>
where
    F: FnOnce(FetchCompletion) + Send + 'static,
{
    std::thread::spawn(move || {
        let payload = source.fetch_payload(&request.from, &request.to);
        debug!(seq = request.seq, error = payload.is_error(), "fetch finished");
        on_complete(FetchCompletion { request, payload });
    })
}

type Deliver = dyn Fn(FetchCompletion) + Send + Sync;

/// Dispatcher that runs each request on its own thread.
pub struct ThreadDispatcher {
    source: Arc<dyn PriceSource>,
    deliver: Arc<Deliver>,
}

impl ThreadDispatcher {
    /// Deliver completions through `deliver`, called on the worker thread.
    pub fn new<F>(source: Arc<dyn PriceSource>, deliver: F) -> Self
    where
        F: Fn(FetchCompletion) + Send + Sync + 'static,
    {
        Self {
            source,
            deliver: Arc::new(deliver),
        }
    }

    /// Deliver completions on a channel. Sends after the receiver is gone are dropped.
    #[must_use]
    pub fn with_channel(source: Arc<dyn PriceSource>, tx: Sender<FetchCompletion>) -> Self {
        Self::new(source, move |completion| {
            let _ = tx.send(completion);
        })
    }
}

impl FetchDispatcher for ThreadDispatcher {
    fn dispatch(&self, request: FetchRequest) {
        let deliver = Arc::clone(&self.deliver);
        spawn_fetch(Arc::clone(&self.source), request, move |completion| {
            deliver(completion);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::{json, Value};

    use super::*;
    use crate::error::FetchError;

    struct StaticSource(Value);

    impl PriceSource for StaticSource {
        fn fetch(&self, _from: &str, _to: &str) -> Result<Value, FetchError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    fn request(seq: u64) -> FetchRequest {
        FetchRequest {
            seq,
            from: "BTC".into(),
            to: "USDT".into(),
        }
    }

    #[test]
    fn spawn_fetch_calls_back_once() {
        let source: Arc<dyn PriceSource> = Arc::new(StaticSource(json!({ "Response": "Error" })));
        let (tx, rx) = crossbeam_channel::unbounded();
        spawn_fetch(source, request(3), move |c| tx.send(c).unwrap())
            .join()
            .unwrap();
        let completion = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(completion.request.seq, 3);
        assert!(completion.payload.is_error());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn thread_dispatcher_delivers_on_channel() {
        let source: Arc<dyn PriceSource> =
            Arc::new(StaticSource(json!({ "RAW": { "BTC": { "USDT": { "PRICE": 1.5 } } } })));
        let (tx, rx) = crossbeam_channel::unbounded();
        let dispatcher = ThreadDispatcher::with_channel(source, tx);
        dispatcher.dispatch(request(1));
        dispatcher.dispatch(request(2));

        let mut seqs: Vec<u64> = (0..2)
            .map(|_| rx.recv_timeout(Duration::from_secs(5)).unwrap().request.seq)
            .collect();
        seqs.sort_unstable();
        assert_eq!(seqs, [1, 2]);
    }

    #[test]
    fn closed_channel_is_ignored() {
        let source: Arc<dyn PriceSource> = Arc::new(StaticSource(json!({})));
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let dispatcher = ThreadDispatcher::with_channel(source, tx);
        dispatcher.dispatch(request(1));
    }
}
