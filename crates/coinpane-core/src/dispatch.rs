//! Hand-off between the pane and whatever performs price requests.

use parking_lot::Mutex;

use crate::payload::PricePayload;

/// A price request issued by the pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number; only the latest issued one is applied on completion.
    pub seq: u64,
    pub from: String,
    pub to: String,
}

/// A finished request and its parsed body.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCompletion {
    pub request: FetchRequest,
    pub payload: PricePayload,
}

/// Trait for issuing price requests on behalf of a pane.
///
/// Implementations must eventually deliver exactly one [`FetchCompletion`] per
/// request back to the pane; they never call into the pane directly.
pub trait FetchDispatcher: Send + Sync {
    /// Start a request. Must not block on the network.
    fn dispatch(&self, request: FetchRequest);
}

/// Dispatcher that drops every request.
pub struct NullDispatcher;

impl FetchDispatcher for NullDispatcher {
    fn dispatch(&self, _request: FetchRequest) {}
}

/// Dispatcher that queues requests for the caller to run later.
#[derive(Default)]
pub struct QueuedDispatcher {
    queue: Mutex<Vec<FetchRequest>>,
}

impl QueuedDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued request, oldest first.
    pub fn drain(&self) -> Vec<FetchRequest> {
        std::mem::take(&mut *self.queue.lock())
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }
}

impl FetchDispatcher for QueuedDispatcher {
    fn dispatch(&self, request: FetchRequest) {
        self.queue.lock().push(request);
    }
}

impl<T: FetchDispatcher + ?Sized> FetchDispatcher for std::sync::Arc<T> {
    fn dispatch(&self, request: FetchRequest) {
        (**self).dispatch(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(seq: u64) -> FetchRequest {
        FetchRequest {
            seq,
            from: "BTC".into(),
            to: "USDT".into(),
        }
    }

    #[test]
    fn null_dispatcher() {
        NullDispatcher.dispatch(request(1));
    }

    #[test]
    fn queued_dispatcher_drains_in_order() {
        let d = QueuedDispatcher::new();
        d.dispatch(request(1));
        d.dispatch(request(2));
        assert_eq!(d.pending(), 2);
        let drained: Vec<u64> = d.drain().iter().map(|r| r.seq).collect();
        assert_eq!(drained, [1, 2]);
        assert_eq!(d.pending(), 0);
    }

    #[test]
    fn arc_forwards() {
        let d = std::sync::Arc::new(QueuedDispatcher::new());
        let shared: std::sync::Arc<QueuedDispatcher> = d.clone();
        shared.dispatch(request(7));
        assert_eq!(d.pending(), 1);
    }
}
