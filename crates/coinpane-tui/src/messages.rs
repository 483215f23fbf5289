//! TUI message types (Elm Messages).

use coinpane_core::dispatch::FetchCompletion;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A price request finished on a worker thread.
    Fetched(FetchCompletion),
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Periodic redraw.
    Tick,
    /// Quit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use coinpane_core::dispatch::FetchRequest;
    use coinpane_core::payload::PricePayload;

    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::Fetched(FetchCompletion {
            request: FetchRequest {
                seq: 1,
                from: "BTC".into(),
                to: "USDT".into(),
            },
            payload: PricePayload::error("offline"),
        });
        assert!(matches!(msg, TuiMessage::Fetched(ref c) if c.request.seq == 1));

        let msg = TuiMessage::KeyPress(KeyAction::Refresh);
        assert!(matches!(msg, TuiMessage::KeyPress(KeyAction::Refresh)));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));
    }
}
