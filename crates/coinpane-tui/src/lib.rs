//! # coinpane-tui
//!
//! Terminal view of the currency info pane using ratatui with Elm architecture.

pub mod bridge;
pub mod converter;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod menus;
pub mod messages;
pub mod model;
pub mod styles;
pub mod table;

use std::sync::Arc;

use coinpane_core::error::PaneError;
use coinpane_core::pane::InfoPane;
use coinpane_fetch::PriceSource;

pub use bridge::TuiFetchDispatcher;
pub use keymap::KeyAction;
pub use logs::LogCursor;
pub use messages::TuiMessage;
pub use model::{Focus, Mode, TuiApp};

/// Errors that end a terminal session.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Pane(#[from] PaneError),
}

/// What [`mount`] needs besides the title.
pub struct MountOptions {
    /// Starting from-symbol.
    pub from: String,
    /// Starting to-symbol.
    pub to: String,
    /// Where price requests go.
    pub source: Arc<dyn PriceSource>,
}

/// Build the pane, attach it to the terminal and run until the user quits.
///
/// The welcome message is logged and the initial fetch issued before the
/// first frame is drawn.
pub fn mount(title: &str, options: MountOptions) -> Result<(), TuiError> {
    let (tx, rx) = crossbeam_channel::unbounded();
    let dispatcher = TuiFetchDispatcher::new(options.source, tx);
    let pane = InfoPane::mount_with(title, &options.from, &options.to, Box::new(dispatcher))?;
    let mut app = TuiApp::new(pane, rx);
    app.run()?;
    Ok(())
}
