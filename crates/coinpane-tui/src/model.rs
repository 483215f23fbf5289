//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use coinpane_core::constants::MAX_SYMBOL_LEN;
use coinpane_core::converter::FieldSide;
use coinpane_core::pane::InfoPane;
use coinpane_core::selector::{ItemId, Side, SubmitOutcome};

use crate::converter::render_converter;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_log, LogCursor};
use crate::menus::render_menu;
use crate::messages::TuiMessage;
use crate::table::render_info_table;

const PAGE_SIZE: usize = 10;

/// Panel receiving key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FromMenu,
    ToMenu,
    Table,
    Converter,
    Log,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Focus::FromMenu => Focus::ToMenu,
            Focus::ToMenu => Focus::Table,
            Focus::Table => Focus::Converter,
            Focus::Converter => Focus::Log,
            Focus::Log => Focus::FromMenu,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Focus::FromMenu => Focus::Log,
            Focus::ToMenu => Focus::FromMenu,
            Focus::Table => Focus::ToMenu,
            Focus::Converter => Focus::Table,
            Focus::Log => Focus::Converter,
        }
    }

    /// The menu side, for menu panels.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            Focus::FromMenu => Some(Side::From),
            Focus::ToMenu => Some(Side::To),
            _ => None,
        }
    }
}

/// Whether a text box is open, and which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing a new symbol into a menu.
    Insert(Side),
    /// Typing into a converter field.
    Edit(FieldSide),
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// The pane being shown.
    pub pane: InfoPane,
    pub focus: Focus,
    pub mode: Mode,
    /// Contents of the open text box.
    pub input: String,
    /// Cursor into the From menu's visible items.
    pub from_cursor: usize,
    /// Cursor into the To menu's visible items.
    pub to_cursor: usize,
    pub table_cursor: usize,
    /// Converter field under the cursor.
    pub field: FieldSide,
    pub log_cursor: LogCursor,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Sequence number of the last completion the pane accepted.
    applied_seq: u64,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl TuiApp {
    /// Wrap a mounted pane. Menu cursors start on the selected items.
    #[must_use]
    pub fn new(pane: InfoPane, rx: Receiver<TuiMessage>) -> Self {
        let mut app = Self {
            pane,
            focus: Focus::FromMenu,
            mode: Mode::Normal,
            input: String::new(),
            from_cursor: 0,
            to_cursor: 0,
            table_cursor: 0,
            field: FieldSide::From,
            log_cursor: LogCursor::new(),
            should_quit: false,
            applied_seq: 0,
            rx,
            terminal_width: 80,
            terminal_height: 24,
        };
        for side in [Side::From, Side::To] {
            if let Some(id) = app.pane.menu(side).selected().map(|item| item.id()) {
                app.move_cursor_to(side, id);
            }
        }
        app.log_cursor.sync(app.pane.log().len());
        app
    }

    /// Whether a text box is open.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode != Mode::Normal
    }

    /// Whether the latest request has not been answered yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pane.latest_seq() != self.applied_seq
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Fetched(completion) => {
                let seq = completion.request.seq;
                if self.pane.complete(completion) {
                    self.applied_seq = seq;
                }
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {}
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            self.should_quit = true;
            return;
        }
        match self.mode {
            Mode::Insert(side) => self.handle_insert(side, action),
            Mode::Edit(field) => self.handle_edit(field, action),
            Mode::Normal => self.handle_normal(action),
        }
        self.log_cursor.sync(self.pane.log().len());
        self.clamp_menu_cursors();
    }

    fn handle_normal(&mut self, action: KeyAction) {
        match action {
            KeyAction::FocusNext => self.focus = self.focus.next(),
            KeyAction::FocusPrev => self.focus = self.focus.prev(),
            KeyAction::Refresh => {
                self.pane.refresh();
            }
            _ => match self.focus {
                Focus::FromMenu => self.handle_menu(Side::From, action),
                Focus::ToMenu => self.handle_menu(Side::To, action),
                Focus::Table => self.handle_table(action),
                Focus::Converter => self.handle_converter(action),
                Focus::Log => self.handle_log(action),
            },
        }
    }

    fn handle_menu(&mut self, side: Side, action: KeyAction) {
        let len = self.pane.menu(side).visible().len();
        let highlighted = self.highlighted_item(side);
        match action {
            KeyAction::Up => *self.cursor_mut(side) = self.cursor(side).saturating_sub(1),
            KeyAction::Down => {
                *self.cursor_mut(side) = (self.cursor(side) + 1).min(len.saturating_sub(1));
            }
            KeyAction::PageUp => {
                *self.cursor_mut(side) = self.cursor(side).saturating_sub(PAGE_SIZE);
            }
            KeyAction::PageDown => {
                *self.cursor_mut(side) =
                    (self.cursor(side) + PAGE_SIZE).min(len.saturating_sub(1));
            }
            KeyAction::Home => *self.cursor_mut(side) = 0,
            KeyAction::End => *self.cursor_mut(side) = len.saturating_sub(1),
            KeyAction::Activate => {
                if let Some(id) = highlighted {
                    self.pane.select(side, id);
                }
            }
            KeyAction::ToggleFlag => {
                if let Some(id) = highlighted {
                    self.pane.menu_mut(side).toggle_flag(id);
                }
            }
            KeyAction::Remove => {
                if let Some(id) = highlighted {
                    self.pane.menu_mut(side).remove(id);
                }
            }
            KeyAction::ShowAll => {
                self.pane.menu_mut(side).filter_view(false);
                *self.cursor_mut(side) = 0;
            }
            KeyAction::ShowFlagged => {
                self.pane.menu_mut(side).filter_view(true);
                *self.cursor_mut(side) = 0;
            }
            KeyAction::Insert => {
                self.input.clear();
                self.mode = Mode::Insert(side);
            }
            _ => {}
        }
    }

    fn handle_insert(&mut self, side: Side, action: KeyAction) {
        match action {
            KeyAction::Input(c) => {
                if self.input.chars().count() < MAX_SYMBOL_LEN {
                    self.input.push(c);
                }
            }
            KeyAction::Backspace => {
                self.input.pop();
            }
            KeyAction::Cancel => {
                self.input.clear();
                self.mode = Mode::Normal;
            }
            KeyAction::Activate => {
                // A rejected symbol leaves the box open with its text.
                if let SubmitOutcome::Inserted { id, .. } = self.pane.menu_mut(side).submit(&self.input) {
                    self.input.clear();
                    self.mode = Mode::Normal;
                    self.move_cursor_to(side, id);
                }
            }
            _ => {}
        }
    }

    fn handle_table(&mut self, action: KeyAction) {
        let last = self.pane.table().len().saturating_sub(1);
        match action {
            KeyAction::Up => self.table_cursor = self.table_cursor.saturating_sub(1),
            KeyAction::Down => self.table_cursor = (self.table_cursor + 1).min(last),
            KeyAction::Home => self.table_cursor = 0,
            KeyAction::End => self.table_cursor = last,
            KeyAction::Activate => {
                if let Err(err) = self.pane.log_row(self.table_cursor) {
                    debug!(%err, "row not logged");
                }
            }
            _ => {}
        }
    }

    fn handle_converter(&mut self, action: KeyAction) {
        match action {
            KeyAction::Up => self.field = FieldSide::From,
            KeyAction::Down => self.field = FieldSide::To,
            KeyAction::Edit | KeyAction::Activate => {
                self.input = self.pane.converter().field(self.field).text().to_string();
                self.mode = Mode::Edit(self.field);
            }
            KeyAction::LogConversion => {
                self.pane.log_conversion();
            }
            _ => {}
        }
    }

    fn handle_edit(&mut self, field: FieldSide, action: KeyAction) {
        match action {
            KeyAction::Input(c) => {
                self.input.push(c);
                self.pane.converter_mut().set_text(field, self.input.clone());
            }
            KeyAction::Backspace => {
                self.input.pop();
                self.pane.converter_mut().set_text(field, self.input.clone());
            }
            // Leaving the field commits it, whichever key closed the box.
            KeyAction::Activate | KeyAction::Cancel => {
                let converter = self.pane.converter_mut();
                converter.set_text(field, std::mem::take(&mut self.input));
                converter.commit(field);
                self.mode = Mode::Normal;
            }
            _ => {}
        }
    }

    fn handle_log(&mut self, action: KeyAction) {
        let total = self.pane.log().len();
        match action {
            KeyAction::Up => self.log_cursor.up(),
            KeyAction::Down => self.log_cursor.down(total),
            KeyAction::PageUp => self.log_cursor.page_up(PAGE_SIZE),
            KeyAction::PageDown => self.log_cursor.page_down(PAGE_SIZE, total),
            KeyAction::Home => self.log_cursor.home(),
            KeyAction::End => self.log_cursor.end(total),
            KeyAction::Activate | KeyAction::Remove => {
                let id = self
                    .pane
                    .log()
                    .entries()
                    .get(self.log_cursor.selected)
                    .map(|entry| entry.id);
                if let Some(id) = id {
                    self.pane.log_mut().dismiss(id);
                }
            }
            KeyAction::ClearLog => self.pane.log_mut().clear(),
            _ => {}
        }
    }

    fn cursor(&self, side: Side) -> usize {
        match side {
            Side::From => self.from_cursor,
            Side::To => self.to_cursor,
        }
    }

    fn cursor_mut(&mut self, side: Side) -> &mut usize {
        match side {
            Side::From => &mut self.from_cursor,
            Side::To => &mut self.to_cursor,
        }
    }

    /// Id of the visible item under a menu's cursor.
    #[must_use]
    pub fn highlighted_item(&self, side: Side) -> Option<ItemId> {
        self.pane
            .menu(side)
            .visible()
            .get(self.cursor(side))
            .map(|item| item.id())
    }

    fn move_cursor_to(&mut self, side: Side, id: ItemId) {
        let position = self
            .pane
            .menu(side)
            .visible()
            .iter()
            .position(|item| item.id() == id);
        if let Some(index) = position {
            *self.cursor_mut(side) = index;
        }
    }

    fn clamp_menu_cursors(&mut self) {
        for side in [Side::From, Side::To] {
            let last = self.pane.menu(side).visible().len().saturating_sub(1);
            let cursor = self.cursor_mut(side);
            *cursor = (*cursor).min(last);
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, `from_menu`, `to_menu`, table, converter, log, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> [Rect; 7] {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),      // header
                Constraint::Percentage(55), // menus and info
                Constraint::Min(4),         // log
                Constraint::Length(2),      // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Min(30),
            ])
            .split(outer[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(9), Constraint::Length(4)])
            .split(main[2]);

        [
            outer[0], main[0], main[1], info[0], info[1], outer[2], outer[3],
        ]
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let [header, from_area, to_area, table_area, converter_area, log_area, footer] =
            Self::compute_layout(frame.area());

        render_header(
            frame,
            header,
            self.pane.title(),
            &self.pane.pair_label(),
            self.is_loading(),
        );

        for (side, area, cursor) in [
            (Side::From, from_area, self.from_cursor),
            (Side::To, to_area, self.to_cursor),
        ] {
            let input = match self.mode {
                Mode::Insert(s) if s == side => Some(self.input.as_str()),
                _ => None,
            };
            let focused = self.focus.side() == Some(side);
            render_menu(frame, area, self.pane.menu(side), cursor, focused, input);
        }

        render_info_table(
            frame,
            table_area,
            self.pane.table(),
            self.table_cursor,
            self.focus == Focus::Table,
        );

        let editing = match self.mode {
            Mode::Edit(_) => Some(self.input.as_str()),
            _ => None,
        };
        render_converter(
            frame,
            converter_area,
            self.pane.converter(),
            self.field,
            editing,
            self.focus == Focus::Converter,
        );

        render_log(
            frame,
            log_area,
            self.pane.log(),
            &self.log_cursor,
            self.focus == Focus::Log,
        );

        render_footer(frame, footer, self.focus, self.mode);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(100);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        let action = map_key(key_event, self.is_editing());
                        self.handle_key_action(action);
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            // Apply finished price requests
            self.update();
        }
    }
}
