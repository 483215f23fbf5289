//! Keyboard shortcut handling.
//!
//! Keys map differently while a text box is open: printable characters go to
//! the box and only Enter, Esc, Backspace and Ctrl-C keep a meaning.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrev,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    /// Enter: select, log a row, edit or commit, dismiss.
    Activate,
    ToggleFlag,
    Remove,
    ShowAll,
    ShowFlagged,
    /// Open the menu's text box.
    Insert,
    /// Start editing a converter field.
    Edit,
    LogConversion,
    ClearLog,
    Refresh,
    /// Close the open text box.
    Cancel,
    Input(char),
    Backspace,
    None,
}

/// Map a key event to an action. `editing` is true while a text box is open.
#[must_use]
pub fn map_key(key: KeyEvent, editing: bool) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if editing {
        return match key.code {
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Esc => KeyAction::Cancel,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) => KeyAction::Input(c),
            _ => KeyAction::None,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => KeyAction::FocusNext,
        KeyCode::BackTab => KeyAction::FocusPrev,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::Enter => KeyAction::Activate,
        KeyCode::Char('f') => KeyAction::ToggleFlag,
        KeyCode::Char('x') | KeyCode::Delete => KeyAction::Remove,
        KeyCode::Char('a') => KeyAction::ShowAll,
        KeyCode::Char('+') => KeyAction::ShowFlagged,
        KeyCode::Char('i') => KeyAction::Insert,
        KeyCode::Char('e') => KeyAction::Edit,
        KeyCode::Char('l') => KeyAction::LogConversion,
        KeyCode::Char('C') => KeyAction::ClearLog,
        KeyCode::Char('r') => KeyAction::Refresh,
        _ => KeyAction::None,
    }
}
