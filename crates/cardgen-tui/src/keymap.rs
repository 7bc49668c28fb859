//! Keyboard shortcut handling.
//!
//! Digits always go to the focused input field, so every command key is a
//! letter or a special key.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    Generate,
    NextField,
    Input(char),
    Backspace,
    Copy,
    Clear,
    ScrollUp,
    ScrollDown,
    Home,
    End,
    LogPageUp,
    LogPageDown,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c) if c.is_ascii_digit() => KeyAction::Input(c),
        KeyCode::Char('y') => KeyAction::Copy,
        KeyCode::Char('x') => KeyAction::Clear,
        KeyCode::Enter => KeyAction::Generate,
        KeyCode::Tab | KeyCode::BackTab => KeyAction::NextField,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::PageUp => KeyAction::LogPageUp,
        KeyCode::PageDown => KeyAction::LogPageDown,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_cancels() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Cancel);
    }

    #[test]
    fn digits_are_input() {
        for c in '0'..='9' {
            assert_eq!(map_key(key(KeyCode::Char(c))), KeyAction::Input(c));
        }
    }

    #[test]
    fn form_keys() {
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::Generate);
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
    }

    #[test]
    fn result_keys() {
        assert_eq!(map_key(key(KeyCode::Char('y'))), KeyAction::Copy);
        assert_eq!(map_key(key(KeyCode::Char('x'))), KeyAction::Clear);
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::ScrollUp);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::ScrollDown);
        assert_eq!(map_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(map_key(key(KeyCode::End)), KeyAction::End);
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::LogPageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::LogPageDown);
    }

    #[test]
    fn key_release_ignored() {
        let mut event = key(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), KeyAction::None);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::Char('c'))), KeyAction::None);
    }
}
