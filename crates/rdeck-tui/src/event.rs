//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rdeck_app::message::Message;
use rdeck_app::InputKey;
use rdeck_core::prelude::*;

/// How long `poll` waits for input before emitting a tick
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // Resize is picked up by the next draw
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(key_event_to_input(key(KeyCode::Char('j'))), Some(InputKey::Char('j')));
        assert_eq!(key_event_to_input(key(KeyCode::Char('3'))), Some(InputKey::Char('3')));
    }

    #[test]
    fn test_ctrl_c_conversion() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(ev), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_event_to_input(key(KeyCode::Up)), Some(InputKey::Up));
        assert_eq!(key_event_to_input(key(KeyCode::Down)), Some(InputKey::Down));
        assert_eq!(key_event_to_input(key(KeyCode::Left)), Some(InputKey::Left));
        assert_eq!(key_event_to_input(key(KeyCode::Right)), Some(InputKey::Right));
        assert_eq!(key_event_to_input(key(KeyCode::PageDown)), Some(InputKey::PageDown));
        assert_eq!(key_event_to_input(key(KeyCode::Home)), Some(InputKey::Home));
    }

    #[test]
    fn test_backtab_variants() {
        let shift_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(shift_tab), Some(InputKey::BackTab));
        assert_eq!(key_event_to_input(key(KeyCode::BackTab)), Some(InputKey::BackTab));
        assert_eq!(key_event_to_input(key(KeyCode::Tab)), Some(InputKey::Tab));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(key_event_to_input(key(KeyCode::F(5))), None);
        assert_eq!(key_event_to_input(key(KeyCode::Insert)), None);
    }
}
