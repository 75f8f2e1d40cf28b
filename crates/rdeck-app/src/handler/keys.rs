//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::{FocusMove, Message};
use crate::state::{AppState, Screen};

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.screen {
        Screen::Collection => handle_key_collection(state, key),
        Screen::Detail => handle_key_detail(key),
    }
}

fn handle_key_collection(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(n) = key.digit() {
        return Some(Message::SelectFilterIndex(n - 1));
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::Reload),

        InputKey::Tab => Some(Message::NextFilter),
        InputKey::BackTab => Some(Message::PreviousFilter),

        InputKey::Left | InputKey::Char('h') => Some(Message::MoveFocus(FocusMove::Left)),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveFocus(FocusMove::Right)),
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveFocus(FocusMove::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveFocus(FocusMove::Down)),
        InputKey::Home | InputKey::Char('g') => Some(Message::MoveFocus(FocusMove::First)),
        InputKey::End | InputKey::Char('G') => Some(Message::MoveFocus(FocusMove::Last)),

        // Nothing focused (loading, failed or empty grid): stay on the collection
        InputKey::Enter => state
            .collection
            .focused_recipe()
            .cloned()
            .map(|recipe| Message::OpenDetail {
                recipe: Some(recipe),
            }),

        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Char('q') => Some(Message::CloseDetail),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollDetailUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDetailDown),
        InputKey::PageUp => Some(Message::DetailPageUp),
        InputKey::PageDown | InputKey::Char(' ') => Some(Message::DetailPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollDetailToTop),
        _ => None,
    }
}
