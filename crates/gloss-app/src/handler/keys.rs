//! Key bindings per UI mode

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(key),
        UiMode::SearchInput => handle_key_search_input(key),
    }
}

fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),

        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleFocused),
        InputKey::Char('e') => Some(Message::ExpandAll),
        InputKey::Char('E') => Some(Message::CollapseAll),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::ScrollCardDown),
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::ScrollCardUp),
        InputKey::Char('r') => Some(Message::FollowRelated),

        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('c') => Some(Message::CycleCategory),

        _ => None,
    }
}

fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CancelSearch),
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}
