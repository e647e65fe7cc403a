//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            // Status lines are one-shot feedback for the previous key
            state.status = None;
            match handle_key(state, key) {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            }
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Term List
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Card
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }
        Message::ToggleFocused => {
            state.toggle_focused();
            UpdateResult::none()
        }
        Message::ExpandAll => {
            state.expand_all();
            UpdateResult::none()
        }
        Message::CollapseAll => {
            state.collapse_all();
            UpdateResult::none()
        }
        Message::ScrollCardUp => {
            state.scroll_card_up();
            UpdateResult::none()
        }
        Message::ScrollCardDown => {
            state.scroll_card_down();
            UpdateResult::none()
        }
        Message::FollowRelated => {
            state.follow_related();
            UpdateResult::none()
        }
        Message::JumpToTerm(term) => {
            state.jump_to_term(&term);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Filtering
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.start_search();
            UpdateResult::none()
        }
        Message::SearchInput(c) => {
            state.push_search_char(c);
            UpdateResult::none()
        }
        Message::SearchBackspace => {
            state.pop_search_char();
            UpdateResult::none()
        }
        Message::SubmitSearch => {
            state.submit_search();
            UpdateResult::none()
        }
        Message::CancelSearch => {
            state.cancel_search();
            UpdateResult::none()
        }
        Message::CycleCategory => {
            state.cycle_category();
            UpdateResult::none()
        }
    }
}
