//! Full-screen render tests
//!
//! Each test drives the bundled glossary through key presses and checks
//! what lands in the frame.

use super::view;
use crate::runner::process_message;
use crate::test_utils::TestTerminal;
use gloss_app::content::bundled_store;
use gloss_app::{AppState, InputKey, Message, Settings, UiMode};

fn create_base_state() -> AppState {
    AppState::new(bundled_store().unwrap(), Settings::default())
}

fn press(state: &mut AppState, keys: &str) {
    for c in keys.chars() {
        process_message(state, Message::Key(InputKey::Char(c)));
    }
}

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(100, 40);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_screen() {
    let state = create_base_state();
    let term = render_screen(&state);

    assert!(term.buffer_contains("gloss"));
    assert!(term.buffer_contains("Category: All"));
    assert!(term.buffer_contains("9/9 terms"));
    assert!(term.buffer_contains("Machine Learning"));
    assert!(term.buffer_contains("Gradient Descent"));
    assert!(term.buffer_contains("▾ Introduction"));
    assert!(term.buffer_contains("▾ Supervised Learning"));
    assert!(term.buffer_contains("q quit"));
}

#[test]
fn test_selecting_moves_card() {
    let mut state = create_base_state();
    press(&mut state, "G");
    let term = render_screen(&state);

    assert_eq!(state.selected_entry().unwrap().term, "Gradient Descent");
    assert!(term.buffer_contains("▸ Technical Details"));
    assert!(term.buffer_contains("→ Related: Neural Network, Linear Regression"));
}

#[test]
fn test_search_mode_shows_prompt() {
    let mut state = create_base_state();
    press(&mut state, "/eigen");
    assert_eq!(state.ui_mode, UiMode::SearchInput);

    let term = render_screen(&state);
    assert!(term.buffer_contains("/ eigen_"));
    assert!(term.buffer_contains("Eigenvector"));
    assert!(!term.buffer_contains("q quit"));
}

#[test]
fn test_submitted_search_stays_visible() {
    let mut state = create_base_state();
    press(&mut state, "/eigen");
    process_message(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.ui_mode, UiMode::Browse);

    let term = render_screen(&state);
    assert!(term.buffer_contains("/ eigen"));
    assert!(!term.buffer_contains("eigen_"));
}

#[test]
fn test_no_matches() {
    let mut state = create_base_state();
    press(&mut state, "/zzzz");
    let term = render_screen(&state);

    assert!(term.buffer_contains("0/9 terms"));
    assert!(term.buffer_contains("No matching terms"));
    assert!(term.buffer_contains("Select a term"));
}

#[test]
fn test_category_filter_in_header() {
    let mut state = create_base_state();
    press(&mut state, "c");
    let term = render_screen(&state);

    assert!(term.buffer_contains("Category: Machine Learning"));
    assert!(term.buffer_contains("3/9 terms"));
    assert!(!term.buffer_contains("Big Data"));
}

#[test]
fn test_related_jump_reports_status() {
    let mut state = create_base_state();
    press(&mut state, "r");
    let term = render_screen(&state);

    assert_eq!(state.selected_entry().unwrap().term, "Neural Network");
    assert!(term.buffer_contains("Jumped to Neural Network"));
}

#[test]
fn test_collapse_all_hides_section_text() {
    let mut state = create_base_state();
    press(&mut state, "E");
    let term = render_screen(&state);

    assert!(term.buffer_contains("▸ Introduction"));
    assert!(term.buffer_contains("▸ Common Algorithms"));
    assert!(!term.buffer_contains("generalization"));
}
