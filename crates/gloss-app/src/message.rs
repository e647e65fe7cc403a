//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    Quit,

    // ─────────────────────────────────────────────────────────
    // Term List
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Card
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next toggle on the card (wraps)
    FocusNext,
    /// Move focus to the previous toggle on the card (wraps)
    FocusPrevious,
    /// Toggle the focused panel or expand control
    ToggleFocused,
    ExpandAll,
    CollapseAll,
    ScrollCardUp,
    ScrollCardDown,

    /// Jump to the first related term of the current card
    FollowRelated,
    /// Jump to a term by exact name
    JumpToTerm(String),

    // ─────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Keep the query and return to browsing
    SubmitSearch,
    /// Clear the query and return to browsing
    CancelSearch,
    CycleCategory,
}
