//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Panels ---
pub const PANEL_STANDARD: Color = Color::Blue;
pub const PANEL_EMPHASIS: Color = Color::Yellow;
pub const PANEL_TECHNICAL: Color = Color::Magenta;

// --- Selection ---
pub const SELECTED_FG: Color = Color::Black;
pub const SELECTED_BG: Color = Color::Cyan;

// --- Search ---
pub const SEARCH_PROMPT: Color = Color::Yellow;
pub const STATUS_MESSAGE: Color = Color::Green;
