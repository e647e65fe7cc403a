//! Semantic style builders.

use gloss_app::PanelVariant;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Selection and focus ---
pub fn selected_row() -> Style {
    Style::default()
        .fg(palette::SELECTED_FG)
        .bg(palette::SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

/// Applied on top of a toggle's own style while it has focus
pub fn focused(base: Style) -> Style {
    base.add_modifier(Modifier::REVERSED)
}

// --- Panels ---
pub fn panel_header(variant: PanelVariant) -> Style {
    let color = match variant {
        PanelVariant::Standard => palette::PANEL_STANDARD,
        PanelVariant::Emphasis => palette::PANEL_EMPHASIS,
        PanelVariant::Technical => palette::PANEL_TECHNICAL,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn expand_control() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Search and status ---
pub fn search_prompt() -> Style {
    Style::default()
        .fg(palette::SEARCH_PROMPT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_message() -> Style {
    Style::default().fg(palette::STATUS_MESSAGE)
}

/// Rounded bordered container
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
