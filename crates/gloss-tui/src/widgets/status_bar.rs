//! Footer status bar with key hints

use gloss_app::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("Tab", "focus"),
    ("Enter", "toggle"),
    ("/", "search"),
    ("c", "category"),
    ("e/E", "expand/collapse"),
    ("r", "related"),
    ("q", "quit"),
];

const SEARCH_HINTS: &[(&str, &str)] = &[("Enter", "apply"), ("Esc", "clear")];

/// Status message (if any) followed by key hints for the current mode
pub struct StatusBar<'a> {
    mode: UiMode,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: UiMode) -> Self {
        Self {
            mode,
            message: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if let Some(message) = self.message {
            spans.push(Span::styled(format!(" {} ", message), styles::status_message()));
            spans.push(Span::styled("│", styles::text_muted()));
        }

        let hints = match self.mode {
            UiMode::Browse => BROWSE_HINTS,
            UiMode::SearchInput => SEARCH_HINTS,
        };
        for (key, action) in hints {
            spans.push(Span::styled(format!(" {}", key), styles::accent()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
