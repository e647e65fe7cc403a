//! Search input prompt widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Inline search prompt shown in the footer row
pub struct SearchInput<'a> {
    query: &'a str,
    /// Whether keystrokes are currently captured
    active: bool,
    matches: usize,
    icons: IconSet,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, matches: usize, icons: IconSet) -> Self {
        Self {
            query,
            active: false,
            matches,
            icons,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(format!("{} ", self.icons.search()), styles::search_prompt()),
            Span::styled(self.query.to_string(), styles::text_primary()),
        ];

        if self.active {
            spans.push(Span::styled("_", styles::search_prompt()));
        }

        if !self.query.is_empty() {
            let status = match self.matches {
                1 => "1 match".to_string(),
                n => format!("{} matches", n),
            };
            let style = if self.matches > 0 {
                styles::status_message()
            } else {
                styles::text_muted()
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(status, style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gloss_app::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_active_prompt_shows_cursor() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(SearchInput::new("regr", 1, icons()).active(true), term.area());
        assert!(term.buffer_contains("/ regr_"));
        assert!(term.buffer_contains("1 match"));
    }

    #[test]
    fn test_inactive_prompt_has_no_cursor() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(SearchInput::new("mean", 3, icons()), term.area());
        assert!(term.buffer_contains("/ mean"));
        assert!(!term.buffer_contains("mean_"));
        assert!(term.buffer_contains("3 matches"));
    }

    #[test]
    fn test_empty_query_has_no_count() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(SearchInput::new("", 9, icons()).active(true), term.area());
        assert!(!term.buffer_contains("matches"));
    }
}
