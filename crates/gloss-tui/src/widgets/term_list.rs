//! Term list pane

use gloss_core::Entry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{icons::IconSet, palette, styles};

/// Visible glossary terms with the selected row highlighted
pub struct TermList<'a> {
    entries: Vec<&'a Entry>,
    selected: Option<usize>,
    icons: IconSet,
}

impl<'a> TermList<'a> {
    pub fn new(entries: impl IntoIterator<Item = &'a Entry>, icons: IconSet) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            selected: None,
            icons,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for TermList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Terms ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.entries.is_empty() {
            Paragraph::new(Line::styled("No matching terms", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        let offset = self
            .selected
            .map_or(0, |selected| (selected + 1).saturating_sub(height));

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, entry)| {
                let label = format!("{} {}", self.icons.glyph(entry.icon), entry.term);
                let label = truncate_to_width(&label, inner.width as usize);
                if self.selected == Some(i) {
                    let padding = (inner.width as usize).saturating_sub(label.width());
                    Line::from(Span::styled(
                        format!("{}{}", label, " ".repeat(padding)),
                        styles::selected_row(),
                    ))
                } else {
                    Line::from(Span::styled(label, styles::text_secondary()))
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gloss_app::IconMode;
    use gloss_core::IconKind;

    fn entries(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| Entry::new(format!("Term {}", i), "", IconKind::BookOpen))
            .collect()
    }

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate_to_width("Mean", 10), "Mean");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate_to_width("Standard Deviation", 8), "Standar…");
        assert_eq!(truncate_to_width("Standard Deviation", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        let cut = truncate_to_width("統計学の用語", 5);
        assert!(cut.width() <= 5);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_renders_terms() {
        let entries = entries(3);
        let mut term = TestTerminal::compact();
        term.render_widget(
            TermList::new(&entries, IconSet::new(IconMode::Unicode)).selected(Some(0)),
            term.area(),
        );
        assert!(term.buffer_contains("Terms"));
        assert!(term.buffer_contains("Term 0"));
        assert!(term.buffer_contains("Term 2"));
    }

    #[test]
    fn test_empty_list_message() {
        let mut term = TestTerminal::compact();
        term.render_widget(
            TermList::new(Vec::<&Entry>::new(), IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        assert!(term.buffer_contains("No matching terms"));
    }

    #[test]
    fn test_selected_row_scrolls_into_view() {
        let entries = entries(30);
        let mut term = TestTerminal::compact();
        term.render_widget(
            TermList::new(&entries, IconSet::new(IconMode::Unicode)).selected(Some(25)),
            term.area(),
        );
        assert!(term.buffer_contains("Term 25"));
        assert!(!term.buffer_contains("Term 0 "));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let entries = entries(2);
        let mut term = TestTerminal::compact();
        term.render_widget(
            TermList::new(&entries, IconSet::new(IconMode::Unicode)).selected(Some(1)),
            term.area(),
        );
        // Row 0 of the inner area is Term 0, row 1 is the selected Term 1
        let cell = &term.terminal.backend().buffer()[(1, 2)];
        assert_eq!(cell.bg, palette::SELECTED_BG);
    }
}
