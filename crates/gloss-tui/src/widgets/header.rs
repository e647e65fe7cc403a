//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gloss_app::GlossaryFilter;

use crate::theme::{palette, styles};

/// App title, active category and term count
pub struct MainHeader<'a> {
    filter: &'a GlossaryFilter,
    visible: usize,
    total: usize,
}

impl<'a> MainHeader<'a> {
    pub fn new(filter: &'a GlossaryFilter, visible: usize, total: usize) -> Self {
        Self {
            filter,
            visible,
            total,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let category = self.filter.category.as_deref().unwrap_or("All");
        let line = Line::from(vec![
            Span::styled(" gloss ", styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
            Span::styled("Category: ", styles::text_muted()),
            Span::styled(category.to_string(), styles::text_primary()),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(
                format!("{}/{} terms", self.visible, self.total),
                styles::text_secondary(),
            ),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
