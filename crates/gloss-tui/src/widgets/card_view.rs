//! Card pane: renders a [`GlossaryCard`] as styled, scrollable lines.
//!
//! Panel headers and expand controls are drawn as single lines; the one
//! matching the focused target is drawn reversed.

use gloss_app::{CardBody, DisclosurePanel, FocusTarget, GlossaryCard};
use gloss_core::truncate::ELLIPSIS;
use gloss_core::{DisplayBlock, InlineSpan};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

const INDENT: &str = "  ";

pub struct CardView<'a> {
    card: Option<&'a GlossaryCard>,
    focused: Option<FocusTarget>,
    icons: IconSet,
    scroll: u16,
}

impl<'a> CardView<'a> {
    pub fn new(card: Option<&'a GlossaryCard>, icons: IconSet) -> Self {
        Self {
            card,
            focused: None,
            icons,
            scroll: 0,
        }
    }

    pub fn focused(mut self, target: Option<FocusTarget>) -> Self {
        self.focused = target;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused.is_some())
            .title(" Card ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.card {
            Some(card) => card_lines(card, self.focused, self.icons),
            None => vec![Line::styled("Select a term", styles::text_muted())],
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

/// All lines of a card in display order
pub fn card_lines(
    card: &GlossaryCard,
    focused: Option<FocusTarget>,
    icons: IconSet,
) -> Vec<Line<'static>> {
    let is_focused = |target: FocusTarget| focused == Some(target);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icons.glyph(card.icon())), styles::accent()),
            Span::styled(card.term().to_string(), styles::text_bold()),
            Span::styled(format!("  {}", card.category()), styles::text_muted()),
        ]),
        Line::default(),
    ];

    match card.body() {
        CardBody::Flat(text) => {
            block_lines(&mut lines, &text.render(), "", is_focused(FocusTarget::BodyText));
        }
        CardBody::Sectioned(panels) => {
            for (i, panel) in panels.iter().enumerate() {
                lines.push(panel_header(panel, icons, is_focused(FocusTarget::SectionHeader(i))));
                if let Some(text) = panel.visible_content() {
                    block_lines(
                        &mut lines,
                        &text.render(),
                        INDENT,
                        is_focused(FocusTarget::SectionText(i)),
                    );
                }
            }
        }
    }

    if let Some(technical) = card.technical() {
        lines.push(Line::default());
        lines.push(panel_header(technical, icons, is_focused(FocusTarget::TechnicalHeader)));
        if let Some(details) = technical.visible_content() {
            block_lines(
                &mut lines,
                &details.explanation.render(),
                INDENT,
                is_focused(FocusTarget::TechnicalText),
            );
            list_lines(&mut lines, "Key points", &details.key_points, icons);
            list_lines(&mut lines, "Examples", &details.examples, icons);
        }
    }

    if let Some(diagram) = card.diagram() {
        lines.push(panel_header(diagram, icons, is_focused(FocusTarget::DiagramHeader)));
        if let Some(kind) = diagram.visible_content() {
            lines.push(Line::styled(
                format!("{}[ {} diagram ]", INDENT, kind.label()),
                styles::text_secondary(),
            ));
        }
    }

    if !card.related_terms().is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("{} Related: ", icons.link()), styles::text_muted()),
            Span::styled(card.related_terms().join(", "), styles::accent()),
            Span::styled("  (r)", styles::text_muted()),
        ]));
    }

    lines
}

fn panel_header<T>(panel: &DisclosurePanel<T>, icons: IconSet, focused: bool) -> Line<'static> {
    let style = styles::panel_header(panel.variant());
    let style = if focused { styles::focused(style) } else { style };
    Line::styled(
        format!("{} {}", icons.chevron(panel.is_open()), panel.title()),
        style,
    )
}

/// Paragraph lines, ellipsis and expand control of one truncated block
fn block_lines(lines: &mut Vec<Line<'static>>, block: &DisplayBlock, indent: &str, focused: bool) {
    let count = block.paragraphs.len();
    for (i, paragraph) in block.paragraphs.iter().enumerate() {
        let mut spans = vec![Span::raw(indent.to_string())];
        spans.extend(paragraph.iter().map(|span| match span {
            InlineSpan::Plain(text) => Span::styled(text.clone(), styles::text_primary()),
            InlineSpan::Bold(text) => Span::styled(text.clone(), styles::text_bold()),
        }));
        if block.ellipsis && i + 1 == count {
            spans.push(Span::styled(ELLIPSIS, styles::text_muted()));
        }
        lines.push(Line::from(spans));
        if i + 1 < count {
            lines.push(Line::default());
        }
    }

    if let Some(control) = block.control {
        let style = if focused {
            styles::focused(styles::expand_control())
        } else {
            styles::expand_control()
        };
        lines.push(Line::from(vec![
            Span::raw(indent.to_string()),
            Span::styled(format!("[{}]", control.label()), style),
        ]));
    }
}

fn list_lines(lines: &mut Vec<Line<'static>>, heading: &str, items: &[String], icons: IconSet) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::styled(format!("{}{}:", INDENT, heading), styles::text_secondary()));
    for item in items {
        lines.push(Line::from(vec![
            Span::styled(format!("{}{} ", INDENT, icons.bullet()), styles::accent()),
            Span::styled(item.clone(), styles::text_primary()),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gloss_app::{IconMode, Settings};
    use gloss_core::{DiagramKind, Entry, IconKind, TooltipData};
    use ratatui::style::Modifier;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn card(description: impl Into<String>, tooltip: Option<&TooltipData>) -> GlossaryCard {
        let entry = Entry::new("Variance", description, IconKind::Sigma).with_category("Statistics");
        GlossaryCard::build(&entry, tooltip, &Settings::default())
    }

    fn words(count: usize) -> String {
        vec!["data"; count].join(" ")
    }

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_card_prompt() {
        let mut term = TestTerminal::new();
        term.render_widget(CardView::new(None, icons()), term.area());
        assert!(term.buffer_contains("Select a term"));
    }

    #[test]
    fn test_short_card_renders_whole_text() {
        let card = card("Average squared **deviation** from the mean.", None);
        let mut term = TestTerminal::new();
        term.render_widget(CardView::new(Some(&card), icons()), term.area());

        assert!(term.buffer_contains("Variance"));
        assert!(term.buffer_contains("Statistics"));
        assert!(term.buffer_contains("Average squared deviation from the mean."));
        assert!(!term.buffer_contains("Show more"));
    }

    #[test]
    fn test_long_card_shows_control_with_count() {
        let card = card(words(101), None);
        let text = text_of(&card_lines(&card, None, icons()));
        assert!(text.contains("[Show more (101 words)]"));
        assert!(text.contains("data..."));
    }

    #[test]
    fn test_closed_section_hides_content() {
        let description = format!(
            "**First Part**: {}\n\n**Second Part**: second-only {}",
            words(300),
            words(300)
        );
        let card = card(description, None);
        let text = text_of(&card_lines(&card, None, icons()));

        assert!(text.contains("▾ First Part"));
        assert!(text.contains("▸ Second Part"));
        assert!(!text.contains("second-only"));
        // Section limit of 150 words, no count
        assert!(text.contains("[Show more]"));
    }

    #[test]
    fn test_technical_panel_closed_by_default() {
        let tooltip = TooltipData {
            explanation: "hidden explanation".to_string(),
            diagram: Some(DiagramKind::ConfusionMatrix),
            key_points: vec!["hidden point".to_string()],
            examples: vec![],
            related_terms: vec!["Mean".to_string(), "Standard Deviation".to_string()],
        };
        let card = card("Short.", Some(&tooltip));
        let text = text_of(&card_lines(&card, None, icons()));

        assert!(text.contains("▸ Technical Details"));
        assert!(text.contains("▸ Diagram"));
        assert!(!text.contains("hidden explanation"));
        assert!(!text.contains("Confusion matrix"));
        assert!(text.contains("Related: Mean, Standard Deviation"));
    }

    #[test]
    fn test_open_technical_panel_shows_details() {
        let tooltip = TooltipData {
            explanation: "visible explanation".to_string(),
            diagram: Some(DiagramKind::ConfusionMatrix),
            key_points: vec!["a key point".to_string()],
            examples: vec!["an example".to_string()],
            related_terms: vec![],
        };
        let mut card = card("Short.", Some(&tooltip));
        card.expand_all();
        let text = text_of(&card_lines(&card, None, icons()));

        assert!(text.contains("visible explanation"));
        assert!(text.contains("Key points:"));
        assert!(text.contains("• a key point"));
        assert!(text.contains("Examples:"));
        assert!(text.contains(&format!("[ {} diagram ]", DiagramKind::ConfusionMatrix.label())));
    }

    #[test]
    fn test_focused_control_is_reversed() {
        let card = card(words(101), None);
        let lines = card_lines(&card, Some(FocusTarget::BodyText), icons());
        let control = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content.contains("Show more"))
            .unwrap();
        assert!(control.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_bold_spans_are_bold() {
        let card = card("plain **strong** plain", None);
        let lines = card_lines(&card, None, icons());
        let strong = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == "strong")
            .unwrap();
        assert!(strong.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_scroll_moves_content() {
        let card = card(words(101), None);
        let mut term = TestTerminal::with_size(40, 8);
        term.render_widget(CardView::new(Some(&card), icons()).scroll(40), term.area());
        assert!(!term.buffer_contains("Variance"));
    }
}
