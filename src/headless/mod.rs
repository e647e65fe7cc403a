//! Headless mode - plain text or JSON output without the TUI
//!
//! Every writer takes an `impl Write` so the same code serves stdout and
//! the integration tests.
//!
//! # JSON Output
//!
//! `list --json` prints an array of term summaries, `show --json` a single
//! card object:
//!
//! ```json
//! {"term":"Mean","category":"Statistics","icon":"sigma","word_count":41,"tier":"short",
//!  "body":{"kind":"flat","block":{"paragraphs":[...],"ellipsis":false,"control":null}},
//!  "technical":null,"diagram":null,"related_terms":[]}
//! ```

use std::io::Write;

use serde::Serialize;

use gloss_app::{CardBody, DisclosurePanel, FocusTarget, GlossaryCard, GlossaryFilter, Settings};
use gloss_core::prelude::*;
use gloss_core::{
    ContentStore, DescriptionSegmenter, DiagramKind, DisplayBlock, IconKind, LengthTier,
    TruncatedText,
};

const INDENT: &str = "  ";

/// One row of `gloss list`
#[derive(Debug, Clone, Serialize)]
pub struct TermSummary<'a> {
    pub term: &'a str,
    pub category: &'a str,
    pub icon: IconKind,
    pub word_count: usize,
    pub tier: LengthTier,
}

/// Serializable snapshot of a [`GlossaryCard`] in its current open/expanded state
#[derive(Debug, Clone, Serialize)]
pub struct CardReport<'a> {
    pub term: &'a str,
    pub category: &'a str,
    pub icon: IconKind,
    pub word_count: usize,
    pub tier: LengthTier,
    pub body: BodyReport,
    pub technical: Option<TechnicalReport<'a>>,
    pub diagram: Option<DiagramReport>,
    pub related_terms: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyReport {
    Flat { block: DisplayBlock },
    Sectioned { sections: Vec<PanelReport> },
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelReport {
    pub title: String,
    pub open: bool,
    /// Absent while the panel is closed
    pub block: Option<DisplayBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnicalReport<'a> {
    pub open: bool,
    pub explanation: Option<DisplayBlock>,
    pub key_points: &'a [String],
    pub examples: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagramReport {
    pub open: bool,
    pub kind: DiagramKind,
    pub label: &'static str,
}

impl<'a> CardReport<'a> {
    pub fn new(card: &'a GlossaryCard, tier: LengthTier) -> Self {
        let body = match card.body() {
            CardBody::Flat(text) => BodyReport::Flat {
                block: text.render(),
            },
            CardBody::Sectioned(panels) => BodyReport::Sectioned {
                sections: panels.iter().map(panel_report).collect(),
            },
        };

        let technical = card.technical().map(|panel| TechnicalReport {
            open: panel.is_open(),
            explanation: panel.visible_content().map(|d| d.explanation.render()),
            key_points: &panel.content().key_points,
            examples: &panel.content().examples,
        });

        let diagram = card.diagram().map(|panel| DiagramReport {
            open: panel.is_open(),
            kind: *panel.content(),
            label: panel.content().label(),
        });

        Self {
            term: card.term(),
            category: card.category(),
            icon: card.icon(),
            word_count: card.word_count(),
            tier,
            body,
            technical,
            diagram,
            related_terms: card.related_terms(),
        }
    }
}

fn panel_report(panel: &DisclosurePanel<TruncatedText>) -> PanelReport {
    PanelReport {
        title: panel.title().to_string(),
        open: panel.is_open(),
        block: panel.visible_content().map(TruncatedText::render),
    }
}

/// Build the card for `term`, optionally with every panel open and every block expanded
pub fn build_card(
    store: &ContentStore,
    settings: &Settings,
    term: &str,
    expand: bool,
) -> Result<GlossaryCard> {
    let entry = store.require(term)?;
    let mut card = GlossaryCard::build(entry, store.tooltip(term), settings);

    if expand {
        card.expand_all();
        for target in card.focus_targets() {
            if matches!(
                target,
                FocusTarget::BodyText | FocusTarget::SectionText(_) | FocusTarget::TechnicalText
            ) {
                card.toggle(target);
            }
        }
    }

    Ok(card)
}

/// Entries passing `filter`, as summaries
pub fn summaries<'a>(
    store: &'a ContentStore,
    settings: &Settings,
    filter: &GlossaryFilter,
) -> Vec<TermSummary<'a>> {
    let segmenter = DescriptionSegmenter::new(settings.display.thresholds());
    filter
        .apply(store)
        .into_iter()
        .map(|i| {
            let entry = &store.entries()[i];
            let word_count = entry.word_count();
            TermSummary {
                term: &entry.term,
                category: entry.category_or_default(),
                icon: entry.icon,
                word_count,
                tier: segmenter.tier(word_count),
            }
        })
        .collect()
}

/// `gloss list`
pub fn write_list(
    out: &mut impl Write,
    store: &ContentStore,
    settings: &Settings,
    filter: &GlossaryFilter,
    json: bool,
) -> Result<()> {
    let rows = summaries(store, settings, filter);
    debug!("Listing {} of {} terms", rows.len(), store.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    if rows.is_empty() {
        writeln!(out, "No matching terms")?;
        return Ok(());
    }

    let width = rows.iter().map(|r| r.term.chars().count()).max().unwrap_or(0);
    for row in &rows {
        writeln!(
            out,
            "{:<width$}  {:<20} {:>4} words",
            row.term,
            row.category,
            row.word_count,
            width = width
        )?;
    }
    Ok(())
}

/// `gloss categories`
pub fn write_categories(out: &mut impl Write, store: &ContentStore) -> Result<()> {
    for category in store.categories() {
        writeln!(out, "{} ({})", category.name, category.count)?;
    }
    Ok(())
}

/// `gloss show`
pub fn write_card(
    out: &mut impl Write,
    card: &GlossaryCard,
    settings: &Settings,
    json: bool,
) -> Result<()> {
    let tier =
        DescriptionSegmenter::new(settings.display.thresholds()).tier(card.word_count());

    if json {
        serde_json::to_writer_pretty(&mut *out, &CardReport::new(card, tier))?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}  [{}]", card.term(), card.category())?;
    writeln!(out)?;

    match card.body() {
        CardBody::Flat(text) => write_block(out, &text.render(), "")?,
        CardBody::Sectioned(panels) => {
            for panel in panels {
                write_panel_header(out, panel)?;
                if let Some(text) = panel.visible_content() {
                    write_block(out, &text.render(), INDENT)?;
                }
            }
        }
    }

    if let Some(technical) = card.technical() {
        writeln!(out)?;
        write_panel_header(out, technical)?;
        if let Some(details) = technical.visible_content() {
            write_block(out, &details.explanation.render(), INDENT)?;
            write_list_items(out, "Key points", &details.key_points)?;
            write_list_items(out, "Examples", &details.examples)?;
        }
    }

    if let Some(diagram) = card.diagram() {
        write_panel_header(out, diagram)?;
        if let Some(kind) = diagram.visible_content() {
            writeln!(out, "{}[ {} diagram ]", INDENT, kind.label())?;
        }
    }

    if !card.related_terms().is_empty() {
        writeln!(out)?;
        writeln!(out, "Related: {}", card.related_terms().join(", "))?;
    }

    Ok(())
}

fn write_panel_header<T>(out: &mut impl Write, panel: &DisclosurePanel<T>) -> Result<()> {
    let marker = if panel.is_open() { "[-]" } else { "[+]" };
    writeln!(out, "{} {}", marker, panel.title())?;
    Ok(())
}

fn write_block(out: &mut impl Write, block: &DisplayBlock, indent: &str) -> Result<()> {
    let text = block.plain_text();
    for line in text.lines() {
        if line.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, "{}{}", indent, line)?;
        }
    }
    if let Some(control) = block.control {
        writeln!(out, "{}[{}]", indent, control.label())?;
    }
    Ok(())
}

fn write_list_items(out: &mut impl Write, heading: &str, items: &[String]) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}{}:", INDENT, heading)?;
    for item in items {
        writeln!(out, "{}- {}", INDENT, item)?;
    }
    Ok(())
}
