//! Card view model for one glossary entry.
//!
//! A [`GlossaryCard`] runs the description through the segmenter and wraps
//! the result in toggleable blocks:
//!
//! - flat descriptions become one [`TruncatedText`]
//! - sectioned descriptions become one [`DisclosurePanel`] per section
//! - tooltip data adds closed "Technical Details" and "Diagram" panels
//!
//! All toggle state lives on the card. Rebuilding it resets every panel and
//! every expand control to its default.

use gloss_core::prelude::*;
use gloss_core::sections::INTRODUCTION_TITLE;
use gloss_core::{
    DescriptionSegmenter, DiagramKind, DisplayStrategy, Entry, IconKind, Section, TooltipData,
    TruncatedText,
};

use crate::config::{DisplaySettings, Settings};
use crate::disclosure::{DisclosurePanel, PanelVariant};

/// Word limit when a very long description yields no sections
pub const FALLBACK_WORD_LIMIT: usize = 100;

/// Word limit for the technical explanation
pub const TECHNICAL_WORD_LIMIT: usize = 100;

pub const TECHNICAL_TITLE: &str = "Technical Details";
pub const DIAGRAM_TITLE: &str = "Diagram";

/// The description part of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Flat(TruncatedText),
    Sectioned(Vec<DisclosurePanel<TruncatedText>>),
}

/// Contents of the "Technical Details" panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalDetails {
    pub explanation: TruncatedText,
    pub key_points: Vec<String>,
    pub examples: Vec<String>,
}

/// Something on the card that the user can toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Expand control of a flat body
    BodyText,
    SectionHeader(usize),
    /// Expand control inside an open section
    SectionText(usize),
    TechnicalHeader,
    /// Expand control of the technical explanation
    TechnicalText,
    DiagramHeader,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryCard {
    term: String,
    category: String,
    icon: IconKind,
    word_count: usize,
    body: CardBody,
    technical: Option<DisclosurePanel<TechnicalDetails>>,
    diagram: Option<DisclosurePanel<DiagramKind>>,
    related_terms: Vec<String>,
}

impl GlossaryCard {
    pub fn build(entry: &Entry, tooltip: Option<&TooltipData>, settings: &Settings) -> Self {
        let display = &settings.display;
        let segmenter = DescriptionSegmenter::new(display.thresholds());
        let body = build_body(&entry.description, segmenter.classify(&entry.description), display);

        let technical_open = settings.ui.technical_open;
        let technical = tooltip.map(|tooltip| {
            DisclosurePanel::new(
                TECHNICAL_TITLE,
                TechnicalDetails {
                    explanation: TruncatedText::new(
                        tooltip.explanation.clone(),
                        TECHNICAL_WORD_LIMIT,
                        false,
                        display.enable_markdown,
                    ),
                    key_points: tooltip.key_points.clone(),
                    examples: tooltip.examples.clone(),
                },
                technical_open,
                PanelVariant::Technical,
            )
        });
        let diagram = tooltip.and_then(|tooltip| tooltip.diagram).map(|kind| {
            DisclosurePanel::new(DIAGRAM_TITLE, kind, false, PanelVariant::Technical)
        });
        let related_terms = tooltip
            .map(|tooltip| tooltip.related_terms.clone())
            .unwrap_or_default();

        debug!(
            "Built card for {:?}: sectioned={}, tooltip={}",
            entry.term,
            matches!(body, CardBody::Sectioned(_)),
            technical.is_some()
        );

        Self {
            term: entry.term.clone(),
            category: entry.category_or_default().to_string(),
            icon: entry.icon,
            word_count: entry.word_count(),
            body,
            technical,
            diagram,
            related_terms,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn icon(&self) -> IconKind {
        self.icon
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn body(&self) -> &CardBody {
        &self.body
    }

    pub fn technical(&self) -> Option<&DisclosurePanel<TechnicalDetails>> {
        self.technical.as_ref()
    }

    pub fn diagram(&self) -> Option<&DisclosurePanel<DiagramKind>> {
        self.diagram.as_ref()
    }

    pub fn related_terms(&self) -> &[String] {
        &self.related_terms
    }

    /// Every currently reachable toggle, in display order
    ///
    /// Expand controls inside closed panels are hidden and therefore skipped.
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = Vec::new();

        match &self.body {
            CardBody::Flat(text) => {
                if text.is_truncatable() {
                    targets.push(FocusTarget::BodyText);
                }
            }
            CardBody::Sectioned(panels) => {
                for (i, panel) in panels.iter().enumerate() {
                    targets.push(FocusTarget::SectionHeader(i));
                    if panel.is_open() && panel.content().is_truncatable() {
                        targets.push(FocusTarget::SectionText(i));
                    }
                }
            }
        }

        if let Some(technical) = &self.technical {
            targets.push(FocusTarget::TechnicalHeader);
            if technical.is_open() && technical.content().explanation.is_truncatable() {
                targets.push(FocusTarget::TechnicalText);
            }
        }

        if self.diagram.is_some() {
            targets.push(FocusTarget::DiagramHeader);
        }

        targets
    }

    /// Toggle one target. Returns false if it does not exist on this card.
    pub fn toggle(&mut self, target: FocusTarget) -> bool {
        match (target, &mut self.body) {
            (FocusTarget::BodyText, CardBody::Flat(text)) => text.toggle(),
            (FocusTarget::SectionHeader(i), CardBody::Sectioned(panels)) => match panels.get_mut(i) {
                Some(panel) => {
                    panel.toggle();
                    true
                }
                None => false,
            },
            (FocusTarget::SectionText(i), CardBody::Sectioned(panels)) => panels
                .get_mut(i)
                .filter(|panel| panel.is_open())
                .is_some_and(|panel| panel.content_mut().toggle()),
            (FocusTarget::TechnicalHeader, _) => match &mut self.technical {
                Some(panel) => {
                    panel.toggle();
                    true
                }
                None => false,
            },
            (FocusTarget::TechnicalText, _) => self
                .technical
                .as_mut()
                .filter(|panel| panel.is_open())
                .is_some_and(|panel| panel.content_mut().explanation.toggle()),
            (FocusTarget::DiagramHeader, _) => match &mut self.diagram {
                Some(panel) => {
                    panel.toggle();
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Open every panel on the card
    pub fn expand_all(&mut self) {
        self.set_all_panels(true);
    }

    /// Close every panel on the card
    pub fn collapse_all(&mut self) {
        self.set_all_panels(false);
    }

    fn set_all_panels(&mut self, open: bool) {
        if let CardBody::Sectioned(panels) = &mut self.body {
            for panel in panels {
                panel.set_open(open);
            }
        }
        if let Some(panel) = &mut self.technical {
            panel.set_open(open);
        }
        if let Some(panel) = &mut self.diagram {
            panel.set_open(open);
        }
    }
}

fn build_body(description: &str, strategy: DisplayStrategy, display: &DisplaySettings) -> CardBody {
    let markdown = display.enable_markdown;
    match strategy {
        DisplayStrategy::Flat {
            word_limit,
            show_count,
        } => CardBody::Flat(TruncatedText::new(description, word_limit, show_count, markdown)),
        DisplayStrategy::Sectioned { sections } if sections.is_empty() => {
            debug!("Very long description produced no sections, rendering flat");
            CardBody::Flat(TruncatedText::new(
                description,
                FALLBACK_WORD_LIMIT,
                true,
                markdown,
            ))
        }
        DisplayStrategy::Sectioned { sections } => CardBody::Sectioned(
            sections
                .into_iter()
                .map(|section| section_panel(section, display))
                .collect(),
        ),
    }
}

fn section_panel(section: Section, display: &DisplaySettings) -> DisclosurePanel<TruncatedText> {
    let variant = if section.is_introduction() {
        PanelVariant::Emphasis
    } else {
        PanelVariant::Standard
    };
    let text = TruncatedText::new(
        section.content,
        display.section_word_limit,
        false,
        display.enable_markdown,
    );
    DisclosurePanel::new(section.title, text, section.default_open, variant)
}
