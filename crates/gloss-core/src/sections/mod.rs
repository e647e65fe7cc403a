//! Section splitting for very long descriptions.
//!
//! A long description is partitioned into titled sections by trying an
//! ordered list of [`SplitTier`]s:
//!
//! 1. [`SplitTier::Markers`] - structural markers found by the
//!    [`matchers`] (needs at least two boundaries)
//! 2. [`SplitTier::Paragraphs`] - an "Introduction"/"Details" split on blank
//!    lines (needs more than three paragraphs)
//!
//! When no tier applies the result is empty and the caller renders the whole
//! text flat. Splitting never fails.

pub mod matchers;
pub(crate) mod paragraphs;

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::debug;

use crate::words::char_len;
pub use matchers::{find_candidates, merge_candidates, Candidate, MatcherKind};

/// Sections whose stripped content is this many characters or fewer are dropped
pub const MIN_SECTION_CHARS: usize = 50;

/// A synthetic introduction is emitted when the first marker sits further in than this
pub const INTRO_OFFSET_CHARS: usize = 100;

pub const INTRODUCTION_TITLE: &str = "Introduction";
pub const DETAILS_TITLE: &str = "Details";

/// Where a section's boundary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionOrigin {
    /// A structural marker in the text
    Marker,
    /// Text ahead of the first marker, or the leading paragraphs
    Introduction,
    /// Trailing paragraphs of the paragraph split
    Details,
}

/// A titled, independently collapsible fragment of a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub content: String,
    pub default_open: bool,
    pub origin: SectionOrigin,
}

impl Section {
    /// A section introduced by a marker
    pub fn new(title: impl Into<String>, content: impl Into<String>, default_open: bool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            default_open,
            origin: SectionOrigin::Marker,
        }
    }

    /// The synthetic, open "Introduction" section
    pub fn introduction(content: impl Into<String>) -> Self {
        Self {
            origin: SectionOrigin::Introduction,
            ..Self::new(INTRODUCTION_TITLE, content, true)
        }
    }

    /// The synthetic, closed "Details" section
    pub fn details(content: impl Into<String>) -> Self {
        Self {
            origin: SectionOrigin::Details,
            ..Self::new(DETAILS_TITLE, content, false)
        }
    }

    pub fn is_introduction(&self) -> bool {
        self.origin == SectionOrigin::Introduction
    }
}

/// One way of splitting text into sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitTier {
    Markers,
    Paragraphs,
}

impl SplitTier {
    /// Tiers in the order they are tried
    pub const ORDER: [SplitTier; 2] = [SplitTier::Markers, SplitTier::Paragraphs];

    /// `None` means this tier does not apply and the next one should be tried
    pub fn apply(self, text: &str) -> Option<Vec<Section>> {
        match self {
            SplitTier::Markers => marker_sections(text),
            SplitTier::Paragraphs => paragraphs::paragraph_sections(text),
        }
    }
}

/// Split `text` and report which tier produced the sections
pub fn split_with_tier(text: &str) -> Option<(SplitTier, Vec<Section>)> {
    let result = SplitTier::ORDER
        .iter()
        .find_map(|tier| tier.apply(text).map(|sections| (*tier, sections)));

    match &result {
        Some((tier, sections)) => {
            debug!("Split description via {:?} into {} sections", tier, sections.len())
        }
        None => debug!("No split tier applied; description renders flat"),
    }
    result
}

/// Split `text` into ordered sections. An empty result means "render flat".
pub fn split(text: &str) -> Vec<Section> {
    split_with_tier(text)
        .map(|(_, sections)| sections)
        .unwrap_or_default()
}

/// Marker tier: one section per boundary, plus an optional introduction.
///
/// Applies whenever two or more boundaries exist, even if every fragment turns
/// out too short to keep.
fn marker_sections(text: &str) -> Option<Vec<Section>> {
    let candidates = find_candidates(text);
    if candidates.len() < 2 {
        return None;
    }

    let mut sections = Vec::with_capacity(candidates.len() + 1);

    let first_offset = candidates[0].offset;
    let before = &text[..first_offset];
    if char_len(before) > INTRO_OFFSET_CHARS {
        let intro = before.trim();
        if !intro.is_empty() {
            sections.push(Section::introduction(intro));
        }
    }

    for (i, candidate) in candidates.iter().enumerate() {
        let next = candidates
            .get(i + 1)
            .map_or(text.len(), |next| next.offset);
        let content = text[candidate.end..next].trim();

        if char_len(content) > MIN_SECTION_CHARS {
            // Only the first boundary opens by default, even if it was dropped
            sections.push(Section::new(candidate.title.clone(), content, i == 0));
        }
    }

    Some(sections)
}
