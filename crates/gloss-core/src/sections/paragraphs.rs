//! Paragraph fallback tier

use std::sync::LazyLock;

use regex::Regex;

use super::Section;

/// A newline, optional whitespace, and another newline
static BLANK_LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Blank line regex pattern is valid"));

/// Paragraphs are rejoined with this boundary
pub(crate) const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// More than this many paragraphs are needed for a split
const MIN_PARAGRAPHS: usize = 3;

/// Non-empty, trimmed paragraphs in source order
pub(crate) fn paragraphs(text: &str) -> Vec<&str> {
    BLANK_LINE_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Two sections: the first half (rounded up) open, the rest closed
pub(super) fn paragraph_sections(text: &str) -> Option<Vec<Section>> {
    let paras = paragraphs(text);
    if paras.len() <= MIN_PARAGRAPHS {
        return None;
    }

    let mid = paras.len().div_ceil(2);
    Some(vec![
        Section::introduction(paras[..mid].join(PARAGRAPH_SEPARATOR)),
        Section::details(paras[mid..].join(PARAGRAPH_SEPARATOR)),
    ])
}
