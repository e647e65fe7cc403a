//! Minimal inline formatting: `**bold**` spans and blank-line paragraphs.
//!
//! Anything else (links, nesting, headings) is left as literal text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::sections::paragraphs::paragraphs;

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Bold span regex pattern is valid"));

/// A run of text with one style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
}

impl InlineSpan {
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text) | InlineSpan::Bold(text) => text,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, InlineSpan::Bold(_))
    }
}

/// A paragraph of styled spans
pub type Paragraph = Vec<InlineSpan>;

/// Split a paragraph into plain and bold spans. Unmatched `**` stays literal.
pub fn format_inline(text: &str) -> Paragraph {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in BOLD_PATTERN.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(InlineSpan::Plain(text[cursor..whole.start()].to_string()));
        }
        spans.push(InlineSpan::Bold(inner.as_str().to_string()));
        cursor = whole.end();
    }

    if cursor < text.len() {
        spans.push(InlineSpan::Plain(text[cursor..].to_string()));
    }
    spans
}

/// Paragraphs split on blank lines, each with inline bold formatting
pub fn format_markdown(text: &str) -> Vec<Paragraph> {
    paragraphs(text).into_iter().map(format_inline).collect()
}

/// The whole text as one unformatted paragraph
pub fn format_plain(text: &str) -> Vec<Paragraph> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![vec![InlineSpan::Plain(trimmed.to_string())]]
    }
}

/// Concatenated text of a paragraph without styling
pub fn paragraph_text(paragraph: &[InlineSpan]) -> String {
    paragraph.iter().map(InlineSpan::text).collect()
}
