//! Word-budget truncation with an expand/collapse control.
//!
//! [`TruncatedText`] owns the text and its local expanded flag; [`render`]
//! turns it into a [`DisplayBlock`] that a front end can draw directly.

use serde::Serialize;

use crate::inline::{format_markdown, format_plain, paragraph_text, Paragraph};
use crate::words::{first_words, word_count};

pub const ELLIPSIS: &str = "...";

/// The expand affordance shown under a truncated block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpandControl {
    pub expanded: bool,

    /// Total word count, when the caller asked for it
    pub word_count: Option<usize>,
}

impl ExpandControl {
    pub fn label(&self) -> String {
        let action = if self.expanded { "Show less" } else { "Show more" };
        match self.word_count {
            Some(count) => format!("{} ({} words)", action, count),
            None => action.to_string(),
        }
    }
}

/// Renderable result of truncation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayBlock {
    pub paragraphs: Vec<Paragraph>,

    /// True when the visible text was cut short
    pub ellipsis: bool,

    pub control: Option<ExpandControl>,
}

impl DisplayBlock {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.control.is_none()
    }

    /// Unstyled text, paragraphs separated by blank lines, ellipsis appended
    pub fn plain_text(&self) -> String {
        let mut text = self
            .paragraphs
            .iter()
            .map(|p| paragraph_text(p))
            .collect::<Vec<_>>()
            .join("\n\n");
        if self.ellipsis {
            text.push_str(ELLIPSIS);
        }
        text
    }
}

/// A block of text limited to a word budget, with local expanded state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedText {
    text: String,
    word_limit: usize,
    show_count: bool,
    enable_markdown: bool,
    word_count: usize,
    expanded: bool,
}

impl TruncatedText {
    pub fn new(
        text: impl Into<String>,
        word_limit: usize,
        show_count: bool,
        enable_markdown: bool,
    ) -> Self {
        let text = text.into();
        let word_count = word_count(&text);
        Self {
            text,
            word_limit,
            show_count,
            enable_markdown,
            word_count,
            expanded: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn word_limit(&self) -> usize {
        self.word_limit
    }

    /// Whether there is hidden text, and therefore a control
    pub fn is_truncatable(&self) -> bool {
        self.word_count > self.word_limit
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between truncated and full view. Returns false when there is no control.
    pub fn toggle(&mut self) -> bool {
        if !self.is_truncatable() {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        if self.is_truncatable() {
            self.expanded = expanded;
        }
    }

    fn collapsed_prefix(&self) -> String {
        let prefix = first_words(&self.text, self.word_limit);
        if self.enable_markdown {
            drop_unclosed_bold(prefix)
        } else {
            prefix
        }
    }

    fn format(&self, text: &str) -> Vec<Paragraph> {
        if self.enable_markdown {
            format_markdown(text)
        } else {
            format_plain(text)
        }
    }

    pub fn render(&self) -> DisplayBlock {
        if !self.is_truncatable() {
            return DisplayBlock {
                paragraphs: self.format(&self.text),
                ellipsis: false,
                control: None,
            };
        }

        let control = Some(ExpandControl {
            expanded: self.expanded,
            word_count: self.show_count.then_some(self.word_count),
        });

        if self.expanded {
            DisplayBlock {
                paragraphs: self.format(&self.text),
                ellipsis: false,
                control,
            }
        } else {
            DisplayBlock {
                paragraphs: self.format(&self.collapsed_prefix()),
                ellipsis: true,
                control,
            }
        }
    }
}

/// Remove a trailing `**` whose closing half was cut off by truncation
fn drop_unclosed_bold(mut prefix: String) -> String {
    if prefix.matches("**").count() % 2 == 1 {
        if let Some(pos) = prefix.rfind("**") {
            prefix.replace_range(pos..pos + 2, "");
        }
    }
    prefix
}

/// Render `text` in its initial (collapsed) state
pub fn render(
    text: &str,
    word_limit: usize,
    show_count: bool,
    enable_markdown: bool,
) -> DisplayBlock {
    TruncatedText::new(text, word_limit, show_count, enable_markdown).render()
}
