//! Configuration types for gloss

use gloss_core::SegmentThresholds;
use serde::{Deserialize, Serialize};

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// How descriptions are segmented and truncated
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplaySettings {
    /// Descriptions longer than this many words are split into sections
    #[serde(default = "default_very_long_threshold")]
    pub very_long_threshold: usize,

    /// Descriptions longer than this many words are truncated with a word count
    #[serde(default = "default_long_threshold")]
    pub long_threshold: usize,

    #[serde(default = "default_long_word_limit")]
    pub long_word_limit: usize,

    #[serde(default = "default_short_word_limit")]
    pub short_word_limit: usize,

    /// Word limit inside each collapsible section
    #[serde(default = "default_section_word_limit")]
    pub section_word_limit: usize,

    /// Render `**bold**` and blank-line paragraphs
    #[serde(default = "default_true")]
    pub enable_markdown: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            very_long_threshold: default_very_long_threshold(),
            long_threshold: default_long_threshold(),
            long_word_limit: default_long_word_limit(),
            short_word_limit: default_short_word_limit(),
            section_word_limit: default_section_word_limit(),
            enable_markdown: true,
        }
    }
}

impl DisplaySettings {
    /// Thresholds for the description segmenter
    pub fn thresholds(&self) -> SegmentThresholds {
        SegmentThresholds {
            very_long: self.very_long_threshold,
            long: self.long_threshold,
            long_word_limit: self.long_word_limit,
            short_word_limit: self.short_word_limit,
        }
    }
}

fn default_very_long_threshold() -> usize {
    SegmentThresholds::default().very_long
}

fn default_long_threshold() -> usize {
    SegmentThresholds::default().long
}

fn default_long_word_limit() -> usize {
    SegmentThresholds::default().long_word_limit
}

fn default_short_word_limit() -> usize {
    SegmentThresholds::default().short_word_limit
}

fn default_section_word_limit() -> usize {
    150
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs; requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Whether the "Technical Details" panel starts open
    #[serde(default)]
    pub technical_open: bool,
}
