//! Display strategy selection for a description.
//!
//! The strategy is a pure function of the description's word count:
//!
//! | words        | tier      | strategy                                  |
//! |--------------|-----------|-------------------------------------------|
//! | `> 500`      | very long | `Sectioned` (split into titled sections)  |
//! | `101..=500`  | long      | `Flat { word_limit: 100, show_count }`    |
//! | `<= 100`     | short     | `Flat { word_limit: 200 }` (safety cap)   |

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::sections::{self, Section};
use crate::words::word_count;

/// Word-count thresholds and limits used by [`DescriptionSegmenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentThresholds {
    /// Descriptions with more words than this are split into sections
    pub very_long: usize,

    /// Descriptions with more words than this are truncated with a count
    pub long: usize,

    /// Word limit on the long path
    pub long_word_limit: usize,

    /// Word limit on the short path
    pub short_word_limit: usize,
}

impl Default for SegmentThresholds {
    fn default() -> Self {
        Self {
            very_long: 500,
            long: 100,
            long_word_limit: 100,
            short_word_limit: 200,
        }
    }
}

/// Word-count tier of a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthTier {
    Short,
    Long,
    VeryLong,
}

/// How a description should be displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayStrategy {
    /// One truncated block
    Flat { word_limit: usize, show_count: bool },

    /// Ordered sections; empty means the caller falls back to a flat block
    Sectioned { sections: Vec<Section> },
}

impl DisplayStrategy {
    pub fn is_sectioned(&self) -> bool {
        matches!(self, DisplayStrategy::Sectioned { .. })
    }
}

/// Picks a [`DisplayStrategy`] for a description
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionSegmenter {
    thresholds: SegmentThresholds,
}

impl DescriptionSegmenter {
    pub fn new(thresholds: SegmentThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SegmentThresholds {
        &self.thresholds
    }

    pub fn tier(&self, word_count: usize) -> LengthTier {
        if word_count > self.thresholds.very_long {
            LengthTier::VeryLong
        } else if word_count > self.thresholds.long {
            LengthTier::Long
        } else {
            LengthTier::Short
        }
    }

    /// Classify a description. Never fails; the empty string is a short description.
    pub fn classify(&self, description: &str) -> DisplayStrategy {
        let count = word_count(description);
        let tier = self.tier(count);
        trace!("Classified description ({} words) as {:?}", count, tier);

        match tier {
            LengthTier::VeryLong => DisplayStrategy::Sectioned {
                sections: sections::split(description),
            },
            LengthTier::Long => DisplayStrategy::Flat {
                word_limit: self.thresholds.long_word_limit,
                show_count: true,
            },
            LengthTier::Short => DisplayStrategy::Flat {
                word_limit: self.thresholds.short_word_limit,
                show_count: false,
            },
        }
    }
}

/// Classify with the default thresholds
pub fn classify(description: &str) -> DisplayStrategy {
    DescriptionSegmenter::default().classify(description)
}
