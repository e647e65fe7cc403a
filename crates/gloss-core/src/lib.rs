//! # gloss-core - Core Domain Types
//!
//! Foundation crate for gloss. Provides the glossary domain types, error
//! handling, logging setup, and the description segmentation pipeline.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing, toml).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Entry`] - One glossary term's static content
//! - [`IconKind`] - Closed set of term icons
//! - [`TooltipData`], [`DiagramKind`] - Optional technical metadata per term
//! - [`ContentStore`] - Ordered, read-only term → entry mapping
//!
//! ### Description Pipeline
//! - [`classify()`] / [`DescriptionSegmenter`] - Pick a [`DisplayStrategy`] from the word count
//! - [`sections::split()`] - Partition very long text into [`Section`]s
//! - [`truncate::render()`] / [`TruncatedText`] - Word-budget truncation to a [`DisplayBlock`]
//! - [`inline`] - `**bold**` spans and blank-line paragraphs
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gloss_core::prelude::*;
//! ```

pub mod entry;
pub mod error;
pub mod icon;
pub mod inline;
pub mod logging;
pub mod sections;
pub mod store;
pub mod strategy;
pub mod tooltip;
pub mod truncate;
pub mod words;

/// Prelude for common imports used throughout all gloss crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use entry::Entry;
pub use error::{Error, Result, ResultExt};
pub use icon::IconKind;
pub use inline::{InlineSpan, Paragraph};
pub use sections::{split, split_with_tier, Section, SectionOrigin, SplitTier};
pub use store::{CategoryCount, ContentFile, ContentFormat, ContentStore};
pub use strategy::{classify, DescriptionSegmenter, DisplayStrategy, LengthTier, SegmentThresholds};
pub use tooltip::{DiagramKind, TooltipData};
pub use truncate::{DisplayBlock, ExpandControl, TruncatedText};
pub use words::word_count;
