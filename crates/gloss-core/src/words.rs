//! Whitespace word counting shared by the segmenter and the truncation renderer.

/// Number of whitespace-separated words after trimming. Empty text has zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The first `limit` words joined by single spaces
pub fn first_words(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Length in characters, which is how all offset thresholds are measured
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
