//! Section boundary matchers.
//!
//! Each matcher scans the raw text independently and reports candidate
//! boundaries. Matchers know nothing about each other; ordering and overlap
//! are resolved afterwards by [`merge_candidates`].

use std::sync::LazyLock;

use regex::Regex;

/// `**Title**:` anywhere in the text
static BOLD_HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^*\n]+)\*\*:").expect("Bold header regex pattern is valid")
});

/// `Capitalized phrase:` at the start of a line
static LINE_HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([A-Z][^:\n.*]{2,60}):").expect("Line header regex pattern is valid")
});

/// `N. Title` at the start of a line; the title runs to `:` or end of line
static NUMBERED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+([^\n:]+):?")
        .expect("Numbered marker regex pattern is valid")
});

/// `Two Words:` anywhere in the text
static TWO_WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+ [A-Z][a-z]+):").expect("Two-word header regex pattern is valid")
});

/// Which heuristic produced a candidate. Declaration order is merge priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatcherKind {
    BoldHeader,
    LineHeader,
    Numbered,
    TwoWordHeader,
}

impl MatcherKind {
    /// All matchers in priority order
    pub const ALL: [MatcherKind; 4] = [
        MatcherKind::BoldHeader,
        MatcherKind::LineHeader,
        MatcherKind::Numbered,
        MatcherKind::TwoWordHeader,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            MatcherKind::BoldHeader => &BOLD_HEADER_PATTERN,
            MatcherKind::LineHeader => &LINE_HEADER_PATTERN,
            MatcherKind::Numbered => &NUMBERED_PATTERN,
            MatcherKind::TwoWordHeader => &TWO_WORD_PATTERN,
        }
    }

    /// Run this matcher over `text`
    pub fn find(self, text: &str) -> Vec<Candidate> {
        self.pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let marker = caps.get(0)?;
                let title = caps.get(1)?.as_str().trim();
                if title.is_empty() {
                    return None;
                }
                Some(Candidate {
                    offset: marker.start(),
                    end: marker.end(),
                    title: title.to_string(),
                    kind: self,
                })
            })
            .collect()
    }
}

/// A possible section boundary.
///
/// `offset..end` is the byte span of the marker text, which is stripped from
/// the section content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub offset: usize,
    pub end: usize,
    pub title: String,
    pub kind: MatcherKind,
}

impl Candidate {
    pub fn marker<'t>(&self, text: &'t str) -> &'t str {
        &text[self.offset..self.end]
    }
}

pub fn bold_headers(text: &str) -> Vec<Candidate> {
    MatcherKind::BoldHeader.find(text)
}

pub fn line_headers(text: &str) -> Vec<Candidate> {
    MatcherKind::LineHeader.find(text)
}

pub fn numbered_markers(text: &str) -> Vec<Candidate> {
    MatcherKind::Numbered.find(text)
}

pub fn two_word_headers(text: &str) -> Vec<Candidate> {
    MatcherKind::TwoWordHeader.find(text)
}

/// Run every matcher and merge the results
pub fn find_candidates(text: &str) -> Vec<Candidate> {
    let all = MatcherKind::ALL
        .iter()
        .flat_map(|kind| kind.find(text))
        .collect();
    merge_candidates(all)
}

/// Sort candidates by position and drop overlaps.
///
/// Ties at the same offset go to the higher-priority matcher. A candidate that
/// starts inside the marker span of an already accepted candidate is dropped,
/// so markers never overlap and every slice between two markers is valid.
pub fn merge_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| (c.offset, c.kind));

    let mut merged: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if let Some(last) = merged.last() {
            if candidate.offset < last.end {
                continue;
            }
        }
        merged.push(candidate);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_header_matcher() {
        let text = "Intro text. **Key Idea**: something here. **Second**: more";
        let found = bold_headers(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "Key Idea");
        assert_eq!(found[0].marker(text), "**Key Idea**:");
        assert_eq!(found[1].title, "Second");
    }

    #[test]
    fn test_bold_without_colon_is_not_a_header() {
        assert!(bold_headers("this is **important** stuff").is_empty());
    }

    #[test]
    fn test_line_header_matcher_requires_line_start() {
        let text = "Overview: first part\nthe data: not a header\nHow it works: second";
        let found = line_headers(text);
        let titles: Vec<&str> = found.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Overview", "How it works"]);
    }

    #[test]
    fn test_line_header_does_not_span_sentences() {
        assert!(line_headers("This is one sentence. Another part: no").is_empty());
    }

    #[test]
    fn test_numbered_matcher() {
        let text = "Steps\n1. Collect data: gather it\n  2. Clean the data. Remove noise";
        let found = numbered_markers(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "Collect data");
        assert_eq!(found[0].marker(text), "1. Collect data:");
        assert_eq!(found[1].title, "Clean the data. Remove noise");
    }

    #[test]
    fn test_numbered_matcher_keeps_long_title_whole() {
        let line = "1. Calibrate the sensor array before it is deployed across the field sites";
        let text = format!("{}
Readings drift without it", line);
        let found = numbered_markers(&text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, &line[3..]);
        assert_eq!(found[0].end, line.len());
        assert!(text[found[0].end..].trim_start().starts_with("Readings"));
    }

    #[test]
    fn test_numbered_matcher_title_with_abbreviation() {
        let text = "Steps
1. Reduce dimensions, e.g. with PCA or UMAP
Then cluster";
        let found = numbered_markers(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Reduce dimensions, e.g. with PCA or UMAP");
    }

    #[test]
    fn test_two_word_matcher_anywhere() {
        let text = "as noted, Feature Scaling: values are normalized";
        let found = two_word_headers(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Feature Scaling");
        assert_eq!(found[0].offset, text.find("Feature").unwrap());
    }

    #[test]
    fn test_two_word_matcher_rejects_single_word() {
        assert!(two_word_headers("Note: lowercase after").is_empty());
    }

    #[test]
    fn test_merge_sorts_by_offset() {
        let text = "Model Training: aaa\n**Evaluation**: bbb";
        let merged = find_candidates(text);
        let titles: Vec<&str> = merged.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Model Training", "Evaluation"]);
    }

    #[test]
    fn test_merge_tie_prefers_priority_order() {
        // Both the line-start and the two-word matcher fire at offset 0
        let text = "Model Training: the model is fit";
        assert_eq!(line_headers(text).len(), 1);
        assert_eq!(two_word_headers(text).len(), 1);

        let merged = find_candidates(text);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].kind, MatcherKind::LineHeader);
    }

    #[test]
    fn test_merge_drops_candidates_inside_marker() {
        let text = "The Model Training: fit it";
        let merged = find_candidates(text);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "The Model Training");
    }

    #[test]
    fn test_merge_of_manual_candidates() {
        let make = |offset, end, kind| Candidate {
            offset,
            end,
            title: "t".to_string(),
            kind,
        };
        let merged = merge_candidates(vec![
            make(40, 45, MatcherKind::TwoWordHeader),
            make(10, 20, MatcherKind::Numbered),
            make(10, 15, MatcherKind::BoldHeader),
            make(12, 18, MatcherKind::LineHeader),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].kind, MatcherKind::BoldHeader);
        assert_eq!(merged[1].offset, 40);
    }
}
