//! Glossary entry record

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::icon::IconKind;
use crate::words::word_count;

/// One glossary term's static content.
///
/// Entries are immutable once loaded; every derived view (strategy, sections,
/// truncation) is recomputed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub term: String,

    /// Free-form description. Missing, `null` or non-string values load as `""`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(default)]
    pub category: Option<String>,

    pub icon: IconKind,
}

impl Entry {
    pub fn new(term: impl Into<String>, description: impl Into<String>, icon: IconKind) -> Self {
        Self {
            term: term.into(),
            description: description.into(),
            category: None,
            icon,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.description)
    }

    /// Category used for grouping; entries without one fall under "General"
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("General")
    }
}

/// Accept a string, or coerce anything else (null, numbers, tables) to empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(text) => text,
        Lenient::Other(_) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_json() {
        let entry: Entry = serde_json::from_str(
            r#"{"term": "Mean", "description": "The average value.", "category": "Statistics", "icon": "sigma"}"#,
        )
        .unwrap();
        assert_eq!(entry.term, "Mean");
        assert_eq!(entry.icon, IconKind::Sigma);
        assert_eq!(entry.category_or_default(), "Statistics");
        assert_eq!(entry.word_count(), 3);
    }

    #[test]
    fn test_null_description_coerced_to_empty() {
        let entry: Entry =
            serde_json::from_str(r#"{"term": "Mode", "description": null, "icon": "sigma"}"#)
                .unwrap();
        assert_eq!(entry.description, "");
        assert_eq!(entry.word_count(), 0);
    }

    #[test]
    fn test_non_string_description_coerced_to_empty() {
        let entry: Entry =
            serde_json::from_str(r#"{"term": "Median", "description": 42, "icon": "sigma"}"#)
                .unwrap();
        assert_eq!(entry.description, "");
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let entry: Entry = toml::from_str("term = \"Range\"\nicon = \"bar-chart\"\n").unwrap();
        assert_eq!(entry.description, "");
        assert_eq!(entry.category_or_default(), "General");
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let result =
            serde_json::from_str::<Entry>(r#"{"term": "Mean", "description": "", "icon": "??"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let entry = Entry::new("Vector", "An ordered list of numbers.", IconKind::Grid)
            .with_category("Linear Algebra");
        assert_eq!(entry.category.as_deref(), Some("Linear Algebra"));
    }
}
