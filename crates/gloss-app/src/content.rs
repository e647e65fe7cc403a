//! Glossary content sources: the built-in glossary or a user-supplied file.

use std::path::Path;

use gloss_core::prelude::*;
use gloss_core::ContentStore;

/// The glossary compiled into the binary
pub const BUNDLED_GLOSSARY: &str = include_str!("../content/glossary.toml");

/// Parse the built-in glossary
pub fn bundled_store() -> Result<ContentStore> {
    ContentStore::from_toml_str(BUNDLED_GLOSSARY).context("Failed to parse bundled glossary")
}

/// Load `path` when given, else the built-in glossary
pub fn load_content(path: Option<&Path>) -> Result<ContentStore> {
    let store = match path {
        Some(path) => ContentStore::load(path)?,
        None => bundled_store()?,
    };
    info!("Loaded {} glossary entries", store.len());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_core::{DisplayStrategy, Error};
    use tempfile::tempdir;

    #[test]
    fn test_bundled_store_parses() {
        let store = bundled_store().unwrap();
        assert!(store.len() >= 8);
        assert!(store.get("Machine Learning").is_some());
    }

    #[test]
    fn test_bundled_store_covers_every_tier() {
        let store = bundled_store().unwrap();
        let mut sectioned = 0;
        let mut counted = 0;
        let mut short = 0;
        for entry in store.entries() {
            match gloss_core::classify(&entry.description) {
                DisplayStrategy::Sectioned { .. } => sectioned += 1,
                DisplayStrategy::Flat {
                    show_count: true, ..
                } => counted += 1,
                DisplayStrategy::Flat { .. } => short += 1,
            }
        }
        assert!(sectioned >= 2);
        assert!(counted >= 1);
        assert!(short >= 1);
    }

    #[test]
    fn test_bundled_related_terms_resolve() {
        let store = bundled_store().unwrap();
        for entry in store.entries() {
            if let Some(tooltip) = store.tooltip(&entry.term) {
                for related in &tooltip.related_terms {
                    assert!(store.get(related).is_some(), "{} -> {}", entry.term, related);
                }
            }
        }
    }

    #[test]
    fn test_load_content_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("terms.json");
        std::fs::write(
            &path,
            r#"{"entries": [{"term": "Vector", "description": "An ordered list of numbers.", "icon": "grid"}]}"#,
        )
        .unwrap();

        let store = load_content(Some(&path)).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("Vector").is_some());
    }

    #[test]
    fn test_load_content_missing_file() {
        let temp = tempdir().unwrap();
        let err = load_content(Some(&temp.path().join("none.toml"))).unwrap_err();
        assert!(matches!(err, Error::ContentNotFound { .. }));
    }
}
