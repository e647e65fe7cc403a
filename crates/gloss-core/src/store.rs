//! Read-only glossary content store.
//!
//! Holds the ordered list of [`Entry`] records and the optional
//! [`TooltipData`] map. Lookups are exact and case-sensitive.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::Entry;
use crate::error::{Error, Result, ResultExt};
use crate::tooltip::TooltipData;

/// On-disk shape of a content file (TOML or JSON)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentFile {
    #[serde(default)]
    pub entries: Vec<Entry>,

    #[serde(default)]
    pub tooltips: HashMap<String, TooltipData>,
}

/// Supported content file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(ContentFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(ContentFormat::Json),
            _ => None,
        }
    }
}

/// Category name with the number of entries in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Ordered glossary entries keyed by term
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    tooltips: HashMap<String, TooltipData>,
}

impl ContentStore {
    /// Build a store, rejecting duplicate terms
    pub fn new(entries: Vec<Entry>, tooltips: HashMap<String, TooltipData>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.term.clone(), i).is_some() {
                return Err(Error::duplicate_term(&entry.term));
            }
        }

        Ok(Self {
            entries,
            index,
            tooltips,
        })
    }

    pub fn from_content_file(file: ContentFile) -> Result<Self> {
        Self::new(file.entries, file.tooltips)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ContentFile = toml::from_str(content)?;
        Self::from_content_file(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: ContentFile = serde_json::from_str(content)?;
        Self::from_content_file(file)
    }

    /// Load a content file, choosing the parser from the extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::content_not_found(path));
        }

        let format = ContentFormat::from_path(path).ok_or_else(|| Error::content_format(path))?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {:?}", path))?;

        let store = match format {
            ContentFormat::Toml => Self::from_toml_str(&content)?,
            ContentFormat::Json => Self::from_json_str(&content)?,
        };

        debug!(
            "Loaded {} entries ({} tooltips) from {:?}",
            store.len(),
            store.tooltips.len(),
            path
        );
        Ok(store)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, term: &str) -> Option<&Entry> {
        self.index.get(term).map(|&i| &self.entries[i])
    }

    /// Position of a term in store order
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Tooltip data for a term. `None` is the normal case.
    pub fn tooltip(&self, term: &str) -> Option<&TooltipData> {
        self.tooltips.get(term)
    }

    /// Like [`ContentStore::get`] but reports a missing term as an error
    pub fn require(&self, term: &str) -> Result<&Entry> {
        self.get(term).ok_or_else(|| Error::term_not_found(term))
    }

    /// Categories in first-seen order with entry counts
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for entry in &self.entries {
            let name = entry.category_or_default();
            match counts.iter_mut().find(|c| c.name == name) {
                Some(existing) => existing.count += 1,
                None => counts.push(CategoryCount {
                    name: name.to_string(),
                    count: 1,
                }),
            }
        }
        counts
    }
}
