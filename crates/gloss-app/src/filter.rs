//! Term search and category filtering.

use gloss_core::{CategoryCount, ContentStore, Entry};

/// Active search query and category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossaryFilter {
    pub query: String,

    /// `None` means all categories
    pub category: Option<String>,
}

impl GlossaryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.category.is_some()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
    }

    /// Case-insensitive substring match on term or description, within the category
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(category) = &self.category {
            if entry.category_or_default() != category {
                return false;
            }
        }

        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }

        let query = query.to_lowercase();
        entry.term.to_lowercase().contains(&query)
            || entry.description.to_lowercase().contains(&query)
    }

    /// Indices of matching entries, in store order
    pub fn apply(&self, store: &ContentStore) -> Vec<usize> {
        store
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches(entry))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Next category in first-seen order: All → first → … → last → All
pub fn next_category(current: Option<&str>, categories: &[CategoryCount]) -> Option<String> {
    match current {
        None => categories.first().map(|c| c.name.clone()),
        Some(current) => categories
            .iter()
            .position(|c| c.name == current)
            .and_then(|i| categories.get(i + 1))
            .map(|c| c.name.clone()),
    }
}
