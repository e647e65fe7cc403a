//! Application state (Model in TEA pattern)

use gloss_core::prelude::*;
use gloss_core::{ContentStore, Entry};

use crate::card::{FocusTarget, GlossaryCard};
use crate::config::Settings;
use crate::filter::{next_category, GlossaryFilter};

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Term list and card
    #[default]
    Browse,

    /// Capturing text for the search query
    SearchInput,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub store: ContentStore,
    pub settings: Settings,
    pub filter: GlossaryFilter,

    /// Store indices of entries passing the filter
    visible: Vec<usize>,

    /// Index into `visible`
    selected: Option<usize>,

    /// Card for the selected entry
    card: Option<GlossaryCard>,

    /// Index into the card's focus targets
    focus: Option<usize>,

    /// Vertical scroll offset of the card pane
    pub card_scroll: u16,

    /// One-line feedback shown in the status bar
    pub status: Option<String>,

    should_quit: bool,
}

impl AppState {
    pub fn new(store: ContentStore, settings: Settings) -> Self {
        let mut state = Self {
            ui_mode: UiMode::Browse,
            store,
            settings,
            filter: GlossaryFilter::new(),
            visible: Vec::new(),
            selected: None,
            card: None,
            focus: None,
            card_scroll: 0,
            status: None,
            should_quit: false,
        };
        state.refresh_visible();
        state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ─────────────────────────────────────────────────────────
    // Term List
    // ─────────────────────────────────────────────────────────

    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> {
        self.visible.iter().map(|&i| &self.store.entries()[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Selected row in the visible list
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected
            .and_then(|i| self.visible.get(i))
            .map(|&i| &self.store.entries()[i])
    }

    /// Select a row of the visible list and rebuild its card
    pub fn select(&mut self, index: usize) {
        if index >= self.visible.len() {
            return;
        }
        self.selected = Some(index);
        self.rebuild_card();
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            if i + 1 < self.visible.len() {
                self.select(i + 1);
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(i) = self.selected {
            if i > 0 {
                self.select(i - 1);
            }
        }
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.visible.len().checked_sub(1) {
            self.select(last);
        }
    }

    /// Re-apply the filter, keeping the current term selected when it is still visible
    pub fn refresh_visible(&mut self) {
        let current = self.selected.and_then(|i| self.visible.get(i)).copied();
        self.visible = self.filter.apply(&self.store);

        match current.and_then(|c| self.visible.iter().position(|&i| i == c)) {
            Some(index) => self.selected = Some(index),
            None if self.visible.is_empty() => {
                self.selected = None;
                self.card = None;
                self.focus = None;
                self.card_scroll = 0;
            }
            None => self.select(0),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Card
    // ─────────────────────────────────────────────────────────

    pub fn card(&self) -> Option<&GlossaryCard> {
        self.card.as_ref()
    }

    fn rebuild_card(&mut self) {
        let card = self.selected_entry().map(|entry| {
            GlossaryCard::build(entry, self.store.tooltip(&entry.term), &self.settings)
        });
        self.card = card;
        self.focus = None;
        self.card_scroll = 0;
    }

    pub fn focused_target(&self) -> Option<FocusTarget> {
        let card = self.card.as_ref()?;
        card.focus_targets().get(self.focus?).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_count();
        if count == 0 {
            self.focus = None;
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn focus_previous(&mut self) {
        let count = self.focus_count();
        if count == 0 {
            self.focus = None;
            return;
        }
        self.focus = Some(match self.focus {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    fn focus_count(&self) -> usize {
        self.card.as_ref().map_or(0, |card| card.focus_targets().len())
    }

    /// Toggle the focused item. Focus stays on it even as the target list changes.
    pub fn toggle_focused(&mut self) -> bool {
        let Some(target) = self.focused_target() else {
            return false;
        };
        let toggled = self.card.as_mut().is_some_and(|card| card.toggle(target));
        self.refocus(target);
        toggled
    }

    pub fn expand_all(&mut self) {
        let target = self.focused_target();
        if let Some(card) = &mut self.card {
            card.expand_all();
        }
        if let Some(target) = target {
            self.refocus(target);
        }
    }

    pub fn collapse_all(&mut self) {
        let target = self.focused_target();
        if let Some(card) = &mut self.card {
            card.collapse_all();
        }
        if let Some(target) = target {
            self.refocus(target);
        }
    }

    /// Point focus at `target`, or at the nearest remaining slot if it vanished
    fn refocus(&mut self, target: FocusTarget) {
        let targets = self
            .card
            .as_ref()
            .map(GlossaryCard::focus_targets)
            .unwrap_or_default();

        self.focus = match targets.iter().position(|&t| t == target) {
            Some(index) => Some(index),
            None if targets.is_empty() => None,
            None => Some(self.focus.unwrap_or(0).min(targets.len() - 1)),
        };
    }

    pub fn scroll_card_up(&mut self) {
        self.card_scroll = self.card_scroll.saturating_sub(1);
    }

    pub fn scroll_card_down(&mut self) {
        self.card_scroll = self.card_scroll.saturating_add(1);
    }

    /// Select `term` by exact match, clearing the filter if it hides the term
    pub fn jump_to_term(&mut self, term: &str) -> bool {
        let Some(position) = self.store.position(term) else {
            warn!("Related term {:?} is not in the glossary", term);
            self.status = Some(format!("No entry for \"{}\"", term));
            return false;
        };

        if !self.visible.contains(&position) {
            self.filter.clear();
            self.refresh_visible();
        }

        if let Some(index) = self.visible.iter().position(|&i| i == position) {
            self.select(index);
        }
        self.status = Some(format!("Jumped to {}", term));
        true
    }

    pub fn follow_related(&mut self) -> bool {
        let related = self
            .card
            .as_ref()
            .and_then(|card| card.related_terms().first().cloned());

        match related {
            Some(term) => self.jump_to_term(&term),
            None => {
                self.status = Some("No related terms".to_string());
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────

    pub fn cycle_category(&mut self) {
        let categories = self.store.categories();
        self.filter.category = next_category(self.filter.category.as_deref(), &categories);
        debug!("Category filter: {:?}", self.filter.category);
        self.status = Some(format!(
            "Category: {}",
            self.filter.category.as_deref().unwrap_or("All")
        ));
        self.refresh_visible();
    }

    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::SearchInput;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.query.push(c);
        self.refresh_visible();
    }

    pub fn pop_search_char(&mut self) {
        self.filter.query.pop();
        self.refresh_visible();
    }

    pub fn submit_search(&mut self) {
        self.ui_mode = UiMode::Browse;
    }

    pub fn cancel_search(&mut self) {
        self.filter.query.clear();
        self.ui_mode = UiMode::Browse;
        self.refresh_visible();
    }
}
