//! Project category filter.
//!
//! A selection shows a card when the filter is `all` or equals the card's
//! category. Matching is exact; a button without `data-filter` matches only
//! cards without `data-category`.

use crate::state::detail::ProjectCard;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Filter value that shows every card.
pub const ALL: &str = "all";

/// Class marking the selected filter button.
pub const ACTIVE_CLASS: &str = "active";

#[must_use]
pub fn shows(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(ALL) || filter == category
}

/// Result of selecting one filter control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    /// One flag per control; exactly one is set.
    pub active: Vec<bool>,
    /// One flag per card.
    pub visible: Vec<bool>,
}

/// Filter bar over a fixed set of controls and cards.
#[derive(Clone, Debug, Default)]
pub struct FilterBar {
    filters: Vec<Option<String>>,
    categories: Vec<Option<String>>,
    selected: Option<usize>,
}

impl FilterBar {
    #[must_use]
    pub fn new(filters: Vec<Option<String>>, categories: Vec<Option<String>>) -> Self {
        Self { filters, categories, selected: None }
    }

    /// Filter bar over `cards`, matched on each card's category.
    #[must_use]
    pub fn for_cards(filters: Vec<Option<String>>, cards: &[ProjectCard]) -> Self {
        Self::new(filters, cards.iter().map(|card| card.category.clone()).collect())
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select control `index`. `None` if there is no such control.
    pub fn select(&mut self, index: usize) -> Option<FilterOutcome> {
        let filter = self.filters.get(index)?.as_deref();
        let active = (0..self.filters.len()).map(|i| i == index).collect();
        let visible = self.categories.iter().map(|c| shows(filter, c.as_deref())).collect();
        self.selected = Some(index);
        Some(FilterOutcome { active, visible })
    }
}
