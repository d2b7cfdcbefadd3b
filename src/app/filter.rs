//! Browse filter state: selected category versus ingredient search.

use crate::domain::ListFilter;

/// Current browse mode of the recipe list.
///
/// The category selection is retained while an ingredient search is active
/// but is not applied until the search is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Category picked in the sidebar, `None` for all recipes.
    pub selected_category: Option<i64>,

    /// Last submitted (normalized) search text, not yet debounced.
    pub search_input: String,

    /// Search text the list is currently filtered by.
    pub debounced_search: String,
}

impl FilterState {
    /// Filter the next list fetch should use.
    ///
    /// An active search takes precedence over the category.
    #[must_use]
    pub fn list_filter(&self) -> ListFilter {
        if !self.debounced_search.is_empty() {
            return ListFilter::Ingredients(self.debounced_search.clone());
        }
        self.selected_category.map_or(ListFilter::All, ListFilter::Category)
    }

    #[must_use]
    pub fn is_search_active(&self) -> bool {
        !self.debounced_search.is_empty()
    }

    /// Selects a category and drops both the raw and debounced search.
    ///
    /// Returns `true` when the effective list filter changed.
    pub fn select_category(&mut self, category_id: Option<i64>) -> bool {
        let before = self.list_filter();
        self.selected_category = category_id;
        self.search_input.clear();
        self.debounced_search.clear();
        before != self.list_filter()
    }

    /// Applies a debounced search value.
    ///
    /// Returns `true` when the debounced text actually changed.
    pub fn apply_debounced(&mut self, value: String) -> bool {
        if self.debounced_search == value {
            return false;
        }
        self.debounced_search = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_takes_precedence_over_category() {
        let filter = FilterState {
            selected_category: Some(3),
            search_input: "garlic".to_string(),
            debounced_search: "garlic".to_string(),
        };
        assert_eq!(filter.list_filter(), ListFilter::Ingredients("garlic".to_string()));
    }

    #[test]
    fn selecting_category_clears_search() {
        let mut filter = FilterState {
            selected_category: None,
            search_input: "garlic".to_string(),
            debounced_search: "garlic".to_string(),
        };

        assert!(filter.select_category(Some(2)));
        assert_eq!(filter.search_input, "");
        assert_eq!(filter.list_filter(), ListFilter::Category(2));
    }

    #[test]
    fn reselecting_same_category_is_not_a_change() {
        let mut filter = FilterState::default();
        assert!(filter.select_category(Some(2)));
        assert!(!filter.select_category(Some(2)));
    }

    #[test]
    fn clearing_search_reverts_to_retained_category() {
        let mut filter = FilterState {
            selected_category: Some(4),
            search_input: String::new(),
            debounced_search: "lemon".to_string(),
        };

        assert!(filter.apply_debounced(String::new()));
        assert_eq!(filter.list_filter(), ListFilter::Category(4));
        assert!(!filter.apply_debounced(String::new()));
    }
}
