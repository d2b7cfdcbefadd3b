//! List filter and ingredient search normalization.

use serde::{Deserialize, Serialize};

/// The browse mode a recipe list request was made under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListFilter {
    /// No filter: browse every recipe.
    All,

    /// Recipes in one category.
    Category(i64),

    /// Recipes containing all of the listed ingredients (normalized CSV).
    Ingredients(String),
}

impl ListFilter {
    /// Whether this filter is an ingredient search.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Ingredients(_))
    }
}

/// Normalizes free-form ingredient input into the CSV sent to `/search`.
///
/// Tokens are comma-separated, trimmed and lowercased; empty tokens are
/// dropped. The result is joined with `", "`, and is empty when no token
/// survives (which clears search mode).
///
/// ```
/// use recipe_explorer::domain::normalize_ingredients_csv;
///
/// assert_eq!(normalize_ingredients_csv("chicken, Garlic , lemon"), "chicken, garlic, lemon");
/// assert_eq!(normalize_ingredients_csv(" , ,"), "");
/// ```
#[must_use]
pub fn normalize_ingredients_csv(input: &str) -> String {
    ingredient_tokens(input).join(", ")
}

/// Splits ingredient input into its normalized tokens.
#[must_use]
pub fn ingredient_tokens(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_input_normalizes_to_empty() {
        assert_eq!(normalize_ingredients_csv("   "), "");
        assert_eq!(normalize_ingredients_csv(""), "");
    }

    #[test]
    fn empty_tokens_between_commas_are_dropped() {
        assert_eq!(normalize_ingredients_csv("rice,,  BEANS ,"), "rice, beans");
        assert_eq!(ingredient_tokens("rice,,  BEANS ,").len(), 2);
    }

    #[test]
    fn only_ingredients_filter_is_search() {
        assert!(ListFilter::Ingredients("egg".to_string()).is_search());
        assert!(!ListFilter::Category(3).is_search());
        assert!(!ListFilter::All.is_search());
    }
}
