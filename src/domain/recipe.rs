//! Recipe and category domain models.
//!
//! These mirror the JSON shapes served by the recipe backend. Optional fields
//! use `#[serde(default)]` so that partially populated payloads still decode.

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes a count that the backend may send as `null`.
fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

/// A recipe category shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Recipe as returned by the list and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub ratings_count: u32,
}

/// One ingredient line of a recipe, in recipe order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
}

/// Full recipe fetched on demand for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub ratings_count: u32,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Paginated response of `GET /recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePage {
    #[serde(default)]
    pub items: Vec<RecipeSummary>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

/// Pagination metadata of the current recipe list.
///
/// In ingredient search mode the backend reports no total, so `total` is the
/// number of matches returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl PageMeta {
    /// Number of pages implied by `total` and `size`, at least 1.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.size)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// A page of recipes together with its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeListing {
    pub items: Vec<RecipeSummary>,
    pub meta: PageMeta,
}

impl RecipeListing {
    /// Listing from a browse/category response; metadata comes from the server.
    #[must_use]
    pub fn from_page(page: RecipePage) -> Self {
        Self {
            meta: PageMeta {
                page: page.page,
                size: page.size,
                total: page.total,
            },
            items: page.items,
        }
    }

    /// Listing from a search response; `total` is synthesized from the matches.
    #[must_use]
    pub fn from_matches(items: Vec<RecipeSummary>, page: u32, size: u32) -> Self {
        Self {
            meta: PageMeta {
                page,
                size,
                total: items.len() as u64,
            },
            items,
        }
    }
}

/// Formats an average rating the way the catalog displays it: two decimals,
/// or an em dash when the recipe has no ratings yet.
///
/// ```
/// use recipe_explorer::domain::format_avg_rating;
///
/// assert_eq!(format_avg_rating(Some(4.0)), "4.00");
/// assert_eq!(format_avg_rating(None), "—");
/// ```
#[must_use]
pub fn format_avg_rating(avg: Option<f64>) -> String {
    avg.map_or_else(|| "—".to_string(), |value| format!("{value:.2}"))
}

/// Pluralized rating count, e.g. `"1 rating"`, `"3 ratings"`.
#[must_use]
pub fn format_ratings_count(count: u32) -> String {
    if count == 1 {
        "1 rating".to_string()
    } else {
        format!("{count} ratings")
    }
}
