//! Domain layer for the recipe explorer.
//!
//! This module contains the data model served by the recipe backend, the list
//! filter vocabulary shared by the orchestrator and the worker, and the error
//! taxonomy. It has no knowledge of HTTP transports or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`filter`]: Browse modes and ingredient CSV normalization
//! - [`rating`]: Ratings and new-rating payloads
//! - [`recipe`]: Categories, recipe summaries and details

pub mod error;
pub mod filter;
pub mod rating;
pub mod recipe;

pub use error::{ApiError, ExplorerError, ResponseBody, Result};
pub use filter::{ingredient_tokens, normalize_ingredients_csv, ListFilter};
pub use rating::{NewRating, Rating, MAX_SCORE, MIN_SCORE};
pub use recipe::{
    format_avg_rating, format_ratings_count, Category, Ingredient, PageMeta, RecipeDetail,
    RecipeListing, RecipePage, RecipeSummary,
};
