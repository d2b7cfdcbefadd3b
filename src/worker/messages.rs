//! Request and response protocol between the event loop and the API worker.
//!
//! Every message carries the [`RequestTicket`] the orchestrator issued for it,
//! and every response echoes that ticket back. The orchestrator applies a
//! response only while the ticket is still the latest one for its resource.

use crate::domain::{ApiError, Category, ListFilter, NewRating, Rating, RecipeDetail, RecipeListing};
use std::fmt;

/// Monotonically increasing id stamped on each outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestTicket(pub u64);

impl RequestTicket {
    /// The ticket following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Requests sent from the event loop to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Load the category list.
    LoadCategories { ticket: RequestTicket },

    /// Load one page of recipes under a filter.
    ///
    /// `ListFilter::Ingredients` is served by `/search`, everything else by
    /// `/recipes`.
    LoadRecipes {
        ticket: RequestTicket,
        filter: ListFilter,
        page: u32,
        size: u32,
    },

    /// Load a recipe's detail.
    LoadRecipeDetail { ticket: RequestTicket, recipe_id: i64 },

    /// Load a recipe's ratings.
    LoadRatings { ticket: RequestTicket, recipe_id: i64 },

    /// Create a rating on a recipe.
    CreateRating {
        ticket: RequestTicket,
        recipe_id: i64,
        rating: NewRating,
    },
}

impl WorkerMessage {
    /// Ticket of this request.
    #[must_use]
    pub const fn ticket(&self) -> RequestTicket {
        match self {
            Self::LoadCategories { ticket }
            | Self::LoadRecipes { ticket, .. }
            | Self::LoadRecipeDetail { ticket, .. }
            | Self::LoadRatings { ticket, .. }
            | Self::CreateRating { ticket, .. } => *ticket,
        }
    }
}

/// Responses sent from the worker back to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    CategoriesLoaded {
        ticket: RequestTicket,
        result: Result<Vec<Category>, ApiError>,
    },

    RecipesLoaded {
        ticket: RequestTicket,
        result: Result<RecipeListing, ApiError>,
    },

    RecipeDetailLoaded {
        ticket: RequestTicket,
        recipe_id: i64,
        result: Result<RecipeDetail, ApiError>,
    },

    RatingsLoaded {
        ticket: RequestTicket,
        recipe_id: i64,
        result: Result<Vec<Rating>, ApiError>,
    },

    RatingCreated {
        ticket: RequestTicket,
        recipe_id: i64,
        result: Result<Rating, ApiError>,
    },
}

impl WorkerResponse {
    /// Ticket of the request this response answers.
    #[must_use]
    pub const fn ticket(&self) -> RequestTicket {
        match self {
            Self::CategoriesLoaded { ticket, .. }
            | Self::RecipesLoaded { ticket, .. }
            | Self::RecipeDetailLoaded { ticket, .. }
            | Self::RatingsLoaded { ticket, .. }
            | Self::RatingCreated { ticket, .. } => *ticket,
        }
    }
}
