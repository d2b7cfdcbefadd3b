//! Worker that executes API requests off the event loop.
//!
//! The event loop never awaits the network itself. It hands each
//! [`WorkerMessage`] to [`ApiWorker::dispatch`], which runs the request on a
//! tokio task and posts the [`WorkerResponse`] to a channel the loop drains.
//! Requests are never cancelled; stale responses are fenced out by the
//! orchestrator using their tickets.

use crate::api::{ApiClient, RecipeQuery, SearchQuery};
use crate::domain::{ApiError, ListFilter, RecipeListing};
use crate::worker::{WorkerMessage, WorkerResponse};
use tokio::sync::mpsc::UnboundedSender;
use tracing::Instrument;

/// Executes worker messages against the backend.
#[derive(Debug, Clone)]
pub struct ApiWorker {
    client: ApiClient,
}

impl ApiWorker {
    /// Creates a worker around an API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Logs the outcome of one operation and passes it through.
    fn log_result<T>(operation: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        match &result {
            Ok(_) => tracing::debug!(operation = operation, "api operation successful"),
            Err(e) => tracing::debug!(operation = operation, error = %e, "api operation failed"),
        }
        result
    }

    async fn load_recipes(&self, filter: ListFilter, page: u32, size: u32) -> Result<RecipeListing, ApiError> {
        match filter {
            ListFilter::Ingredients(ingredients_csv) => {
                let query = SearchQuery {
                    ingredients_csv,
                    page,
                    size,
                };
                let items = self.client.search_recipes_by_ingredients(&query).await?;
                tracing::debug!(match_count = items.len(), "ingredient search completed");
                Ok(RecipeListing::from_matches(items, page, size))
            }
            ListFilter::Category(category_id) => {
                let query = RecipeQuery {
                    category_id: Some(category_id),
                    ingredient: None,
                    page,
                    size,
                };
                self.client.fetch_recipes(&query).await.map(RecipeListing::from_page)
            }
            ListFilter::All => {
                let query = RecipeQuery {
                    category_id: None,
                    ingredient: None,
                    page,
                    size,
                };
                self.client.fetch_recipes(&query).await.map(RecipeListing::from_page)
            }
        }
    }

    /// Processes one message and returns its response.
    pub async fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", ticket = %message.ticket(), message_type = ?message);

        async move {
            match message {
                WorkerMessage::LoadCategories { ticket } => WorkerResponse::CategoriesLoaded {
                    ticket,
                    result: Self::log_result("load categories", self.client.fetch_categories().await),
                },
                WorkerMessage::LoadRecipes {
                    ticket,
                    filter,
                    page,
                    size,
                } => WorkerResponse::RecipesLoaded {
                    ticket,
                    result: Self::log_result("load recipes", self.load_recipes(filter, page, size).await),
                },
                WorkerMessage::LoadRecipeDetail { ticket, recipe_id } => {
                    WorkerResponse::RecipeDetailLoaded {
                        ticket,
                        recipe_id,
                        result: Self::log_result(
                            "load recipe detail",
                            self.client.fetch_recipe_detail(recipe_id).await,
                        ),
                    }
                }
                WorkerMessage::LoadRatings { ticket, recipe_id } => WorkerResponse::RatingsLoaded {
                    ticket,
                    recipe_id,
                    result: Self::log_result("load ratings", self.client.fetch_ratings(recipe_id).await),
                },
                WorkerMessage::CreateRating {
                    ticket,
                    recipe_id,
                    rating,
                } => WorkerResponse::RatingCreated {
                    ticket,
                    recipe_id,
                    result: Self::log_result(
                        "create rating",
                        self.client.create_rating(recipe_id, &rating).await,
                    ),
                },
            }
        }
        .instrument(span)
        .await
    }

    /// Runs a message on a background task and posts the response to `responses`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, message: WorkerMessage, responses: UnboundedSender<WorkerResponse>) {
        let worker = self.clone();
        tokio::spawn(async move {
            let response = worker.handle_message(message).await;
            if responses.send(response).is_err() {
                tracing::debug!("event loop gone, dropping worker response");
            }
        });
    }
}
