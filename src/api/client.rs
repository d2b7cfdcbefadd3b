//! Typed client for the recipe backend REST API.
//!
//! [`ApiClient`] exposes one async method per backend resource. All requests
//! go through a single private `request` helper that:
//!
//! 1. Resolves the path against the configured base URL
//! 2. Drops query parameters whose value is absent or empty
//! 3. Parses the body as JSON only when the response says it is JSON
//! 4. Normalizes non-2xx responses into [`ApiError`]
//!
//! The client never reads ambient configuration; everything it needs arrives
//! in [`ApiConfig`] at construction time.

use super::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::domain::error::{ApiError, ResponseBody, Result};
use crate::domain::{Category, NewRating, Rating, RecipeDetail, RecipePage, RecipeSummary};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;

/// Backend used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Connection settings handed to [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slashes.
    pub base_url: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates a config for `base_url`, stripping trailing slashes.
    ///
    /// ```
    /// use recipe_explorer::api::ApiConfig;
    ///
    /// let config = ApiConfig::new("http://api.example.com//");
    /// assert_eq!(config.base_url, "http://api.example.com");
    /// ```
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: None,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Parameters of `GET /recipes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub category_id: Option<i64>,
    pub ingredient: Option<String>,
    pub page: u32,
    pub size: u32,
}

/// Parameters of `GET /search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Normalized comma-separated ingredient list.
    pub ingredients_csv: String,
    pub page: u32,
    pub size: u32,
}

/// Client for the recipe backend.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client over an arbitrary transport.
    #[must_use]
    pub fn new(config: ApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Creates a client backed by `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_reqwest(config: ApiConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Connection settings in use.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn fetch_categories(&self) -> std::result::Result<Vec<Category>, ApiError> {
        self.request(HttpMethod::Get, "/categories", &[], None).await
    }

    /// `GET /recipes` with optional category/ingredient filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn fetch_recipes(&self, query: &RecipeQuery) -> std::result::Result<RecipePage, ApiError> {
        let params = [
            ("category_id", query.category_id.map(|id| id.to_string())),
            ("ingredient", query.ingredient.clone()),
            ("page", Some(query.page.to_string())),
            ("size", Some(query.size.to_string())),
        ];
        self.request(HttpMethod::Get, "/recipes", &params, None).await
    }

    /// `GET /recipes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, or any other
    /// [`ApiError`] on failure.
    pub async fn fetch_recipe_detail(&self, recipe_id: i64) -> std::result::Result<RecipeDetail, ApiError> {
        let path = format!("/recipes/{recipe_id}");
        self.request(HttpMethod::Get, &path, &[], None).await
    }

    /// `GET /search`: recipes containing all listed ingredients.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn search_recipes_by_ingredients(
        &self,
        query: &SearchQuery,
    ) -> std::result::Result<Vec<RecipeSummary>, ApiError> {
        let params = [
            ("ingredients", Some(query.ingredients_csv.clone())),
            ("page", Some(query.page.to_string())),
            ("size", Some(query.size.to_string())),
        ];
        self.request(HttpMethod::Get, "/search", &params, None).await
    }

    /// `GET /recipes/{id}/ratings`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn fetch_ratings(&self, recipe_id: i64) -> std::result::Result<Vec<Rating>, ApiError> {
        let path = format!("/recipes/{recipe_id}/ratings");
        self.request(HttpMethod::Get, &path, &[], None).await
    }

    /// `POST /recipes/{id}/ratings`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn create_rating(
        &self,
        recipe_id: i64,
        rating: &NewRating,
    ) -> std::result::Result<Rating, ApiError> {
        let path = format!("/recipes/{recipe_id}/ratings");
        let body = serde_json::to_value(rating).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(HttpMethod::Post, &path, &[], Some(body)).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(&str, Option<String>)],
        body: Option<JsonValue>,
    ) -> std::result::Result<T, ApiError> {
        let request = HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url),
            path: path.to_string(),
            query: build_query(params),
            body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "request failed before response");
            e
        })?;

        tracing::debug!(%method, path, status = response.status, "response received");

        decode_response(&response)
    }
}

/// Keeps only parameters with a non-empty value.
fn build_query(params: &[(&str, Option<String>)]) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| ((*key).to_string(), v.to_string()))
        })
        .collect()
}

/// Parses the body according to its declared content type.
///
/// A body that claims to be JSON but does not parse is kept as text.
#[must_use]
pub fn parse_body(response: &HttpResponse) -> ResponseBody {
    if response.is_json() {
        serde_json::from_str(&response.body)
            .map_or_else(|_| ResponseBody::Text(response.body.clone()), ResponseBody::Json)
    } else {
        ResponseBody::Text(response.body.clone())
    }
}

fn decode_response<T: DeserializeOwned>(response: &HttpResponse) -> std::result::Result<T, ApiError> {
    let body = parse_body(response);

    if !response.is_success() {
        let err = ApiError::from_status(response.status, body);
        tracing::warn!(status = response.status, error = %err, "request rejected by server");
        return Err(err);
    }

    match body {
        ResponseBody::Json(value) => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
        }
        ResponseBody::Text(_) => Err(ApiError::Decode(format!(
            "expected a JSON body (status {})",
            response.status
        ))),
    }
}
