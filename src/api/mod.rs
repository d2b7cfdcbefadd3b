//! API client layer for the recipe backend.
//!
//! # Modules
//!
//! - [`transport`]: HTTP transport trait and the `reqwest` implementation
//! - [`client`]: Typed per-resource operations and response normalization
//! - [`fake`]: Scripted transport used by tests and offline demos
//!
//! # Example
//!
//! ```no_run
//! use recipe_explorer::api::{ApiClient, ApiConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::with_reqwest(ApiConfig::new("http://localhost:3001"))?;
//! let categories = client.fetch_categories().await?;
//! println!("{} categories", categories.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod fake;
pub mod transport;

pub use client::{ApiClient, ApiConfig, RecipeQuery, SearchQuery, DEFAULT_BASE_URL};
pub use fake::FakeTransport;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
