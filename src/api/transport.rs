//! HTTP transport abstraction.
//!
//! The [`HttpTransport`] trait is the seam between the typed API client and
//! the network. Production code uses [`ReqwestTransport`]; tests swap in
//! [`FakeTransport`](super::FakeTransport) to script responses without a
//! running backend.

use crate::domain::error::{ApiError, ExplorerError, Result};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// HTTP verbs used by the recipe backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A fully resolved request, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL without the query string.
    pub url: String,
    /// Path relative to the base URL, e.g. `/recipes/7`.
    pub path: String,
    /// Query parameters; never contains empty values.
    pub query: Vec<(String, String)>,
    /// JSON request body, sent with `Content-Type: application/json`.
    pub body: Option<JsonValue>,
}

impl HttpRequest {
    /// Value of a query parameter, if present.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response as seen by the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Whether the response declared a JSON content type.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }
}

/// Sends requests and returns raw responses.
///
/// Implementations report transport failures as [`ApiError::Network`] and
/// return every HTTP response, successful or not, as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs one request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, ApiError>;
}

/// Transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds the transport. No timeout is applied unless one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the TLS backend or client cannot be
    /// initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ExplorerError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_detection_is_case_insensitive_and_allows_charset() {
        let response = HttpResponse {
            status: 200,
            content_type: Some("Application/JSON; charset=utf-8".to_string()),
            body: "{}".to_string(),
        };
        assert!(response.is_json());
        assert!(response.is_success());
    }

    #[test]
    fn missing_content_type_is_not_json() {
        let response = HttpResponse {
            status: 204,
            content_type: None,
            body: String::new(),
        };
        assert!(!response.is_json());
    }
}
