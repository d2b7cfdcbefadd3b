//! Error types for the recipe explorer.
//!
//! Two layers of errors live here. [`ApiError`] is the structured failure of a
//! single backend call (or of client-side validation that stands in front of
//! one); it is cheap to clone so it can travel inside worker responses and be
//! stored per resource. [`ExplorerError`] is the application-level error used
//! by configuration loading, the event handler and the runtime, and wraps
//! `ApiError` via `#[from]`.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Parsed body of an HTTP response.
///
/// Bodies are decoded as JSON only when the response declared a JSON content
/// type; everything else is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body of a response whose `Content-Type` contained `application/json`.
    Json(JsonValue),

    /// Raw text of any other response (possibly empty).
    Text(String),
}

impl ResponseBody {
    /// Returns the server-supplied `detail` string, if the body is a JSON
    /// object carrying one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value.get("detail").and_then(JsonValue::as_str),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text when the body is non-JSON and non-empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Failure of a backend request, or a client-side rejection before one.
///
/// The `Display` output of every variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connection refused,
    /// reset, timeout when one is configured).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        body: ResponseBody,
    },

    /// The server answered 404 for a resource lookup.
    #[error("{message}")]
    NotFound { message: String, body: ResponseBody },

    /// Input was rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// A success response did not match the expected shape.
    #[error("Invalid response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-success HTTP status.
    ///
    /// The message prefers the server's `detail` field, then the raw response
    /// text, then a generic `Request failed (status)`. A 404 becomes
    /// [`ApiError::NotFound`].
    #[must_use]
    pub fn from_status(status: u16, body: ResponseBody) -> Self {
        let message = body
            .detail()
            .or_else(|| body.text())
            .map_or_else(|| format!("Request failed ({status})"), String::from);

        if status == 404 {
            Self::NotFound { message, body }
        } else {
            Self::Http {
                status,
                message,
                body,
            }
        }
    }

    /// HTTP status carried by the error, if it came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Raw parsed response body, kept for diagnostics.
    #[must_use]
    pub const fn body(&self) -> Option<&ResponseBody> {
        match self {
            Self::Http { body, .. } | Self::NotFound { body, .. } => Some(body),
            _ => None,
        }
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// The main error type for recipe explorer operations.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// A backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The request worker could not be reached.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for recipe explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_error_prefers_detail_field() {
        let err = ApiError::from_status(422, ResponseBody::Json(json!({"detail": "score out of range"})));
        assert_eq!(err.message(), "score out of range");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn status_error_falls_back_to_text_then_generic() {
        let err = ApiError::from_status(502, ResponseBody::Text("bad gateway".to_string()));
        assert_eq!(err.message(), "bad gateway");

        let err = ApiError::from_status(500, ResponseBody::Text(String::new()));
        assert_eq!(err.message(), "Request failed (500)");

        let err = ApiError::from_status(500, ResponseBody::Json(json!({"error": "boom"})));
        assert_eq!(err.message(), "Request failed (500)");
    }

    #[test]
    fn not_found_is_a_404_specialization() {
        let err = ApiError::from_status(404, ResponseBody::Json(json!({"detail": "Recipe not found"})));
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "Recipe not found");
        assert!(err.body().is_some());
    }

    #[test]
    fn validation_has_no_status() {
        let err = ApiError::Validation("Please enter your name.".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.message(), "Please enter your name.");
    }
}
