//! Scripted in-memory transport for tests.
//!
//! Responses are registered per `(method, path)` and served in order; the last
//! registered response for a route keeps being served once the queue drains.
//! Every request is recorded so tests can assert on what was sent.

use super::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::domain::error::ApiError;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

type Reply = Result<HttpResponse, ApiError>;

/// A fake transport with scripted replies.
#[derive(Debug, Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(HttpMethod, String), VecDeque<Reply>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[allow(dead_code)]
impl FakeTransport {
    /// Creates a transport with no routes. Unrouted requests get a JSON 404.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response for a route.
    pub fn respond_json(&self, method: HttpMethod, path: &str, status: u16, body: JsonValue) {
        self.push(
            method,
            path,
            Ok(HttpResponse {
                status,
                content_type: Some("application/json".to_string()),
                body: body.to_string(),
            }),
        );
    }

    /// Queues a plain-text response for a route.
    pub fn respond_text(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.push(
            method,
            path,
            Ok(HttpResponse {
                status,
                content_type: Some("text/plain".to_string()),
                body: body.to_string(),
            }),
        );
    }

    /// Queues a transport failure for a route.
    pub fn fail(&self, method: HttpMethod, path: &str, error: ApiError) {
        self.push(method, path, Err(error));
    }

    /// Every request sent so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Requests sent to one route.
    #[must_use]
    pub fn requests_to(&self, method: HttpMethod, path: &str) -> Vec<HttpRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    fn push(&self, method: HttpMethod, path: &str, reply: Reply) {
        lock(&self.routes)
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    fn next_reply(&self, method: HttpMethod, path: &str) -> Reply {
        let mut routes = lock(&self.routes);
        let Some(queue) = routes.get_mut(&(method, path.to_string())) else {
            return Ok(HttpResponse {
                status: 404,
                content_type: Some("application/json".to_string()),
                body: format!(r#"{{"detail":"No fake route for {method} {path}"}}"#),
            });
        };

        if queue.len() > 1 {
            queue.pop_front().unwrap_or_else(|| unreachable_reply(method, path))
        } else {
            queue.front().cloned().unwrap_or_else(|| unreachable_reply(method, path))
        }
    }
}

fn unreachable_reply(method: HttpMethod, path: &str) -> Reply {
    Err(ApiError::Network(format!("fake route {method} {path} has no replies")))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let reply = self.next_reply(request.method, &request.path);
        lock(&self.requests).push(request);
        reply
    }
}
