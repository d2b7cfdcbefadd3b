//! Per-resource fetch state with request fencing.
//!
//! Each remote resource (categories, recipe list, recipe detail, ratings, and
//! the pending rating submission) is a [`Resource`] that moves through
//! `Idle -> Loading -> {Ready, Failed}`. Starting a request records its
//! [`RequestTicket`]; a completion carrying any other ticket is stale and is
//! not applied.

use crate::domain::ApiError;
use crate::worker::RequestTicket;

/// Lifecycle state of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Loading, error and data state of one remote resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    status: ResourceStatus,
    data: Option<T>,
    error: String,
    ticket: Option<RequestTicket>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            status: ResourceStatus::Idle,
            data: None,
            error: String::new(),
            ticket: None,
        }
    }
}

impl<T> Resource<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new request as the latest one for this resource.
    ///
    /// Clears the error but keeps previous data until the request completes.
    pub fn begin(&mut self, ticket: RequestTicket) {
        self.status = ResourceStatus::Loading;
        self.error.clear();
        self.ticket = Some(ticket);
    }

    /// Whether `ticket` belongs to the latest request.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.ticket == Some(ticket)
    }

    /// Applies a completed request if it is still the latest one.
    ///
    /// Returns `false` (and changes nothing) for stale completions. On failure
    /// the previous data is kept and the error message is recorded.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error.clear();
                self.status = ResourceStatus::Ready;
            }
            Err(error) => {
                self.error = error.message();
                self.status = ResourceStatus::Failed;
            }
        }
        true
    }

    /// Records a failure that never reached the network.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.status = ResourceStatus::Failed;
        self.ticket = None;
    }

    /// Resets to `Idle`, dropping data, error and the current ticket.
    ///
    /// Completions of requests issued before the reset become stale.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drops the data while keeping status and error.
    pub fn clear_data(&mut self) {
        self.data = None;
    }

    #[must_use]
    pub const fn status(&self) -> ResourceStatus {
        self.status
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error message of the last failure, empty when there is none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == ResourceStatus::Loading
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_completion_moves_to_ready() {
        let mut resource = Resource::new();
        resource.begin(RequestTicket(1));
        assert!(resource.is_loading());

        assert!(resource.complete(RequestTicket(1), Ok(vec![1, 2, 3])));
        assert_eq!(resource.status(), ResourceStatus::Ready);
        assert_eq!(resource.data(), Some(&vec![1, 2, 3]));
        assert_eq!(resource.error(), "");
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut resource = Resource::new();
        resource.begin(RequestTicket(1));
        resource.begin(RequestTicket(2));

        assert!(!resource.complete(RequestTicket(1), Ok("page 1")));
        assert!(resource.is_loading());
        assert_eq!(resource.data(), None);

        assert!(resource.complete(RequestTicket(2), Ok("page 2")));
        assert_eq!(resource.data(), Some(&"page 2"));
    }

    #[test]
    fn failure_keeps_previous_data() {
        let mut resource = Resource::new();
        resource.begin(RequestTicket(1));
        resource.complete(RequestTicket(1), Ok("old"));

        resource.begin(RequestTicket(2));
        assert_eq!(resource.error(), "");
        resource.complete(RequestTicket(2), Err(ApiError::Network("connection refused".into())));

        assert_eq!(resource.status(), ResourceStatus::Failed);
        assert_eq!(resource.data(), Some(&"old"));
        assert_eq!(resource.error(), "Network error: connection refused");
    }

    #[test]
    fn clear_fences_out_in_flight_request() {
        let mut resource: Resource<&str> = Resource::new();
        resource.begin(RequestTicket(5));
        resource.clear();

        assert!(!resource.complete(RequestTicket(5), Ok("late")));
        assert_eq!(resource.status(), ResourceStatus::Idle);
        assert_eq!(resource.data(), None);
    }

    #[test]
    fn reject_records_error_without_ticket() {
        let mut resource: Resource<()> = Resource::new();
        resource.reject("Please enter your name.");
        assert!(resource.has_error());
        assert_eq!(resource.status(), ResourceStatus::Failed);
    }
}
