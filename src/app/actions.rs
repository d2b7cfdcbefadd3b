//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never performs I/O itself; it
//! returns a `Vec<Action>` that the runtime executes in order.

use crate::worker::WorkerMessage;

/// Commands executed by the runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends a request to the API worker.
    ///
    /// The response comes back as `Event::WorkerResponse`.
    PostToWorker(WorkerMessage),

    /// Leaves the event loop.
    Quit,
}
