//! Background execution of API requests.
//!
//! The event loop posts [`WorkerMessage`]s; [`ApiWorker`] runs each on a tokio
//! task against the [`ApiClient`](crate::api::ApiClient) and sends back a
//! [`WorkerResponse`] tagged with the originating [`RequestTicket`].
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types and tickets
//! - `handler`: Worker implementation and message processing

pub mod handler;
pub mod messages;

pub use handler::ApiWorker;
pub use messages::{RequestTicket, WorkerMessage, WorkerResponse};
