//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the runtime (`main.rs`) and the worker/domain
//! layers. All state transitions go through [`handle_event`].
//!
//! # Architecture
//!
//! ```text
//! Command / Tick → Event → handle_event → AppState mutation → Actions
//!                             ↑                                  ↓
//!                             └──── WorkerResponse (ticketed) ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Clock-driven debouncing of the search text
//! - [`filter`]: Category versus ingredient-search filter state
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Presentation toggles
//! - [`rating`]: Rating form and validation
//! - [`resource`]: Per-resource loading/error/data state with request fencing
//! - [`state`]: Central application state and derived labels

pub mod actions;
pub mod debounce;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod rating;
pub mod resource;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use filter::FilterState;
pub use handler::{handle_event, Event};
pub use modes::LayoutMode;
pub use rating::RatingForm;
pub use resource::{Resource, ResourceStatus};
pub use state::{AppState, ListRequest};
