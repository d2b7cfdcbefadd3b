//! Terminal user interface.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI frame
//! stdin line → parse_command → Event
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model computed from state
//! - [`renderer`]: Frame rendering entry points
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Text measuring and fitting utilities
//! - [`input`]: Command parsing
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod input;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use input::{parse_command, CommandError, COMMANDS};
pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{compute_viewmodel, PaneState, UIViewModel};
