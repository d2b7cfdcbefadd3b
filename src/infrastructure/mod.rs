//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the explorer keeps its log and configuration files, and
//! expands `~` in user-supplied paths.

pub mod paths;

pub use paths::{config_file, expand_tilde, get_config_dir, get_data_dir};
