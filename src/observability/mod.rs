//! Structured logging to a size-rotated file.
//!
//! The shell owns the terminal, so log output never goes to stdout or
//! stderr. Events emitted with `tracing` macros are formatted by a
//! `tracing-subscriber` fmt layer and appended to a log file that rotates at
//! 10 MB, keeping three backups.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → recipe-explorer.log
//! ```
//!
//! # Configuration
//!
//! The level filter is resolved in this order:
//! 1. `RUST_LOG` environment variable
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
