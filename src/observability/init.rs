//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Events are formatted without ANSI colors and appended to the configured
/// log file, or `recipe-explorer.log` in the data directory when none is set.
///
/// # Parameters
///
/// * `config` - Configuration supplying `trace_level` and `log_file`
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if it is set and parses
/// 2. `config.trace_level`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if that fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use recipe_explorer::observability::init_tracing;
/// use recipe_explorer::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     log_file: Some(std::env::temp_dir().join("recipe-explorer-doctest.log")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let log_file = config.log_file_path();

    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.trace_level));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
