//! Recipe Explorer: a terminal client for a recipe catalog backend.
//!
//! The explorer provides:
//! - Category browsing and paged recipe lists
//! - Debounced ingredient search
//! - Recipe detail with ingredients, instructions and ratings
//! - Star rating submission with client-side validation
//! - Loading, error-with-retry and empty states for every request

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal shell (main.rs)                           │  ← tokio event loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, request fencing                  │
//! │  - Search debounce, rating form                     │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Worker Layer  │
//! │ (ui/)         │                     │ (worker/)     │
//! │ - View model  │                     │ - Ticketed    │
//! │ - Components  │                     │   requests    │
//! │ - Commands    │                     └───────────────┘
//! └───────────────┘                             │
//!                                       ┌───────────────┐
//!                                       │ API Layer     │
//!                                       │ (api/)        │
//!                                       │ - Transport   │
//!                                       │ - Client      │
//!                                       └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Recipes, ratings, filters, errors (domain/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing to a rotating log file                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: HTTP transport and typed backend client
//! - [`domain`]: Core domain types (recipes, ratings, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background execution of API requests
//! - [`ui`]: Terminal rendering, theming and command parsing
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Settings come from `~/.config/recipe-explorer/config.toml`, overridden by
//! `RECIPE_*` environment variables:
//!
//! ```toml
//! api_base_url = "http://localhost:3001"
//! page_size = 12
//! search_debounce_ms = 250
//! request_timeout_secs = 10
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Mount)?;
//! for action in actions {
//!     match action {
//!         Action::PostToWorker(message) => println!("request {}", message.ticket()),
//!         Action::Quit => break,
//!     }
//! }
//! # Ok::<(), recipe_explorer::ExplorerError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{ApiError, ExplorerError, Result};
pub use ui::Theme;

use api::ApiConfig;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix of the environment variables read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "RECIPE_";

/// Explorer configuration.
///
/// Every source (TOML file, environment, plain map) funnels through
/// [`Config::apply_map`], so each key is parsed the same way everywhere and a
/// malformed value keeps the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL. Default: `http://localhost:3001`
    pub api_base_url: String,

    /// Recipes per page. Default: 12
    pub page_size: u32,

    /// Quiet period before search text takes effect. Default: 250
    pub search_debounce_ms: u64,

    /// Per-request timeout; `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Level filter for logging. Default: `"info"`
    pub trace_level: String,

    /// Log file; `None` means `<data dir>/recipe-explorer.log`.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_BASE_URL.to_string(),
            page_size: 12,
            search_debounce_ms: 250,
            request_timeout_secs: None,
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            log_file: None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl Config {
    /// Builds a configuration from a key/value map on top of the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use recipe_explorer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "24".to_string());
    /// map.insert("search_debounce_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 24);
    /// assert_eq!(config.search_debounce_ms, 250);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();
        config.apply_map(map);
        config
    }

    /// Overwrites fields with the values present in `map`.
    ///
    /// # Parsing Rules
    ///
    /// - `api_base_url`: ignored when blank
    /// - `page_size`: positive integer, otherwise ignored
    /// - `search_debounce_ms`: integer, otherwise ignored
    /// - `request_timeout_secs`: integer; `0` or blank disables the timeout
    /// - `theme`, `theme_file`, `log_file`: blank clears
    /// - `trace_level`: ignored when blank
    ///
    /// Unknown keys are ignored.
    pub fn apply_map(&mut self, map: &BTreeMap<String, String>) {
        if let Some(url) = map.get("api_base_url").and_then(|s| non_empty(s)) {
            self.api_base_url = url;
        }
        if let Some(size) = map
            .get("page_size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|size| *size > 0)
        {
            self.page_size = size;
        }
        if let Some(ms) = map
            .get("search_debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            self.search_debounce_ms = ms;
        }
        if let Some(raw) = map.get("request_timeout_secs") {
            let raw = raw.trim();
            if raw.is_empty() {
                self.request_timeout_secs = None;
            } else if let Ok(secs) = raw.parse::<u64>() {
                self.request_timeout_secs = (secs > 0).then_some(secs);
            }
        }
        if let Some(name) = map.get("theme") {
            self.theme_name = non_empty(name);
        }
        if let Some(file) = map.get("theme_file") {
            self.theme_file = non_empty(file);
        }
        if let Some(level) = map.get("trace_level").and_then(|s| non_empty(s)) {
            self.trace_level = level;
        }
        if let Some(file) = map.get("log_file") {
            self.log_file = non_empty(file).map(|f| infrastructure::expand_tilde(&f));
        }
    }

    /// Collects `RECIPE_*` variables as config keys.
    ///
    /// `RECIPE_PAGE_SIZE` becomes `page_size`, and so on.
    #[must_use]
    pub fn env_overrides() -> BTreeMap<String, String> {
        Self::overrides_from(std::env::vars())
    }

    fn overrides_from(vars: impl IntoIterator<Item = (String, String)>) -> BTreeMap<String, String> {
        vars.into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_lowercase(), value))
            })
            .collect()
    }

    /// Builds a configuration from `RECIPE_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_map(&Self::env_overrides())
    }

    /// Loads a TOML configuration file.
    ///
    /// Scalar values of any type are accepted (`page_size = 12` and
    /// `page_size = "12"` are equivalent).
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the file cannot be read or is not
    /// a TOML table.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExplorerError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let table: toml::Table = toml::from_str(&contents)
            .map_err(|e| ExplorerError::Config(format!("Failed to parse config TOML: {e}")))?;

        let map = table
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    other => {
                        tracing::warn!(key = %key, value = %other, "ignoring non-scalar config value");
                        return None;
                    }
                };
                Some((key, value))
            })
            .collect();

        Ok(Self::from_map(&map))
    }

    /// Returns a copy with the values in `overrides` applied.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        self.apply_map(overrides);
        self
    }

    /// Connection settings for the API client.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_base_url.as_str())
            .with_timeout(self.request_timeout_secs.map(Duration::from_secs))
    }

    /// Debounce delay as a [`Duration`].
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Resolved log file path.
    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| infrastructure::get_data_dir().join("recipe-explorer.log"))
    }
}

/// Creates the initial application state.
///
/// The theme comes from `theme_file`, then `theme_name`, then the default.
/// A theme that fails to load is logged and replaced by the default, so
/// startup never fails on cosmetics.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::{initialize, Config};
///
/// let config = Config {
///     page_size: 6,
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.page_size, 6);
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, page_size = config.page_size, "initializing recipe explorer");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.page_size, config.search_debounce(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_match_backend_conventions() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.trace_level, "info");
        assert!(config.log_file_path().ends_with("recipe-explorer/recipe-explorer.log"));
    }

    #[test]
    fn from_map_falls_back_per_key() {
        let config = Config::from_map(&map(&[
            ("api_base_url", "http://recipes.test/"),
            ("page_size", "0"),
            ("search_debounce_ms", "100"),
            ("request_timeout_secs", "abc"),
            ("theme", "catppuccin-latte"),
        ]));

        assert_eq!(config.api_base_url, "http://recipes.test/");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.search_debounce_ms, 100);
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.api_config().base_url, "http://recipes.test");
    }

    #[test]
    fn timeout_zero_disables() {
        let config = Config::from_map(&map(&[("request_timeout_secs", "0")]));
        assert_eq!(config.api_config().request_timeout, None);

        let config = Config::from_map(&map(&[("request_timeout_secs", "5")]));
        assert_eq!(config.api_config().request_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn env_prefix_is_stripped_and_lowercased() {
        let vars = vec![
            ("RECIPE_PAGE_SIZE".to_string(), "30".to_string()),
            ("RECIPE_TRACE_LEVEL".to_string(), "debug".to_string()),
            ("PATH".to_string(), "/bin".to_string()),
        ];
        let overrides = Config::overrides_from(vars);
        assert_eq!(overrides, map(&[("page_size", "30"), ("trace_level", "debug")]));
    }

    #[test]
    fn from_env_reads_prefixed_variables() {
        std::env::set_var("RECIPE_SEARCH_DEBOUNCE_MS", "125");
        let config = Config::from_env();
        std::env::remove_var("RECIPE_SEARCH_DEBOUNCE_MS");

        assert_eq!(config.search_debounce(), Duration::from_millis(125));
    }

    #[test]
    fn file_values_are_overridden() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_base_url = \"http://file.test\"\npage_size = 8\nsearch_debounce_ms = \"400\"\ntags = [\"x\"]"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://file.test");
        assert_eq!(config.page_size, 8);
        assert_eq!(config.search_debounce(), Duration::from_millis(400));

        let config = config.with_overrides(&map(&[("page_size", "20")]));
        assert_eq!(config.page_size, 20);
        assert_eq!(config.api_base_url, "http://file.test");
    }

    #[test]
    fn bad_config_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = ").unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(ExplorerError::Config(_))));
        assert!(matches!(
            Config::from_file("/nonexistent/recipe-explorer.toml"),
            Err(ExplorerError::Config(_))
        ));
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme, Theme::default());
        assert_eq!(state.page_size, 12);
    }
}
