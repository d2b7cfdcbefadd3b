//! Platform directory resolution.
//!
//! Directories come from the `dirs` crate, so they follow each platform's
//! conventions (`~/.local/share` and `~/.config` on Linux, `~/Library/...` on
//! macOS). When the platform reports nothing, the current directory is used.

use std::path::PathBuf;

const APP_DIR: &str = "recipe-explorer";

/// Returns the directory holding the explorer's log files.
///
/// Typically `~/.local/share/recipe-explorer` on Linux.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the directory holding the explorer's configuration.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default configuration file location, `<config dir>/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use recipe_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/recipes.toml"), std::path::PathBuf::from("/etc/recipes.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };
    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
