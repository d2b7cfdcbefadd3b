//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in palettes (Catppuccin Mocha and Latte) are defined in code;
//! custom themes are loaded from TOML files.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! accent = "#f5c2e7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! rating_fg = "#f9e2af"
//! error_fg = "#f38ba8"
//! loading_fg = "#89dceb"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! let title = format!("{}{}Recipes{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
//! assert!(title.contains("Recipes"));
//! ```

use crate::domain::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Badges, active category, search prompt.
    pub accent: String,

    /// Highlight of the open recipe.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (descriptions, timestamps, footer).
    pub text_dim: String,

    pub border: String,

    /// Stars and rating pills.
    pub rating_fg: String,

    pub error_fg: String,
    pub loading_fg: String,
    pub empty_state_fg: String,
}

fn hex(value: &str) -> String {
    value.to_string()
}

impl Theme {
    fn catppuccin_mocha() -> Self {
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: hex("#cdd6f4"),
                header_bg: None,
                accent: hex("#f5c2e7"),
                selection_fg: hex("#1e1e2e"),
                selection_bg: hex("#f5c2e7"),
                text_normal: hex("#cdd6f4"),
                text_dim: hex("#6c7086"),
                border: hex("#45475a"),
                rating_fg: hex("#f9e2af"),
                error_fg: hex("#f38ba8"),
                loading_fg: hex("#89dceb"),
                empty_state_fg: hex("#89b4fa"),
            },
        }
    }

    fn catppuccin_latte() -> Self {
        Self {
            name: "catppuccin-latte".to_string(),
            colors: ThemeColors {
                header_fg: hex("#4c4f69"),
                header_bg: None,
                accent: hex("#ea76cb"),
                selection_fg: hex("#eff1f5"),
                selection_bg: hex("#ea76cb"),
                text_normal: hex("#4c4f69"),
                text_dim: hex("#9ca0b0"),
                border: hex("#bcc0cc"),
                rating_fg: hex("#df8e1d"),
                error_fg: hex("#d20f39"),
                loading_fg: hex("#04a5e5"),
                empty_state_fg: hex("#1e66f5"),
            },
        }
    }

    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "catppuccin-latte" => Some(Self::catppuccin_latte()),
            _ => None,
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Theme`] if the file cannot be read or its
    /// content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ExplorerError::Theme(format!("Failed to read theme file {}: {e}", path.display())))?;

        toml::from_str(&contents).map_err(|e| ExplorerError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple; white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}
