//! Theme management and color conversion.
//!
//! A [`Theme`] is an immutable value owned by [`AppState`](crate::app::AppState)
//! and handed to every renderer. It is loaded either from a built-in theme
//! embedded in the binary or from a custom TOML file.
//!
//! # Built-in Themes
//!
//! - `bubblegum`: pink accents, red errors, green success (default)
//! - `catppuccin-mocha`: dark theme with warm tones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#fffdf5"
//! title_bg = "#25a065"
//! selection_fg = "#ee6ff8"
//! text_normal = "#dddddd"
//! text_dim = "#777777"
//! filter_prompt = "#ecfd65"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! spinner = "#ff5fd7"
//! success = "#00ff00"
//! error = "#ff0000"
//!
//! [layout]
//! margin_horizontal = 2
//! margin_vertical = 1
//! ```
//!
//! The `[layout]` table is optional.

use crate::domain::{GhclonerError, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "bubblegum";

/// Color scheme and frame margins for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,

    pub colors: ThemeColors,

    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub title_fg: String,
    #[serde(default)]
    pub title_bg: Option<String>,

    /// Name and bar of the selected item.
    pub selection_fg: String,

    pub text_normal: String,
    /// Clone URLs, counts, hints and the footer.
    pub text_dim: String,

    /// The `/` prompt of the filter bar.
    pub filter_prompt: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub spinner: String,
    pub success: String,
    pub error: String,
}

/// Blank space kept between the terminal edge and the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Columns left blank on each side.
    #[serde(default = "default_margin_horizontal")]
    pub margin_horizontal: u16,

    /// Rows left blank above and below.
    #[serde(default = "default_margin_vertical")]
    pub margin_vertical: u16,
}

const fn default_margin_horizontal() -> u16 {
    2
}

const fn default_margin_vertical() -> u16 {
    1
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_horizontal: default_margin_horizontal(),
            margin_vertical: default_margin_vertical(),
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not a built-in theme.
    ///
    /// # Example
    ///
    /// ```
    /// use ghcloner::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "bubblegum" => include_str!("../../themes/bubblegum.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GhclonerError::Theme`] if the file cannot be read or its
    /// content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GhclonerError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| GhclonerError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to a terminal color.
    ///
    /// Accepts `"#rrggbb"` or `"rrggbb"`; anything else yields white.
    #[must_use]
    pub fn color(hex: &str) -> Color {
        let (r, g, b) = hex_to_rgb(hex);
        Color::Rgb(r, g, b)
    }
}

fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim().trim_start_matches('#');

    if hex.len() != 6 || !hex.is_ascii() {
        return (255, 255, 255);
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
    (channel(0..2), channel(2..4), channel(4..6))
}

impl Default for Theme {
    /// Returns the `bubblegum` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in bubblegum theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["bubblegum", "catppuccin-mocha"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn default_is_bubblegum_with_standard_margins() {
        let theme = Theme::default();
        assert_eq!(theme.name, DEFAULT_THEME);
        assert_eq!(theme.layout, LayoutConfig::default());
        assert_eq!(Theme::color(&theme.colors.error), Color::Rgb(0xff, 0, 0));
        assert_eq!(Theme::color(&theme.colors.success), Color::Rgb(0, 0xff, 0));
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::color("#12"), Color::Rgb(255, 255, 255));
        assert_eq!(Theme::color("zzzzzz"), Color::Rgb(255, 255, 255));
        assert_eq!(Theme::color("#ééé"), Color::Rgb(255, 255, 255));
        assert_eq!(Theme::color("cdd6f4"), Color::Rgb(0xcd, 0xd6, 0xf4));
    }

    #[test]
    fn from_file_defaults_missing_layout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let theme = toml::to_string(&Theme::from_name("catppuccin-mocha").unwrap()).unwrap();
        let without_layout = theme.split("[layout]").next().unwrap();
        file.write_all(without_layout.as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, "catppuccin-mocha");
        assert_eq!(loaded.layout, LayoutConfig::default());
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, GhclonerError::Theme(_)));
        assert!(Theme::from_file("/nonexistent/theme.toml").is_err());
    }
}
