//! Theme types for Claude Keywords configuration.
//!
//! Responsibilities:
//! - Define user-selectable colour themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all colour values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//! - Theme persistence (see `persistence`, which persists `ColorTheme`).
//!
//! Invariants:
//! - `Theme` is intentionally NOT serializable; always persist `ColorTheme`.
//! - Colours are semantically named (error/success/info) for consistent usage.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::loader::ConfigError;

/// User-selectable colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle (TUI "t" key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "high_contrast" => Ok(Self::HighContrast),
            "monochrome" => Ok(Self::Monochrome),
            _ => Err(ConfigError::InvalidValue {
                var: "theme".to_string(),
                message: format!(
                    "unknown theme '{s}' (expected default, light, high_contrast or monochrome)"
                ),
            }),
        }
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Persist `ColorTheme` and expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Cursor row
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub error: Color,
    pub info: Color,

    // Selection markers
    pub selected: Color,
    pub unselected: Color,

    /// Draw category glyphs in their own tint colour.
    pub category_tints: bool,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,

                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,

                success: Color::Green,
                error: Color::Red,
                info: Color::Cyan,

                selected: Color::Green,
                unselected: Color::DarkGray,

                category_tints: true,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                success: Color::Green,
                error: Color::Red,
                info: Color::Blue,

                selected: Color::Blue,
                unselected: Color::Gray,

                category_tints: true,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::Yellow,
                accent: Color::Yellow,

                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,

                success: Color::LightGreen,
                error: Color::LightRed,
                info: Color::LightCyan,

                selected: Color::LightGreen,
                unselected: Color::White,

                category_tints: false,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Reset,
                text: Color::Reset,
                text_dim: Color::Reset,
                border: Color::Reset,
                title: Color::Reset,
                accent: Color::Reset,

                highlight_fg: Color::Reset,
                highlight_bg: Color::Reset,

                success: Color::Reset,
                error: Color::Reset,
                info: Color::Reset,

                selected: Color::Reset,
                unselected: Color::Reset,

                category_tints: false,
            },
        }
    }

    /// Colour for a category glyph given its `(r, g, b)` tint.
    pub fn category_color(&self, rgb: (u8, u8, u8)) -> Color {
        if self.category_tints {
            Color::Rgb(rgb.0, rgb.1, rgb.2)
        } else {
            self.text
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
