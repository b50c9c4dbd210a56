//! Color theme and styling definitions using ratatui colors
//!
//! Themes are selected by name from the command line or the config file.

use crate::error::{ClockError, Result};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Named theme selection as it appears in config and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

impl FromStr for ThemeName {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(ThemeName::Default),
            "monochrome" | "mono" => Ok(ThemeName::Monochrome),
            "high-contrast" | "high_contrast" => Ok(ThemeName::HighContrast),
            other => Err(ClockError::invalid_argument(format!(
                "unknown theme '{}' (expected default, monochrome or high-contrast)",
                other
            ))),
        }
    }
}

/// Color theme for the clock face
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Hour, minute and second digits
    pub digits: Style,

    /// AM/PM marker
    pub meridiem: Style,

    /// Long date line
    pub date: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            digits: Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            meridiem: Style::default().fg(Color::Cyan),
            date: Style::default().fg(Color::Gray),
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            digits: Style::default().add_modifier(Modifier::BOLD),
            meridiem: Style::default(),
            date: Style::default(),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            digits: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            meridiem: Style::default().fg(Color::LightYellow),
            date: Style::default().fg(Color::White),
            status_bg: Color::White,
            status_fg: Color::Black,
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }
}
