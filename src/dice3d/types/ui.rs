//! UI-related types and components
//!
//! This module contains the theme, its palette, and the marker components for
//! the throw button, the dice count selector, the theme switcher, and the
//! results text.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::dice::DiceCount;
use super::settings::AppSettings;

// ============================================================================
// Theme
// ============================================================================

/// Light or dark look of the table and the UI overlay
#[derive(
    Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Result<Theme, String> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}. Valid: light, dark", other)),
        }
    }

    /// Label for the switcher button: it names the theme a click switches to.
    pub fn switch_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }

    pub fn palette(&self, settings: &AppSettings) -> ThemePalette {
        match self {
            Theme::Light => ThemePalette {
                background: settings.light_background.to_color(),
                floor: Color::srgb(0.86, 0.86, 0.88),
                text: Color::srgb(0.13, 0.13, 0.15),
                button: Color::srgb(0.80, 0.80, 0.84),
                button_active: Color::srgb(0.29, 0.56, 0.89),
            },
            Theme::Dark => ThemePalette {
                background: settings.dark_background.to_color(),
                floor: Color::srgb(0.17, 0.17, 0.19),
                text: Color::srgb(0.93, 0.93, 0.93),
                button: Color::srgb(0.25, 0.25, 0.28),
                button_active: Color::srgb(0.29, 0.56, 0.89),
            },
        }
    }
}

/// Concrete colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub background: Color,
    pub floor: Color,
    pub text: Color,
    pub button: Color,
    pub button_active: Color,
}

// ============================================================================
// Markers
// ============================================================================

/// Marker component for the results text display
#[derive(Component)]
pub struct ResultsText;

/// Marker for the throw button
#[derive(Component)]
pub struct ThrowButton;

/// Selector button choosing how many dice the next throw spawns
#[derive(Component, Clone, Copy, Debug)]
pub struct DiceCountButton(pub DiceCount);

/// Marker for the theme switcher button
#[derive(Component)]
pub struct ThemeButton;

/// Marker for the text inside the theme switcher button
#[derive(Component)]
pub struct ThemeButtonLabel;

/// Marker for the visible floor surface (the collider lives elsewhere)
#[derive(Component)]
pub struct FloorSurface;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("light"), Ok(Theme::Light));
        assert_eq!(Theme::parse("DARK"), Ok(Theme::Dark));
        assert!(Theme::parse("sepia").is_err());
    }

    #[test]
    fn test_theme_palette_uses_settings_background() {
        let settings = AppSettings::default();
        let light = Theme::Light.palette(&settings);
        let dark = Theme::Dark.palette(&settings);
        assert_eq!(light.background, settings.light_background.to_color());
        assert_eq!(dark.background, settings.dark_background.to_color());
        assert_ne!(light.text, dark.text);
    }

    #[test]
    fn test_switch_label_names_other_theme() {
        assert_eq!(Theme::Light.switch_label(), "Dark mode");
        assert_eq!(Theme::Dark.switch_label(), "Light mode");
    }
}
