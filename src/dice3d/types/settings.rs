//! Application settings types and persistence
//!
//! This module handles loading and saving application settings. Settings are
//! stored as a small JSON file; a missing or broken file falls back to the
//! defaults so the game always starts.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::log::{info, warn};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::dice::DiceCount;
use super::ui::Theme;

/// Default location of the settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "dicetoss_settings.json";

/// Color stored as `#RRGGBB` or `#AARRGGBB` in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorSetting {
    pub a: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorSetting {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { a: 1.0, r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::srgba(self.r, self.g, self.b, self.a)
    }

    pub fn from_color(color: Color) -> Self {
        let srgba = color.to_srgba();
        Self {
            a: srgba.alpha,
            r: srgba.red,
            g: srgba.green,
            b: srgba.blue,
        }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| -> Option<f32> {
            u8::from_str_radix(hex.get(i..i + 2)?, 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };

        match hex.len() {
            6 => Some(Self {
                a: 1.0,
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            }),
            8 => Some(Self {
                a: channel(0)?,
                r: channel(2)?,
                g: channel(4)?,
                b: channel(6)?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if byte(self.a) == 255 {
            format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(self.a),
                byte(self.r),
                byte(self.g),
                byte(self.b)
            )
        }
    }
}

impl TryFrom<String> for ColorSetting {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value).ok_or_else(|| format!("Invalid color: {}", value))
    }
}

impl From<ColorSetting> for String {
    fn from(color: ColorSetting) -> Self {
        color.to_hex()
    }
}

fn default_dice_count() -> u8 {
    DiceCount::default().get()
}

fn default_light_background() -> ColorSetting {
    ColorSetting::rgb(0.95, 0.95, 0.96)
}

fn default_dark_background() -> ColorSetting {
    // Slightly off-black by default.
    ColorSetting::rgb(0.07, 0.07, 0.08)
}

/// Persistent user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_dice_count")]
    pub dice_count: u8,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_light_background")]
    pub light_background: ColorSetting,

    #[serde(default = "default_dark_background")]
    pub dark_background: ColorSetting,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dice_count: default_dice_count(),
            theme: Theme::default(),
            light_background: default_light_background(),
            dark_background: default_dark_background(),
        }
    }
}

impl AppSettings {
    /// Read settings from `path`. `Ok(None)` means there is no file yet.
    pub fn try_load(path: &Path) -> Result<Option<Self>, String> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        Ok(Some(settings))
    }

    /// Load settings from `path`, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(settings)) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    /// Stored dice count, or the default when the file holds an invalid one
    pub fn dice_count(&self) -> DiceCount {
        DiceCount::new(self.dice_count).unwrap_or_else(|e| {
            warn!("{}; using {}", e, DiceCount::default().get());
            DiceCount::default()
        })
    }
}

/// Resource for runtime settings state
#[derive(Resource, Debug, Default)]
pub struct SettingsState {
    pub settings: AppSettings,
    /// Where settings are written; `None` keeps them in memory only
    pub path: Option<PathBuf>,
    pub is_modified: bool,
}

impl SettingsState {
    pub fn load_from(path: PathBuf) -> Self {
        Self {
            settings: AppSettings::load(&path),
            path: Some(path),
            is_modified: false,
        }
    }
}
