//! Tests for settings persistence through the public API

use dicetoss::dice3d::{AppSettings, ColorSetting, Theme};

#[test]
fn test_settings_file_format() {
    let settings = AppSettings {
        dice_count: 2,
        theme: Theme::Dark,
        light_background: ColorSetting::rgb(1.0, 1.0, 1.0),
        dark_background: ColorSetting::rgb(0.0, 0.0, 0.0),
    };
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["dice_count"], 2);
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["light_background"], "#FFFFFF");
    assert_eq!(json["dark_background"], "#000000");
}

#[test]
fn test_empty_settings_file_uses_defaults() {
    let settings: AppSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, AppSettings::default());
}
