//! Theme systems
//!
//! Recolor the clear color, floor, text, and buttons whenever the theme or
//! the dice count selection changes.

use bevy::prelude::*;

use crate::dice3d::types::*;

/// Apply the active theme to the scene and the UI overlay
pub fn apply_theme(
    theme: Res<Theme>,
    settings_state: Res<SettingsState>,
    mut clear_color: ResMut<ClearColor>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    floor_query: Query<&MeshMaterial3d<StandardMaterial>, With<FloorSurface>>,
    mut text_colors: Query<&mut TextColor>,
    mut theme_labels: Query<&mut Text, With<ThemeButtonLabel>>,
) {
    if !theme.is_changed() {
        return;
    }

    let palette = theme.palette(&settings_state.settings);
    clear_color.0 = palette.background;

    for material_handle in floor_query.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = palette.floor;
        }
    }

    for mut color in text_colors.iter_mut() {
        color.0 = palette.text;
    }

    for mut label in theme_labels.iter_mut() {
        label.0 = theme.switch_label().to_string();
    }

    info!("Theme set to {}", theme.name());
}

/// Color buttons, highlighting the selected dice count
pub fn update_button_colors(
    theme: Res<Theme>,
    dice_count: Res<DiceCount>,
    settings_state: Res<SettingsState>,
    mut buttons: Query<(&mut BackgroundColor, Option<&DiceCountButton>), With<Button>>,
) {
    if !theme.is_changed() && !dice_count.is_changed() {
        return;
    }

    let palette = theme.palette(&settings_state.settings);
    for (mut background, count_button) in buttons.iter_mut() {
        let active = count_button.is_some_and(|b| b.0 == *dice_count);
        background.0 = if active {
            palette.button_active
        } else {
            palette.button
        };
    }
}
