//! Settings persistence systems

use bevy::prelude::*;

use crate::dice3d::types::*;

/// Mirror the live dice count and theme into the settings
pub fn sync_settings_from_state(
    dice_count: Res<DiceCount>,
    theme: Res<Theme>,
    mut settings_state: ResMut<SettingsState>,
) {
    if !dice_count.is_changed() && !theme.is_changed() {
        return;
    }

    let settings = &settings_state.settings;
    if settings.dice_count == dice_count.get() && settings.theme == *theme {
        return;
    }

    settings_state.settings.dice_count = dice_count.get();
    settings_state.settings.theme = *theme;
    settings_state.is_modified = true;
}

/// Write modified settings to disk
pub fn persist_settings(mut settings_state: ResMut<SettingsState>) {
    if !settings_state.is_modified {
        return;
    }
    settings_state.is_modified = false;

    let Some(path) = settings_state.path.as_deref() else {
        return;
    };
    match settings_state.settings.save(path) {
        Ok(()) => debug!("Saved settings to {}", path.display()),
        Err(e) => warn!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_app() -> App {
        let mut app = App::new();
        app.init_resource::<DiceCount>()
            .init_resource::<Theme>()
            .init_resource::<SettingsState>()
            .add_systems(Update, (sync_settings_from_state, persist_settings).chain());
        app
    }

    #[test]
    fn test_unchanged_preferences_are_not_marked() {
        let mut app = settings_app();
        app.update();
        let state = app.world().resource::<SettingsState>();
        assert_eq!(state.settings, AppSettings::default());
    }

    #[test]
    fn test_changed_theme_is_recorded() {
        let mut app = settings_app();
        app.update();
        *app.world_mut().resource_mut::<Theme>() = Theme::Dark;
        app.world_mut()
            .insert_resource(DiceCount::new(2).unwrap());
        app.update();

        let state = app.world().resource::<SettingsState>();
        assert_eq!(state.settings.theme, Theme::Dark);
        assert_eq!(state.settings.dice_count, 2);
        // Without a path the change stays in memory
        assert!(!state.is_modified);
    }

    #[test]
    fn test_modified_settings_are_written() {
        let path = std::env::temp_dir().join(format!(
            "dicetoss_persist_{}.json",
            std::process::id()
        ));
        let mut app = settings_app();
        app.insert_resource(SettingsState {
            settings: AppSettings::default(),
            path: Some(path.clone()),
            is_modified: false,
        });
        app.insert_resource(Theme::Dark);
        app.update();

        let saved = AppSettings::try_load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(saved.unwrap().map(|s| s.theme), Some(Theme::Dark));
    }
}
