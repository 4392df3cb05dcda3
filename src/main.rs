// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use clap::Parser;

use dicetoss::dice3d::{
    DiceCount, DicePhysicsPlugin, DiceScenePlugin, SettingsState, Theme, DEFAULT_SETTINGS_FILE,
};

/// Dice - toss physics dice and read the faces
#[derive(Parser, Debug)]
#[command(name = "dicetoss")]
#[command(author, version, about = "Dice - toss physics dice and read the faces")]
struct Cli {
    /// Number of dice per throw (1 or 2); overrides the saved setting
    #[arg(short, long, value_parser = DiceCount::parse)]
    dice: Option<DiceCount>,

    /// Color theme (light or dark); overrides the saved setting
    #[arg(short, long, value_parser = Theme::parse)]
    theme: Option<Theme>,

    /// Path to the settings JSON file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Draw Rapier collider outlines
    #[arg(long)]
    debug_physics: bool,
}

fn main() {
    let cli = Cli::parse();

    let settings_state = SettingsState::load_from(cli.settings.clone());
    let dice_count = cli
        .dice
        .unwrap_or_else(|| settings_state.settings.dice_count());
    let theme = cli.theme.unwrap_or(settings_state.settings.theme);

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Dice".to_string(),
                    resolution: (1280u32, 720u32).into(),
                    ..default()
                }),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                filter: "info,wgpu=error,naga=warn".to_string(),
                ..default()
            }),
    )
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default());

    if cli.debug_physics {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }

    app.insert_resource(settings_state)
        .insert_resource(dice_count)
        .insert_resource(theme)
        .add_plugins((DicePhysicsPlugin, DiceScenePlugin))
        .run();
}
