//! Plugins wiring the dice toss into a Bevy app
//!
//! [`DicePhysicsPlugin`] is the part that works without a window: throw,
//! settle poll, face readout. [`DiceScenePlugin`] adds everything the player
//! sees and touches. Neither adds Rapier itself; the app picks its Rapier
//! setup (debug render, fixed timestep) before adding these.

use bevy::prelude::*;

use super::config::DiceTossConfig;
use super::systems::*;
use super::throw_control::DiceRng;
use super::types::*;

pub struct DicePhysicsPlugin;

impl Plugin for DicePhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DiceTossConfig>()
            .init_resource::<DiceCount>()
            .init_resource::<DiceRng>()
            .init_resource::<RollState>()
            .init_resource::<DiceResults>()
            .add_message::<ThrowDiceRequest>()
            .add_message::<DiceRollCompleted>()
            .add_systems(Startup, spawn_floor_body)
            .add_systems(
                Update,
                (
                    configure_physics_world,
                    (throw_dice, check_dice_settled).chain(),
                ),
            );
    }
}

pub struct DiceScenePlugin;

impl Plugin for DiceScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Theme>()
            .init_resource::<SettingsState>()
            .init_resource::<ClearColor>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    (handle_keyboard_input, handle_button_clicks).before(throw_dice),
                    (apply_theme, update_button_colors)
                        .after(handle_keyboard_input)
                        .after(handle_button_clicks),
                    update_results_display.after(check_dice_settled),
                    sync_settings_from_state
                        .after(handle_keyboard_input)
                        .after(handle_button_clicks),
                ),
            )
            .add_systems(PostUpdate, persist_settings);
    }
}
