//! Systems module for dice3d
//!
//! This module contains all the Bevy systems for the dice toss, organized
//! into submodules by functionality:
//!
//! - `physics`: Floor body and world gravity
//! - `dice`: Throw handling, settle detection, and face readout
//! - `setup`: Scene initialization (camera, lights, floor surface, UI)
//! - `input`: Keyboard and button handling
//! - `results`: Results panel text
//! - `theme`: Light/dark theme and selector highlighting
//! - `settings`: Settings persistence

mod dice;
mod input;
mod physics;
mod results;
mod settings;
mod setup;
mod theme;

// Re-export all public systems
pub use dice::{
    check_dice_settled, determine_die_value, is_die_settled, spawn_die, throw_dice, DiceAssets,
};
pub use input::{handle_button_clicks, handle_keyboard_input};
pub use physics::{configure_physics_world, spawn_floor_body, FloorBody};
pub use results::{format_results_panel, update_results_display, IDLE_PROMPT};
pub use settings::{persist_settings, sync_settings_from_state};
pub use setup::setup_scene;
pub use theme::{apply_theme, update_button_colors};
