//! Headless dice toss
//!
//! Runs the physics plugin in an app with no window and no renderer, throws
//! once, and steps the simulation at a fixed 60 Hz until the dice settle.

use std::time::Duration;

use bevy::prelude::*;
use bevy::render::settings::WgpuSettings;
use bevy::render::RenderPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::ExitCondition;
use bevy::winit::WinitPlugin;
use bevy_rapier3d::prelude::*;

use super::config::DiceTossConfig;
use super::plugin::DicePhysicsPlugin;
use super::throw_control::DiceRng;
use super::types::*;

/// Simulation step, matching a 60 Hz display
pub const HEADLESS_STEP_SECS: f32 = 1.0 / 60.0;

/// Longest simulated wait a headless run accepts
pub const MAX_HEADLESS_SECONDS: f32 = 3600.0;

/// Frames simulated past the roll timeout before giving up
const TIMEOUT_GRACE_FRAMES: u32 = 30;

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub dice_count: DiceCount,
    /// Seed for the throw; `None` draws from entropy
    pub seed: Option<u64>,
    /// Simulated seconds to wait for the dice to settle
    pub max_seconds: f32,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            dice_count: DiceCount::default(),
            seed: None,
            max_seconds: DiceTossConfig::default().roll_timeout_secs,
        }
    }
}

impl HeadlessOptions {
    pub fn validate(&self) -> Result<(), String> {
        if !self.max_seconds.is_finite() || self.max_seconds <= 0.0 {
            return Err(format!(
                "max seconds must be a positive number, got {}",
                self.max_seconds
            ));
        }
        if self.max_seconds > MAX_HEADLESS_SECONDS {
            return Err(format!(
                "max seconds must be at most {}, got {}",
                MAX_HEADLESS_SECONDS, self.max_seconds
            ));
        }
        Ok(())
    }
}

/// Outcome of one headless toss
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessRoll {
    /// Face values in throw order
    pub values: Vec<u32>,
    /// True when the dice were read before they stopped moving
    pub timed_out: bool,
    pub simulated_secs: f32,
}

impl HeadlessRoll {
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }
}

#[derive(Resource, Default)]
struct CapturedRoll(Option<DiceRollCompleted>);

fn request_initial_throw(mut throw_requests: MessageWriter<ThrowDiceRequest>) {
    throw_requests.write(ThrowDiceRequest);
}

fn capture_roll(mut completed: MessageReader<DiceRollCompleted>, mut captured: ResMut<CapturedRoll>) {
    if let Some(roll) = completed.read().last() {
        captured.0 = Some(roll.clone());
    }
}

fn build_app(options: &HeadlessOptions) -> App {
    let rng = match options.seed {
        Some(seed) => DiceRng::seeded(seed),
        None => DiceRng::default(),
    };
    let config = DiceTossConfig {
        roll_timeout_secs: options.max_seconds,
        ..DiceTossConfig::default()
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: None,
                exit_condition: ExitCondition::DontExit,
                ..default()
            })
            .set(RenderPlugin {
                render_creation: WgpuSettings {
                    backends: None,
                    ..default()
                }
                .into(),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::WARN,
                filter: "warn,wgpu=error,naga=warn".to_string(),
                ..default()
            })
            .disable::<WinitPlugin>(),
    )
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        HEADLESS_STEP_SECS,
    )))
    .insert_resource(TimestepMode::Fixed {
        dt: HEADLESS_STEP_SECS,
        substeps: 1,
    })
    .insert_resource(config)
    .insert_resource(options.dice_count)
    .insert_resource(rng)
    .init_resource::<CapturedRoll>()
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
    .add_plugins(DicePhysicsPlugin)
    .add_systems(Startup, request_initial_throw)
    .add_systems(Update, capture_roll.after(super::systems::check_dice_settled));
    app
}

/// Throw the dice once without a window and wait for the result
pub fn run_headless(options: &HeadlessOptions) -> Result<HeadlessRoll, String> {
    options.validate()?;

    let mut app = build_app(options);
    app.finish();
    app.cleanup();

    let max_frames = ((options.max_seconds / HEADLESS_STEP_SECS).ceil() as u32)
        .saturating_add(TIMEOUT_GRACE_FRAMES);
    for frame in 1..=max_frames {
        app.update();
        if let Some(roll) = app.world_mut().resource_mut::<CapturedRoll>().0.take() {
            return Ok(HeadlessRoll {
                values: roll.results.iter().map(|r| r.value).collect(),
                timed_out: roll.timed_out,
                simulated_secs: frame as f32 * HEADLESS_STEP_SECS,
            });
        }
    }

    Err(format!(
        "No roll result after {} simulated frames",
        max_frames
    ))
}
