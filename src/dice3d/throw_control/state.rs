//! Throw Control State
//!
//! Contains the throw parameters and the RNG resource that produces them.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dice3d::config::DiceTossConfig;

/// Starting pose and spin of one die
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrowParams {
    pub position: Vec3,
    pub rotation: Quat,
    pub angular_velocity: Vec3,
}

impl ThrowParams {
    /// Randomized start for the die at `index` in the throw.
    ///
    /// Dice are stacked one `spawn_height_step` apart so they never spawn
    /// overlapping.
    pub fn random(index: usize, config: &DiceTossConfig, rng: &mut impl Rng) -> Self {
        let position = Vec3::new(
            symmetric(rng, config.spawn_spread),
            config.spawn_base_height + index as f32 * config.spawn_height_step,
            symmetric(rng, config.spawn_spread),
        );

        let axis = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>())
            .try_normalize()
            .unwrap_or(Vec3::Y);
        let rotation = Quat::from_axis_angle(axis, rng.gen_range(0.0..TAU));

        let angular_velocity = Vec3::new(
            symmetric(rng, config.max_spin),
            symmetric(rng, config.max_spin),
            symmetric(rng, config.max_spin),
        );

        Self {
            position,
            rotation,
            angular_velocity,
        }
    }
}

/// Uniform sample from `[-half, half)`, or 0 for a degenerate range
fn symmetric(rng: &mut impl Rng, half: f32) -> f32 {
    if half > 0.0 {
        rng.gen_range(-half..half)
    } else {
        0.0
    }
}

/// RNG used for throws
#[derive(Resource)]
pub struct DiceRng(pub StdRng);

impl DiceRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for DiceRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}
