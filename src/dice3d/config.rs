//! Tuning constants for the dice toss
//!
//! Everything the physics world, the throw, the settle poll, and the scene
//! need to agree on lives in one [`DiceTossConfig`] resource. The defaults
//! reproduce the feel of the browser version of the game.

use std::time::Duration;

use bevy::prelude::*;

/// Camera placement and lens
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 40.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(0.0, 7.0, 9.0),
            look_at: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub ambient_brightness: f32,
    pub directional_illuminance: f32,
    pub directional_position: Vec3,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            ambient_brightness: 400.0,
            directional_illuminance: 10000.0,
            directional_position: Vec3::new(5.0, 10.0, 7.0),
        }
    }
}

/// Surface look of the die body and its pips
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialConfig {
    pub die_color: Color,
    pub die_roughness: f32,
    pub die_metallic: f32,
    pub pip_color: Color,
    pub pip_roughness: f32,
    pub pip_metallic: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            die_color: Color::srgb_u8(0xf0, 0xf0, 0xf0),
            die_roughness: 0.15,
            die_metallic: 0.2,
            pip_color: Color::srgb_u8(0x11, 0x11, 0x11),
            pip_roughness: 0.4,
            pip_metallic: 0.0,
        }
    }
}

/// Pip geometry, in units of a die with edge length 1.0
#[derive(Clone, Debug, PartialEq)]
pub struct PipConfig {
    pub radius: f32,
    pub height: f32,
    /// Distance between neighbouring pips on the 3x3 face grid
    pub spacing: f32,
    /// Distance from the die center to the pip center along the face normal
    pub depth: f32,
}

impl Default for PipConfig {
    fn default() -> Self {
        Self {
            radius: 0.08,
            height: 0.025,
            spacing: 0.25,
            depth: 0.505,
        }
    }
}

/// Resource holding every tunable of the toss
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct DiceTossConfig {
    pub gravity: Vec3,
    /// Constraint solver passes per physics step
    pub solver_iterations: usize,

    pub die_size: f32,
    /// Radius of the rounded die edges, part of `die_size`
    pub die_edge_radius: f32,
    pub die_mass: f32,

    /// Friction and restitution shared by the dice and the floor
    pub friction: f32,
    pub restitution: f32,

    /// Dice spawn at x, z in `[-spawn_spread, spawn_spread)`
    pub spawn_spread: f32,
    /// Height of the first die; each following die spawns one step higher
    pub spawn_base_height: f32,
    pub spawn_height_step: f32,
    /// Angular velocity components are drawn from `[-max_spin, max_spin)`
    pub max_spin: f32,

    pub settle_linear_threshold: f32,
    pub settle_angular_threshold: f32,
    pub settle_poll_interval: Duration,
    /// Read the faces anyway once a roll has lasted this long
    pub roll_timeout_secs: f32,

    pub floor_half_extent: f32,
    pub floor_thickness: f32,

    pub camera: CameraConfig,
    pub lights: LightConfig,
    pub materials: MaterialConfig,
    pub pips: PipConfig,
}

impl Default for DiceTossConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.82, 0.0),
            solver_iterations: 16,
            die_size: 1.0,
            die_edge_radius: 0.1,
            die_mass: 1.0,
            friction: 0.1,
            restitution: 0.4,
            spawn_spread: 1.0,
            spawn_base_height: 3.0,
            spawn_height_step: 1.0,
            max_spin: 4.0,
            settle_linear_threshold: 0.1,
            settle_angular_threshold: 0.1,
            settle_poll_interval: Duration::from_millis(200),
            roll_timeout_secs: 10.0,
            floor_half_extent: 10.0,
            floor_thickness: 0.2,
            camera: CameraConfig::default(),
            lights: LightConfig::default(),
            materials: MaterialConfig::default(),
            pips: PipConfig::default(),
        }
    }
}
