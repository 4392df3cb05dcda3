//! Physics world systems
//!
//! The floor body and world gravity. Rapier itself does all simulation work.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::dice3d::config::DiceTossConfig;

/// Marker for the static floor body
#[derive(Component)]
pub struct FloorBody;

/// Spawn the static floor the dice land on. Its top surface is at y = 0.
pub fn spawn_floor_body(mut commands: Commands, config: Res<DiceTossConfig>) {
    let half_thickness = config.floor_thickness / 2.0;
    commands.spawn((
        Transform::from_xyz(0.0, -half_thickness, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(config.floor_half_extent, half_thickness, config.floor_half_extent),
        Friction::coefficient(config.friction),
        Restitution::coefficient(config.restitution),
        FloorBody,
    ));
}

/// Apply the configured gravity and solver passes to every Rapier context as
/// it appears.
pub fn configure_physics_world(
    config: Res<DiceTossConfig>,
    mut contexts: Query<
        (&mut RapierConfiguration, &mut RapierContextSimulation),
        Added<RapierConfiguration>,
    >,
) {
    for (mut rapier_config, mut simulation) in contexts.iter_mut() {
        rapier_config.gravity = config.gravity;
        simulation.integration_parameters.num_solver_iterations = config.solver_iterations.max(1);
        info!(
            "Physics gravity set to {:?}, {} solver iterations",
            config.gravity, config.solver_iterations
        );
    }
}
