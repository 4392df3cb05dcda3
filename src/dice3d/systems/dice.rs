//! Dice throw, settle, and result systems
//!
//! This module contains the throw handler that replaces the dice on the table,
//! the settle poll that decides when a roll is over, and the face readout.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::dice3d::config::DiceTossConfig;
use crate::dice3d::meshes::{create_d6_body, pip_transforms};
use crate::dice3d::throw_control::{DiceRng, ThrowParams};
use crate::dice3d::types::*;

/// Shared render handles for dice. Absent in headless runs, in which case
/// dice are spawned as bare physics bodies.
#[derive(Resource, Clone)]
pub struct DiceAssets {
    pub body_mesh: Handle<Mesh>,
    pub body_material: Handle<StandardMaterial>,
    pub pip_mesh: Handle<Mesh>,
    pub pip_material: Handle<StandardMaterial>,
}

/// Handle throw requests: clear the table and spawn a fresh set of dice
#[allow(clippy::too_many_arguments)]
pub fn throw_dice(
    mut commands: Commands,
    mut requests: MessageReader<ThrowDiceRequest>,
    config: Res<DiceTossConfig>,
    dice_count: Res<DiceCount>,
    dice_assets: Option<Res<DiceAssets>>,
    mut rng: ResMut<DiceRng>,
    mut roll_state: ResMut<RollState>,
    mut dice_results: ResMut<DiceResults>,
    existing_dice: Query<Entity, With<Die>>,
) {
    // Several requests in one frame still mean one throw
    if requests.read().count() == 0 {
        return;
    }

    for entity in existing_dice.iter() {
        commands.entity(entity).despawn();
    }

    for index in 0..dice_count.as_usize() {
        let params = ThrowParams::random(index, &config, &mut rng.0);
        spawn_die(&mut commands, index, params, &config, dice_assets.as_deref());
    }

    dice_results.results.clear();
    roll_state.start(config.settle_poll_interval);
    debug!("Threw {} dice", dice_count.get());
}

/// Spawn a single die as a dynamic body, with visuals when assets exist
pub fn spawn_die(
    commands: &mut Commands,
    index: usize,
    params: ThrowParams,
    config: &DiceTossConfig,
    dice_assets: Option<&DiceAssets>,
) -> Entity {
    let (collider, faces) = create_d6_body(config.die_size, config.die_edge_radius);

    let mut die = commands.spawn((
        Transform::from_translation(params.position).with_rotation(params.rotation),
        RigidBody::Dynamic,
        collider,
        ColliderMassProperties::Mass(config.die_mass),
        Friction::coefficient(config.friction),
        Restitution::coefficient(config.restitution),
        Velocity {
            linvel: Vec3::ZERO,
            angvel: params.angular_velocity,
        },
        Sleeping::default(),
        Die {
            index,
            faces: faces.clone(),
        },
    ));

    if let Some(assets) = dice_assets {
        die.insert((
            Mesh3d(assets.body_mesh.clone()),
            MeshMaterial3d(assets.body_material.clone()),
        ));
        die.with_children(|parent| {
            for face in &faces {
                for transform in pip_transforms(face, config.die_size, &config.pips) {
                    parent.spawn((
                        Mesh3d(assets.pip_mesh.clone()),
                        MeshMaterial3d(assets.pip_material.clone()),
                        transform,
                    ));
                }
            }
        });
    }

    die.id()
}

/// Whether a die counts as stopped
pub fn is_die_settled(velocity: &Velocity, sleeping: Option<&Sleeping>, config: &DiceTossConfig) -> bool {
    if sleeping.is_some_and(|s| s.sleeping) {
        return true;
    }
    velocity.linvel.length() < config.settle_linear_threshold
        && velocity.angvel.length() < config.settle_angular_threshold
}

/// System to poll whether the dice have settled and read their faces
pub fn check_dice_settled(
    time: Res<Time>,
    config: Res<DiceTossConfig>,
    mut roll_state: ResMut<RollState>,
    mut dice_results: ResMut<DiceResults>,
    mut completed: MessageWriter<DiceRollCompleted>,
    dice_query: Query<(Entity, &Die, &Velocity, &Transform, Option<&Sleeping>)>,
) {
    if !roll_state.rolling {
        return;
    }

    roll_state.roll_timer += time.delta_secs();
    roll_state.poll_timer.tick(time.delta());

    let timed_out = roll_state.roll_timer >= config.roll_timeout_secs;
    if !roll_state.poll_timer.just_finished() && !timed_out {
        return;
    }

    let mut dice: Vec<_> = dice_query.iter().collect();
    let all_settled = !dice.is_empty()
        && dice
            .iter()
            .all(|(_, _, velocity, _, sleeping)| is_die_settled(velocity, *sleeping, &config));

    if !all_settled && !timed_out {
        return;
    }

    dice.sort_by_key(|(_, die, ..)| die.index);
    let outcomes: Vec<DieRollOutcome> = dice
        .iter()
        .map(|(entity, die, _, transform, _)| DieRollOutcome {
            entity: *entity,
            index: die.index,
            value: determine_die_value(&die.faces, transform.rotation),
        })
        .collect();

    roll_state.finish();
    dice_results.results = outcomes.iter().map(|o| o.value).collect();

    if all_settled {
        info!("{}", dice_results.summary());
    } else if dice_results.results.is_empty() {
        warn!(
            "Roll timed out after {:.1}s with no dice on the table",
            roll_state.roll_timer
        );
    } else {
        warn!(
            "Dice still moving after {:.1}s; {}",
            roll_state.roll_timer,
            dice_results.summary()
        );
    }

    completed.write(DiceRollCompleted {
        results: outcomes,
        timed_out: !all_settled,
    });
}

/// Value of the face pointing most nearly straight up.
///
/// Each local face normal is rotated into world space and compared against
/// world up; the first face wins ties. A die without faces reads 0.
pub fn determine_die_value(faces: &[DieFace], rotation: Quat) -> u32 {
    let mut best_value = 0;
    let mut best_dot = f32::NEG_INFINITY;

    for face in faces {
        let dot = (rotation * face.normal).dot(Vec3::Y);
        if dot > best_dot {
            best_dot = dot;
            best_value = face.value;
        }
    }

    best_value
}
