//! Camera-related types and components
//!
//! This module contains the main camera marker and the helpers that turn a
//! [`CameraConfig`] into Bevy camera components.

use bevy::prelude::*;

use crate::dice3d::config::CameraConfig;

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Perspective projection for the table camera
pub fn table_camera_projection(camera: &CameraConfig) -> Projection {
    Projection::from(PerspectiveProjection {
        fov: camera.fov_degrees.to_radians(),
        near: camera.near,
        far: camera.far,
        ..default()
    })
}

/// Camera transform looking down at the table
pub fn table_camera_transform(camera: &CameraConfig) -> Transform {
    Transform::from_translation(camera.position).looking_at(camera.look_at, Vec3::Y)
}
