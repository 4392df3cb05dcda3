use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::dice3d::types::{DieFace, D6_FACES};

/// Keep `edge_radius` within `[0, size / 2)`
fn clamp_edge_radius(size: f32, edge_radius: f32) -> f32 {
    edge_radius.clamp(0.0, size * 0.49)
}

/// Visual body of a cube die with edge length `size` and beveled edges.
///
/// The bevel is a flat chamfer of width `edge_radius`: six inset faces,
/// twelve edge strips and eight corner triangles.
pub fn create_d6_mesh(size: f32, edge_radius: f32) -> Mesh {
    let half = size / 2.0;
    let inner = half - clamp_edge_radius(size, edge_radius);

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    let mut push_polygon = |corners: &[Vec3], normal: Vec3| {
        let normal = normal.normalize();
        let mut corners = corners.to_vec();
        if (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .dot(normal)
            < 0.0
        {
            corners.reverse();
        }
        let base = positions.len() as u32;
        for corner in &corners {
            positions.push(corner.to_array());
            normals.push(normal.to_array());
        }
        for i in 1..corners.len() as u32 - 1 {
            indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    };

    let axes = [Vec3::X, Vec3::Y, Vec3::Z];

    // Faces
    for i in 0..3 {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);
        for sign in [1.0, -1.0] {
            let n = axes[i] * sign;
            let corners: Vec<Vec3> = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
                .iter()
                .map(|(u, v)| n * half + axes[j] * (u * inner) + axes[k] * (v * inner))
                .collect();
            push_polygon(&corners, n);
        }
    }

    // Edge strips
    for i in 0..3 {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);
        for si in [1.0, -1.0] {
            for sj in [1.0, -1.0] {
                let (ei, ej) = (axes[i] * si, axes[j] * sj);
                let corners = [
                    ei * half + ej * inner - axes[k] * inner,
                    ei * half + ej * inner + axes[k] * inner,
                    ei * inner + ej * half + axes[k] * inner,
                    ei * inner + ej * half - axes[k] * inner,
                ];
                push_polygon(&corners, ei + ej);
            }
        }
    }

    // Corners
    for sx in [1.0, -1.0] {
        for sy in [1.0, -1.0] {
            for sz in [1.0, -1.0] {
                let s = Vec3::new(sx, sy, sz);
                let corners = [
                    s * Vec3::new(half, inner, inner),
                    s * Vec3::new(inner, half, inner),
                    s * Vec3::new(inner, inner, half),
                ];
                push_polygon(&corners, s);
            }
        }
    }

    let uvs: Vec<[f32; 2]> = vec![[0.5, 0.5]; positions.len()];

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

/// Collider and face table of a cube die with edge length `size`.
///
/// The collider is a round cuboid whose outer extents still match `size`.
pub fn create_d6_body(size: f32, edge_radius: f32) -> (Collider, Vec<DieFace>) {
    let radius = clamp_edge_radius(size, edge_radius);
    let inner = size / 2.0 - radius;
    (
        Collider::round_cuboid(inner, inner, inner, radius),
        D6_FACES.to_vec(),
    )
}

pub fn create_d6(size: f32, edge_radius: f32) -> (Mesh, Collider, Vec<DieFace>) {
    let (collider, faces) = create_d6_body(size, edge_radius);
    (create_d6_mesh(size, edge_radius), collider, faces)
}
