pub mod d6;
pub mod pips;

pub use d6::{create_d6, create_d6_body, create_d6_mesh};
pub use pips::{pip_offsets, pip_transforms};

#[cfg(test)]
mod tests {
    use bevy::mesh::VertexAttributeValues;
    use bevy::prelude::*;
    use bevy_rapier3d::prelude::*;

    use super::*;

    #[test]
    fn test_d6_has_6_faces() {
        let (_, _, faces) = create_d6(1.0, 0.1);
        assert_eq!(faces.len(), 6, "D6 should have 6 face normals");
        for face in &faces {
            assert!(face.value >= 1 && face.value <= 6, "D6 face values should be 1-6");
            assert!((face.normal.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_d6_collider_matches_size() {
        let (collider, _) = create_d6_body(0.8, 0.1);
        let ColliderView::RoundCuboid(round) = collider.as_typed_shape() else {
            panic!("d6 collider should be a round cuboid");
        };
        let half_extents = round.inner_shape().half_extents();
        assert!((round.border_radius() - 0.1).abs() < 1e-6);
        assert!((half_extents + Vec3::splat(round.border_radius()) - Vec3::splat(0.4)).length() < 1e-6);
    }

    #[test]
    fn test_d6_mesh_is_closed_bevel() {
        let mesh = create_d6_mesh(1.0, 0.1);
        // 6 faces and 12 edge strips as quads, 8 corner triangles
        assert_eq!(mesh.count_vertices(), 6 * 4 + 12 * 4 + 8 * 3);
        let triangles = mesh.indices().map(|i| i.len() / 3).unwrap_or(0);
        assert_eq!(triangles, 6 * 2 + 12 * 2 + 8);

        let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION) else {
            panic!("mesh should have positions");
        };
        for p in positions {
            let p = Vec3::from_array(*p);
            assert!(p.abs().max_element() <= 0.5 + 1e-6);
            assert!((p.abs().max_element() - 0.5).abs() < 1e-6, "every vertex lies on the outer box");
        }
    }

    #[test]
    fn test_d6_mesh_normals_point_outward() {
        let mesh = create_d6_mesh(1.0, 0.1);
        let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION) else {
            panic!("mesh should have positions");
        };
        let Some(VertexAttributeValues::Float32x3(normals)) = mesh.attribute(Mesh::ATTRIBUTE_NORMAL) else {
            panic!("mesh should have normals");
        };
        let indices: Vec<usize> = mesh.indices().unwrap().iter().collect();
        for tri in indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(positions[i]));
            let normal = Vec3::from_array(normals[tri[0]]);
            assert!((b - a).cross(c - a).dot(normal) > 0.0, "triangles wind counter-clockwise");
            assert!(a.dot(normal) > 0.0);
        }
    }
}
