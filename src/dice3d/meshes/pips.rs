//! Pip placement on die faces

use bevy::prelude::*;

use crate::dice3d::config::PipConfig;
use crate::dice3d::types::DieFace;

/// Pip centers for `value` on a face grid with the given spacing.
///
/// Coordinates are (u, v) in the face plane. Values outside 1..=6 have no pips.
pub fn pip_offsets(value: u32, spacing: f32) -> Vec<Vec2> {
    let s = spacing;
    let top_left = Vec2::new(-s, s);
    let top_right = Vec2::new(s, s);
    let bottom_left = Vec2::new(-s, -s);
    let bottom_right = Vec2::new(s, -s);

    match value {
        1 => vec![Vec2::ZERO],
        2 => vec![top_left, bottom_right],
        3 => vec![top_left, Vec2::ZERO, bottom_right],
        4 => vec![top_left, top_right, bottom_left, bottom_right],
        5 => vec![top_left, top_right, Vec2::ZERO, bottom_left, bottom_right],
        6 => vec![
            top_left,
            top_right,
            Vec2::new(-s, 0.0),
            Vec2::new(s, 0.0),
            bottom_left,
            bottom_right,
        ],
        _ => Vec::new(),
    }
}

/// Local transforms of the pips on `face` of a die with edge length `die_size`.
///
/// Pips are cylinders; each one is rotated so its axis lies along the face
/// normal, which keeps the flat cap flush with the face.
pub fn pip_transforms(face: &DieFace, die_size: f32, pips: &PipConfig) -> Vec<Transform> {
    let normal = face.normal.normalize_or_zero();
    if normal == Vec3::ZERO {
        return Vec::new();
    }
    let (tangent, bitangent) = normal.any_orthonormal_pair();
    let rotation = Quat::from_rotation_arc(Vec3::Y, normal);

    pip_offsets(face.value, pips.spacing)
        .into_iter()
        .map(|uv| {
            let local = normal * pips.depth + tangent * uv.x + bitangent * uv.y;
            Transform::from_translation(local * die_size).with_rotation(rotation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice3d::types::D6_FACES;

    #[test]
    fn test_pip_count_matches_value() {
        for value in 1..=6 {
            assert_eq!(pip_offsets(value, 0.25).len(), value as usize);
        }
    }

    #[test]
    fn test_no_pips_outside_range() {
        assert!(pip_offsets(0, 0.25).is_empty());
        assert!(pip_offsets(7, 0.25).is_empty());
    }

    #[test]
    fn test_pips_do_not_overlap() {
        for value in 1..=6 {
            let offsets = pip_offsets(value, 0.25);
            for (i, a) in offsets.iter().enumerate() {
                for b in offsets.iter().skip(i + 1) {
                    assert!(a.distance(*b) > 0.2, "pips overlap on face {}", value);
                }
            }
        }
    }

    #[test]
    fn test_pip_transforms_lie_on_their_face() {
        let pips = PipConfig::default();
        for face in &D6_FACES {
            let transforms = pip_transforms(face, 1.0, &pips);
            assert_eq!(transforms.len(), face.value as usize);
            for t in transforms {
                let along_normal = t.translation.dot(face.normal);
                assert!((along_normal - pips.depth).abs() < 1e-5);
                // Cylinder axis points out of the face
                assert!((t.rotation * Vec3::Y).dot(face.normal) > 0.999);
            }
        }
    }

    #[test]
    fn test_pip_transforms_scale_with_die() {
        let pips = PipConfig::default();
        let face = D6_FACES[0];
        let t = pip_transforms(&face, 2.0, &pips);
        assert!((t[0].translation.dot(face.normal) - pips.depth * 2.0).abs() < 1e-5);
    }
}
