//! Hover highlighting for placed objects.
//!
//! Draws a ring around the object under the pointer.

use bevy::prelude::*;

use crate::picking::HoverState;
use crate::placement::PlacedObject;
use crate::types::PLACED_OBJECT_RADIUS;

/// Plugin providing hover highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_highlight);
    }
}

/// Points of a ring of `radius` around `center`, facing `normal`.
pub fn ring_points(center: Vec3, normal: Vec3, radius: f32, segments: u32) -> Vec<Vec3> {
    let normal = normal.try_normalize().unwrap_or(Vec3::Y);
    let (u, v) = normal.any_orthonormal_pair();
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * std::f32::consts::TAU;
            center + radius * (u * t.cos() + v * t.sin())
        })
        .collect()
}

/// Draw a cyan ring around the hovered object, facing the camera.
fn draw_highlight(
    mut gizmos: Gizmos,
    hover: Res<HoverState>,
    objects: Query<&GlobalTransform, With<PlacedObject>>,
    cameras: Query<&GlobalTransform, With<Camera3d>>,
) {
    let Some(entity) = hover.entity() else {
        return;
    };
    let Ok(object) = objects.get(entity) else {
        return;
    };
    let center = object.translation();
    let normal = cameras
        .single()
        .map_or(Vec3::Y, |camera| camera.translation() - center);

    let color = Color::srgba(0.0, 1.0, 1.0, 0.8);
    gizmos.linestrip(ring_points(center, normal, PLACED_OBJECT_RADIUS * 1.8, 32), color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_points_lie_on_circle() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let points = ring_points(center, Vec3::Z, 0.5, 16);
        assert_eq!(points.len(), 17);
        for p in &points {
            assert_relative_eq!((*p - center).length(), 0.5, epsilon = 1e-5);
            assert_relative_eq!((*p - center).z, 0.0, epsilon = 1e-5);
        }
    }
}
