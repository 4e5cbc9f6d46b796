//! Camera rig for the orrery.
//!
//! The camera orbits the central body: left-drag rotates, the scroll wheel
//! zooms. The rig outlives scene generations so a rebuild keeps the view.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::scene::SceneSurface;

/// Closest the camera may get to the origin.
pub const MIN_DISTANCE: f32 = 4.0;

/// Furthest the camera may get from the origin.
pub const MAX_DISTANCE: f32 = 200.0;

/// Default distance from the origin; frames the outermost orbits.
pub const DEFAULT_DISTANCE: f32 = 22.0;

/// Default elevation above the orbital plane (radians).
pub const DEFAULT_PITCH: f32 = 0.45;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of rotation per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Pitch stays short of the poles so `looking_at` keeps a stable up vector.
const PITCH_LIMIT: f32 = 1.5;

/// Spherical camera position around the origin.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitRig {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl OrbitRig {
    /// Camera transform looking at the origin.
    pub fn transform(&self) -> Transform {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let eye = Vec3::new(
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        );
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y)
    }

    /// Rotate by a screen-space drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SPEED;
        self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Logarithmic zoom: positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = 1.0 - scroll * ZOOM_SPEED;
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Plugin providing camera controls.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRig>()
            .add_systems(Update, (camera_controls, apply_rig).chain());
    }
}

/// Update the rig from mouse drag and scroll input.
fn camera_controls(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut rig: ResMut<OrbitRig>,
    mut contexts: EguiContexts,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let mut next = *rig;
    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        next.rotate(mouse_motion.delta);
    }
    if mouse_scroll.delta.y != 0.0 {
        next.zoom(mouse_scroll.delta.y);
    }
    rig.set_if_neq(next);
}

/// Move the surface camera when the rig changes.
fn apply_rig(rig: Res<OrbitRig>, mut surface: Query<&mut Transform, With<SceneSurface>>) {
    if !rig.is_changed() {
        return;
    }
    for mut transform in surface.iter_mut() {
        *transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rig_looks_at_origin() {
        let rig = OrbitRig::default();
        let transform = rig.transform();
        assert_relative_eq!(transform.translation.length(), DEFAULT_DISTANCE, epsilon = 1e-4);
        let forward = transform.forward();
        let to_origin = (-transform.translation).normalize();
        assert_relative_eq!(forward.dot(to_origin), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut rig = OrbitRig::default();
        for _ in 0..100 {
            rig.zoom(5.0);
        }
        assert_eq!(rig.distance, MIN_DISTANCE);
        for _ in 0..100 {
            rig.zoom(-5.0);
        }
        assert_eq!(rig.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut rig = OrbitRig::default();
        rig.rotate(Vec2::new(0.0, 10_000.0));
        assert_eq!(rig.pitch, PITCH_LIMIT);
        rig.rotate(Vec2::new(0.0, -100_000.0));
        assert_eq!(rig.pitch, -PITCH_LIMIT);
    }
}
