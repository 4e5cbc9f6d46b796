//! Shared scene constants, presentation flags and the animation clock.

use bevy::prelude::*;

/// Radius of the central body (Sun) in scene units.
pub const SUN_RADIUS: f32 = 1.5;

/// Render radius of a reference body (Earth) in scene units.
pub const REFERENCE_BODY_RADIUS: f32 = 0.3;

/// Half-width of the thin ring drawn along a reference body's orbit.
pub const REFERENCE_RING_HALF_WIDTH: f32 = 0.02;

/// Render radius of a placed NEO, also used as its hit-test sphere.
pub const PLACED_OBJECT_RADIUS: f32 = 0.2;

/// Constant `k` in the reference body motion law `angle = clock * k / distance`.
pub const REFERENCE_ANGULAR_CONSTANT: f64 = 1.0;

/// Number of segments in a trajectory loop.
pub const TRAJECTORY_SEGMENTS: u32 = 128;

/// Vertical offset (pixels) between a hovered object and its tooltip anchor.
pub const TOOLTIP_OFFSET_PX: f32 = 50.0;

/// Close approaches under this distance (AU) count as near passes.
pub const NEAR_PASS_AU: f64 = 0.05;

/// Vertical field of view of the scene camera (degrees).
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Near clipping plane of the scene camera.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clipping plane of the scene camera.
pub const CAMERA_FAR: f32 = 1000.0;

/// Reference bodies drawn around the central body: (name, orbital distance, color).
pub const REFERENCE_BODIES: &[(&str, f64, Color)] =
    &[("Earth", 5.0, Color::srgb(0.231, 0.51, 0.965))];

/// Presentation flags read when a scene generation is built.
///
/// Changing either flag triggers a full rebuild of the scene.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneFlags {
    /// Place only records flagged as potentially hazardous.
    pub hazardous_only: bool,
    /// Draw the circular path of every placed object.
    pub show_trajectories: bool,
}

/// Shared monotonic clock driving all orbital motion.
///
/// `running` is the explicit stop flag of the animation loop: the motion
/// systems only run while it is set.
#[derive(Resource, Clone, Debug, Default)]
pub struct OrreryClock {
    /// Seconds elapsed since the application started animating.
    pub elapsed: f64,
    /// Whether the animation loop is live.
    pub running: bool,
}

impl OrreryClock {
    /// Advance the clock; a stopped clock does not move.
    pub fn advance(&mut self, seconds: f64) {
        if self.running && seconds > 0.0 {
            self.elapsed += seconds;
        }
    }
}

/// Ordering of the per-frame animation systems.
///
/// All position updates finish before the frame is rendered, and the pointer
/// handler reads positions after they were moved.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnimationSet {
    /// Advance the shared clock.
    Clock,
    /// Move reference bodies and placed objects.
    Motion,
}
