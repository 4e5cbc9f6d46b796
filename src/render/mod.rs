//! Rendering for the orrery.
//!
//! The scene builder spawns bare markers; the plugins here attach the camera,
//! lights, meshes and materials when those markers appear. Motion lives in
//! [`sync`] and needs no GPU.

mod background;
pub mod bodies;
pub mod highlight;
pub mod orbits;
pub mod sync;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::BodyVisualsPlugin;
use self::highlight::HighlightPlugin;
use self::orbits::OrbitPathPlugin;
use crate::scene::SceneSurface;
use crate::types::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

pub use self::sync::MotionPlugin;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            BodyVisualsPlugin,
            BackgroundPlugin,
            OrbitPathPlugin,
            HighlightPlugin,
        ))
        .add_systems(PostUpdate, attach_camera);
    }
}

/// Perspective projection of the scene camera.
pub fn scene_projection() -> PerspectiveProjection {
    PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    }
}

/// Turn each new surface into the 3D camera.
fn attach_camera(mut commands: Commands, added: Query<(Entity, &SceneSurface), Added<SceneSurface>>) {
    for (entity, surface) in added.iter() {
        commands
            .entity(entity)
            .insert((Camera3d::default(), Projection::Perspective(scene_projection())));
        debug!("Camera attached for generation {}", surface.generation);
    }
}
