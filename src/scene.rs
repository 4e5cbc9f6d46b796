//! Scene construction for one generation.
//!
//! The builder only spawns domain markers with transforms. Meshes, materials,
//! lights and the camera are attached by the render plugin, which keeps the
//! scene testable without a GPU.

use bevy::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;

use crate::camera::OrbitRig;
use crate::orbit::{ReferenceBody, reference_position};
use crate::types::REFERENCE_BODIES;

/// Number of background stars per generation.
pub const STAR_COUNT: usize = 400;

/// Radius range of the shell the stars are scattered on.
pub const STAR_SHELL: std::ops::Range<f32> = 300.0..600.0;

/// Position of the point light.
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

/// Every entity owned by a scene generation, except the surface.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SceneMember;

/// The rendering surface: the camera the generation is viewed through.
#[derive(Component, Clone, Copy, Debug)]
pub struct SceneSurface {
    pub generation: u64,
}

/// Light sources of the scene.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum SceneLight {
    /// Uniform fill light (brightness in bevy ambient units).
    Ambient { brightness: f32 },
    /// Omnidirectional light at the entity's transform.
    Point { intensity: f32 },
}

/// The Sun.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CentralBody;

/// Thin ring marking a reference body's orbit.
#[derive(Component, Clone, Copy, Debug)]
pub struct ReferenceRing {
    pub distance: f64,
    pub color: Color,
}

/// A background star; `size` scales the shared star mesh.
#[derive(Component, Clone, Copy, Debug)]
pub struct Star {
    pub size: f32,
}

/// Counts of what one build spawned, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneCounts {
    pub lights: usize,
    pub reference_bodies: usize,
    pub stars: usize,
}

/// Spawn the rendering surface for `generation`.
pub fn spawn_surface(commands: &mut Commands, rig: &OrbitRig, generation: u64) -> Entity {
    commands
        .spawn((SceneSurface { generation }, rig.transform()))
        .id()
}

/// Spawn lights, the central body, reference bodies with their rings and
/// the starfield. Reference bodies start where the clock puts them.
pub fn build_scene(commands: &mut Commands, rng: &mut StdRng, clock: f64) -> SceneCounts {
    let mut counts = SceneCounts::default();

    commands.spawn((
        SceneMember,
        SceneLight::Ambient { brightness: 120.0 },
        Transform::default(),
    ));
    commands.spawn((
        SceneMember,
        SceneLight::Point {
            intensity: 2_000_000.0,
        },
        Transform::from_translation(POINT_LIGHT_POSITION),
    ));
    counts.lights = 2;

    commands.spawn((SceneMember, CentralBody, Transform::default()));

    for &(name, distance, color) in REFERENCE_BODIES {
        commands.spawn((
            SceneMember,
            ReferenceBody {
                name: name.to_string(),
                distance,
            },
            Transform::from_translation(reference_position(distance, clock)),
        ));
        commands.spawn((
            SceneMember,
            ReferenceRing { distance, color },
            Transform::default(),
        ));
        counts.reference_bodies += 1;
    }

    for _ in 0..STAR_COUNT {
        let direction = loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let len = v.length();
            if len > 1e-3 && len <= 1.0 {
                break v / len;
            }
        };
        let radius = rng.gen_range(STAR_SHELL);
        commands.spawn((
            SceneMember,
            Star {
                size: rng.gen_range(0.5..1.5),
            },
            Transform::from_translation(direction * radius),
        ));
    }
    counts.stars = STAR_COUNT;

    counts
}
