//! Meshes and materials for the Sun, reference bodies and placed objects.
//!
//! Handles are created when the scene spawns the markers and live only on
//! those entities, so despawning a generation releases its assets.

use bevy::prelude::*;

use crate::orbit::ReferenceBody;
use crate::placement::PlacedObject;
use crate::scene::CentralBody;
use crate::types::{PLACED_OBJECT_RADIUS, REFERENCE_BODIES, REFERENCE_BODY_RADIUS, SUN_RADIUS};

/// Plugin attaching visuals to newly spawned bodies.
pub struct BodyVisualsPlugin;

impl Plugin for BodyVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                attach_central_body,
                attach_reference_bodies,
                attach_placed_objects,
            ),
        );
    }
}

const SUN_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const HAZARDOUS_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const BENIGN_COLOR: Color = Color::srgb(0.55, 0.55, 0.55);

/// Color of a placed object by hazard flag.
pub fn placed_object_color(hazardous: bool) -> Color {
    if hazardous { HAZARDOUS_COLOR } else { BENIGN_COLOR }
}

/// Color of a reference body, by name.
fn reference_color(name: &str) -> Color {
    REFERENCE_BODIES
        .iter()
        .find(|(body, _, _)| *body == name)
        .map_or(Color::srgb(0.6, 0.6, 0.6), |(_, _, color)| *color)
}

fn attach_central_body(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    added: Query<Entity, Added<CentralBody>>,
) {
    for entity in added.iter() {
        // Emissive so the Sun reads as a light source regardless of lighting
        let material = materials.add(StandardMaterial {
            base_color: SUN_COLOR,
            emissive: SUN_COLOR.to_linear() * 2.0,
            ..default()
        });
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(32, 16))),
            MeshMaterial3d(material),
        ));
    }
}

fn attach_reference_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    added: Query<(Entity, &ReferenceBody), Added<ReferenceBody>>,
) {
    for (entity, body) in added.iter() {
        let material = materials.add(StandardMaterial {
            base_color: reference_color(&body.name),
            ..default()
        });
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(REFERENCE_BODY_RADIUS).mesh().uv(32, 16))),
            MeshMaterial3d(material),
        ));
    }
}

fn attach_placed_objects(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    added: Query<(Entity, &PlacedObject), Added<PlacedObject>>,
) {
    if added.is_empty() {
        return;
    }

    // One mesh and two materials shared by the whole generation
    let mesh = meshes.add(Sphere::new(PLACED_OBJECT_RADIUS).mesh().uv(16, 8));
    let hazardous = materials.add(StandardMaterial {
        base_color: placed_object_color(true),
        ..default()
    });
    let benign = materials.add(StandardMaterial {
        base_color: placed_object_color(false),
        ..default()
    });

    for (entity, object) in added.iter() {
        let material = if object.hazardous {
            hazardous.clone()
        } else {
            benign.clone()
        };
        commands
            .entity(entity)
            .insert((Mesh3d(mesh.clone()), MeshMaterial3d(material)));
    }
}
