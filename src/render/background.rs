//! Background and lighting.
//!
//! Provides the starfield, the scene lights and the clear color.

use bevy::prelude::*;

use crate::scene::{SceneLight, Star};

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.02)))
            .add_systems(PostUpdate, (attach_lights, attach_stars));
    }
}

/// Turn `SceneLight` markers into bevy lights.
fn attach_lights(mut commands: Commands, added: Query<(Entity, &SceneLight), Added<SceneLight>>) {
    for (entity, light) in added.iter() {
        match *light {
            SceneLight::Ambient { brightness } => {
                commands.insert_resource(GlobalAmbientLight {
                    color: Color::srgb(0.25, 0.25, 0.25),
                    brightness,
                    ..default()
                });
            }
            SceneLight::Point { intensity } => {
                commands.entity(entity).insert(PointLight {
                    color: Color::WHITE,
                    intensity,
                    range: 200.0,
                    shadows_enabled: false,
                    ..default()
                });
            }
        }
    }
}

/// Give every new star the shared star mesh, scaled by its size.
fn attach_stars(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut added: Query<(Entity, &Star, &mut Transform), Added<Star>>,
) {
    if added.is_empty() {
        return;
    }

    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.6).mesh().uv(8, 4));

    let mut count = 0;
    for (entity, star, mut transform) in added.iter_mut() {
        transform.scale = Vec3::splat(star.size);
        commands.entity(entity).insert((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
        ));
        count += 1;
    }

    debug!("Attached {count} background stars");
}
