//! Orbit rings and trajectory loops.
//!
//! Reference rings are flat annuli in the orbital plane. Trajectories are
//! line-strip meshes built from the precomputed loop on each `Trajectory`.

use std::f32::consts::FRAC_PI_2;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::placement::Trajectory;
use crate::scene::ReferenceRing;
use crate::types::REFERENCE_RING_HALF_WIDTH;

/// Plugin attaching visuals to rings and trajectories.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, (attach_reference_rings, attach_trajectories));
    }
}

const TRAJECTORY_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);

/// Line-strip mesh through the given points.
pub fn line_strip_mesh(points: &[Vec3]) -> Mesh {
    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, points.to_vec())
}

fn attach_reference_rings(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut added: Query<(Entity, &ReferenceRing, &mut Transform), Added<ReferenceRing>>,
) {
    for (entity, ring, mut transform) in added.iter_mut() {
        let radius = ring.distance as f32;
        let annulus = Annulus::new(
            radius - REFERENCE_RING_HALF_WIDTH,
            radius + REFERENCE_RING_HALF_WIDTH,
        );
        let material = materials.add(StandardMaterial {
            base_color: ring.color,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });

        // Annulus is built in the XY plane; lay it into the orbital plane
        transform.rotation = Quat::from_rotation_x(-FRAC_PI_2);
        commands.entity(entity).insert((
            Mesh3d(meshes.add(annulus.mesh().resolution(128))),
            MeshMaterial3d(material),
        ));
    }
}

fn attach_trajectories(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    added: Query<(Entity, &Trajectory), Added<Trajectory>>,
) {
    if added.is_empty() {
        return;
    }

    let material = materials.add(StandardMaterial {
        base_color: TRAJECTORY_COLOR,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    for (entity, trajectory) in added.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(line_strip_mesh(&trajectory.points))),
            MeshMaterial3d(material.clone()),
        ));
    }
}
