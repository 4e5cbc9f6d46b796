//! Per-frame position updates from the shared clock.
//!
//! Positions are recomputed from (orbit, clock) every frame rather than
//! integrated, so a frame is always consistent with the clock it was
//! rendered at. The systems only touch `Transform`, so they run headless.

use bevy::prelude::*;

use crate::orbit::{OrbitDescriptor, ReferenceBody, reference_position};
use crate::placement::PlacedObject;
use crate::time::animation_running;
use crate::types::{AnimationSet, OrreryClock};

/// Plugin moving reference bodies and placed objects.
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (move_reference_bodies, move_placed_objects)
                .in_set(AnimationSet::Motion)
                .run_if(animation_running),
        );
    }
}

/// Move every reference body along its circle.
pub fn move_reference_bodies(
    clock: Res<OrreryClock>,
    mut bodies: Query<(&ReferenceBody, &mut Transform)>,
) {
    for (body, mut transform) in bodies.iter_mut() {
        transform.translation = reference_position(body.distance, clock.elapsed);
    }
}

/// Move every placed object along its sampled orbit.
pub fn move_placed_objects(
    clock: Res<OrreryClock>,
    mut objects: Query<(&OrbitDescriptor, &mut Transform), With<PlacedObject>>,
) {
    for (orbit, mut transform) in objects.iter_mut() {
        transform.translation = orbit.position_at(clock.elapsed);
    }
}
