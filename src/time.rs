//! Clock advancement for the orrery animation.
//!
//! The clock moves by real frame time while the animation loop is running.

use bevy::prelude::*;

use crate::types::{AnimationSet, OrreryClock};

/// Plugin providing the shared clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrreryClock>()
            .configure_sets(Update, (AnimationSet::Clock, AnimationSet::Motion).chain())
            .add_systems(
                Update,
                advance_clock
                    .in_set(AnimationSet::Clock)
                    .run_if(animation_running),
            );
    }
}

/// Run condition: the animation loop has not been stopped.
pub fn animation_running(clock: Res<OrreryClock>) -> bool {
    clock.running
}

/// Advance the clock by the real time elapsed since the last frame.
fn advance_clock(mut clock: ResMut<OrreryClock>, time: Res<Time>) {
    clock.advance(time.delta_secs_f64());
}
