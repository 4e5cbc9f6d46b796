//! Simplified circular orbits in the horizontal (x/z) plane.
//!
//! Positions are driven directly by the shared clock; there are no Keplerian
//! elements. Every function here is pure so a frame can be recomputed from
//! (descriptor, clock) alone.

use std::f64::consts::TAU;
use std::ops::Range;

use bevy::prelude::*;
use rand::Rng;

use crate::types::REFERENCE_ANGULAR_CONSTANT;

/// Circular orbit assigned to a placed object.
///
/// Assigned exactly once at placement; there are no setters.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitDescriptor {
    distance: f64,
    angular_speed: f64,
    initial_phase: f64,
}

impl OrbitDescriptor {
    /// Create a descriptor.
    ///
    /// # Panics
    /// Panics if `distance` or `angular_speed` is not strictly positive and
    /// finite: such an orbit is stationary or undefined.
    pub fn new(distance: f64, angular_speed: f64, initial_phase: f64) -> Self {
        assert!(
            distance.is_finite() && distance > 0.0,
            "orbit distance must be positive, got {distance}"
        );
        assert!(
            angular_speed.is_finite() && angular_speed > 0.0,
            "orbit angular speed must be positive, got {angular_speed}"
        );
        Self {
            distance,
            angular_speed,
            initial_phase: initial_phase.rem_euclid(TAU),
        }
    }

    /// Sample a fresh descriptor from the given ranges.
    pub fn sample(sampling: &OrbitSampling, rng: &mut impl Rng) -> Self {
        let distance = rng.gen_range(sampling.distance.clone());
        let angular_speed = rng.gen_range(sampling.angular_speed.clone());
        let initial_phase = rng.gen_range(0.0..TAU);
        Self::new(distance, angular_speed, initial_phase)
    }

    /// Orbital radius in scene units.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Angular speed in radians per clock second.
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Phase at clock zero, in [0, 2π).
    pub fn initial_phase(&self) -> f64 {
        self.initial_phase
    }

    /// Angle on the circle at the given clock value.
    pub fn angle_at(&self, clock: f64) -> f64 {
        clock * self.angular_speed + self.initial_phase
    }

    /// Position in the horizontal plane at the given clock value.
    pub fn position_at(&self, clock: f64) -> Vec3 {
        circle_point(self.distance, self.angle_at(clock))
    }
}

/// Ranges the object placer samples orbits from.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSampling {
    /// Orbital distance in scene units.
    pub distance: Range<f64>,
    /// Angular speed in radians per second.
    pub angular_speed: Range<f64>,
}

impl Default for OrbitSampling {
    fn default() -> Self {
        Self {
            distance: 3.0..18.0,
            angular_speed: 1.0..1.07,
        }
    }
}

impl OrbitSampling {
    /// Whether every value in both ranges is strictly positive.
    pub fn is_positive(&self) -> bool {
        let positive = |r: &Range<f64>| r.start > 0.0 && r.start < r.end && r.end.is_finite();
        positive(&self.distance) && positive(&self.angular_speed)
    }
}

/// A body on a fixed circle whose speed falls off with distance.
#[derive(Component, Clone, Debug)]
pub struct ReferenceBody {
    pub name: String,
    pub distance: f64,
}

/// Position of a reference body: angle = clock * k / distance.
pub fn reference_position(distance: f64, clock: f64) -> Vec3 {
    circle_point(distance, clock * REFERENCE_ANGULAR_CONSTANT / distance)
}

/// Closed loop of `segments + 1` points tracing a circle of the given radius.
///
/// The last point repeats the first so a line strip closes on itself.
pub fn trajectory_points(distance: f64, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = if i == segments {
                0.0
            } else {
                f64::from(i) / f64::from(segments) * TAU
            };
            circle_point(distance, angle)
        })
        .collect()
}

fn circle_point(distance: f64, angle: f64) -> Vec3 {
    Vec3::new(
        (distance * angle.cos()) as f32,
        0.0,
        (distance * angle.sin()) as f32,
    )
}
