//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::{PrimaryWindow, WindowResolution};
use neo_orrery::config::OrreryConfig;
use neo_orrery::input::InputPlugin;
use neo_orrery::lifecycle::LifecyclePlugin;
use neo_orrery::neo::record::{MissDistance, RelativeVelocity};
use neo_orrery::neo::{CloseApproach, DiameterRange, EstimatedDiameter, NeoFeed, NeoRecord};
use neo_orrery::render::MotionPlugin;
use neo_orrery::time::TimePlugin;

pub const KM_PER_AU: f64 = 149_597_870.7;

/// Window size used by headless apps.
pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// A record with one close approach at `miss_au`.
pub fn neo(id: &str, hazardous: bool, diameter_m: f64, miss_au: f64) -> NeoRecord {
    NeoRecord {
        id: id.to_string(),
        name: format!("({id} TEST)"),
        nasa_jpl_url: None,
        absolute_magnitude_h: None,
        estimated_diameter: EstimatedDiameter {
            kilometers: DiameterRange::new(diameter_m / 1000.0, diameter_m / 500.0),
            meters: DiameterRange::new(diameter_m, diameter_m * 2.0),
            miles: DiameterRange::new(diameter_m / 1609.344, diameter_m / 804.672),
            feet: DiameterRange::default(),
        },
        is_potentially_hazardous_asteroid: hazardous,
        is_sentry_object: false,
        close_approach_data: vec![CloseApproach {
            close_approach_date: "2023-09-01".to_string(),
            close_approach_date_full: None,
            epoch_date_close_approach: None,
            relative_velocity: RelativeVelocity {
                kilometers_per_hour: "54000.0".to_string(),
                ..Default::default()
            },
            miss_distance: MissDistance {
                astronomical: miss_au.to_string(),
                kilometers: (miss_au * KM_PER_AU).to_string(),
                ..Default::default()
            },
            orbiting_body: "Earth".to_string(),
        }],
    }
}

/// Two hazardous records and one benign one.
pub fn three_record_feed() -> Vec<NeoRecord> {
    vec![
        neo("1", true, 50.0, 0.01),
        neo("2", true, 120.0, 0.2),
        neo("3", false, 30.0, 0.3),
    ]
}

/// Headless app with the scene lifecycle, animation and pointer handling,
/// a primary window entity and a fixed 100 ms frame step.
pub fn create_headless_app(records: Vec<NeoRecord>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(OrreryConfig {
            seed: Some(11),
            ..default()
        })
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((TimePlugin, MotionPlugin, LifecyclePlugin, InputPlugin))
        .insert_resource(NeoFeed::new(records));
    app.world_mut().spawn((
        Window {
            resolution: WindowResolution::new(VIEWPORT.x as u32, VIEWPORT.y as u32),
            ..default()
        },
        PrimaryWindow,
    ));
    app
}

/// Entity of the primary window.
pub fn primary_window(app: &mut App) -> Entity {
    let world = app.world_mut();
    world
        .query_filtered::<Entity, With<PrimaryWindow>>()
        .single(world)
        .expect("primary window")
}
