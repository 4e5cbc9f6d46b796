//! Object placement: one orbiting marker per qualifying NEO record.
//!
//! Placed objects carry only their NEO id and orbit. Everything the tooltip
//! shows is kept in the [`PlacedObjects`] registry, keyed by entity, and
//! looked up after a successful pick.

use std::collections::HashMap;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::neo::{NeoMetadata, NeoRecord};
use crate::orbit::{OrbitDescriptor, OrbitSampling, trajectory_points};
use crate::scene::SceneMember;
use crate::types::{SceneFlags, TRAJECTORY_SEGMENTS};

/// Marker for an orbiting NEO.
#[derive(Component, Clone, Debug)]
pub struct PlacedObject {
    pub neo_id: String,
    pub hazardous: bool,
}

/// Static closed loop showing where a placed object travels.
#[derive(Component, Clone, Debug)]
pub struct Trajectory {
    pub distance: f64,
    /// Loop vertices in scene units; the last equals the first.
    pub points: Vec<Vec3>,
}

impl Trajectory {
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            points: trajectory_points(distance, TRAJECTORY_SEGMENTS),
        }
    }
}

/// Metadata of every object placed in the current scene generation.
#[derive(Resource, Default, Debug)]
pub struct PlacedObjects {
    metadata: HashMap<Entity, NeoMetadata>,
}

impl PlacedObjects {
    pub fn insert(&mut self, entity: Entity, metadata: NeoMetadata) {
        self.metadata.insert(entity, metadata);
    }

    pub fn get(&self, entity: Entity) -> Option<&NeoMetadata> {
        self.metadata.get(&entity)
    }

    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    pub fn clear(&mut self) {
        self.metadata.clear();
    }
}

/// Random source for orbit sampling and the starfield.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for SceneRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Records that pass the hazard filter, in feed order.
pub fn select_records(
    records: &[NeoRecord],
    hazardous_only: bool,
) -> impl Iterator<Item = &NeoRecord> {
    records
        .iter()
        .filter(move |r| !hazardous_only || r.is_potentially_hazardous_asteroid)
}

/// Summary of one placement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementSummary {
    pub placed: usize,
    pub trajectories: usize,
}

/// Spawn a placed object (and optionally its trajectory) for every record
/// passing the filter, registering each object's metadata.
///
/// Initial positions are taken at `clock` so the first frame is already on
/// the orbit.
pub fn place_objects(
    commands: &mut Commands,
    records: &[NeoRecord],
    flags: SceneFlags,
    sampling: &OrbitSampling,
    rng: &mut StdRng,
    registry: &mut PlacedObjects,
    clock: f64,
) -> PlacementSummary {
    let mut summary = PlacementSummary::default();

    for record in select_records(records, flags.hazardous_only) {
        let orbit = OrbitDescriptor::sample(sampling, rng);

        let entity = commands
            .spawn((
                SceneMember,
                PlacedObject {
                    neo_id: record.id.clone(),
                    hazardous: record.is_potentially_hazardous_asteroid,
                },
                orbit,
                Transform::from_translation(orbit.position_at(clock)),
            ))
            .id();
        registry.insert(entity, NeoMetadata::from(record));
        summary.placed += 1;

        if flags.show_trajectories {
            commands.spawn((
                SceneMember,
                Trajectory::new(orbit.distance()),
                Transform::default(),
            ));
            summary.trajectories += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use bevy::ecs::system::RunSystemOnce;

    fn run_placement(records: Vec<NeoRecord>, flags: SceneFlags) -> (App, PlacementSummary) {
        let mut app = App::new();
        app.init_resource::<PlacedObjects>();
        let summary = app
            .world_mut()
            .run_system_once(move |mut commands: Commands, mut registry: ResMut<PlacedObjects>| {
                let mut rng = StdRng::seed_from_u64(7);
                place_objects(
                    &mut commands,
                    &records,
                    flags,
                    &OrbitSampling::default(),
                    &mut rng,
                    &mut registry,
                    0.0,
                )
            })
            .expect("placement system runs");
        (app, summary)
    }

    #[test]
    fn test_select_records_hazard_filter() {
        let records = fixtures::three_record_feed();
        assert_eq!(select_records(&records, true).count(), 2);
        assert_eq!(select_records(&records, false).count(), 3);
    }

    #[test]
    fn test_hazardous_only_places_hazard_count() {
        let flags = SceneFlags {
            hazardous_only: true,
            show_trajectories: false,
        };
        let (mut app, summary) = run_placement(fixtures::three_record_feed(), flags);
        assert_eq!(summary.placed, 2);
        assert_eq!(summary.trajectories, 0);

        let world = app.world_mut();
        let mut objects = world.query::<(Entity, &PlacedObject, &OrbitDescriptor)>();
        let placed: Vec<_> = objects.iter(world).collect();
        assert_eq!(placed.len(), 2);
        for (entity, object, orbit) in placed {
            assert!(object.hazardous);
            assert!(orbit.distance() > 0.0);
            let registry = world.resource::<PlacedObjects>();
            assert_eq!(registry.get(entity).map(|m| m.id.as_str()), Some(object.neo_id.as_str()));
        }
    }

    #[test]
    fn test_trajectories_follow_flag() {
        let flags = SceneFlags {
            hazardous_only: false,
            show_trajectories: true,
        };
        let (mut app, summary) = run_placement(fixtures::three_record_feed(), flags);
        assert_eq!(summary, PlacementSummary { placed: 3, trajectories: 3 });

        let world = app.world_mut();
        let mut loops = world.query::<&Trajectory>();
        for trajectory in loops.iter(world) {
            assert_eq!(trajectory.points.len(), TRAJECTORY_SEGMENTS as usize + 1);
            assert!(trajectory.distance > 0.0);
        }
    }

    #[test]
    fn test_empty_feed_places_nothing() {
        let (_, summary) = run_placement(Vec::new(), SceneFlags::default());
        assert_eq!(summary, PlacementSummary::default());
    }
}
