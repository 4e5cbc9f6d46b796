//! Scene generations: mount, rebuild and unmount.
//!
//! A generation is everything [`remount_scene`] spawns for one combination of
//! feed data and presentation flags. Before the next generation is built the
//! previous one is torn down completely, so after any number of rebuilds there
//! is exactly one rendering surface and one pointer listener.

use bevy::prelude::*;

use crate::camera::OrbitRig;
use crate::config::OrreryConfig;
use crate::neo::{FeedFetch, NeoFeed};
use crate::orbit::OrbitSampling;
use crate::picking::HoverState;
use crate::placement::{PlacedObjects, SceneRng, place_objects};
use crate::scene::{SceneMember, SceneSurface, build_scene, spawn_surface};
use crate::types::{AnimationSet, OrreryClock, SceneFlags};

/// Plugin owning the scene generation lifecycle.
pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        let seed = app
            .world()
            .get_resource::<OrreryConfig>()
            .and_then(|config| config.seed);

        app.init_resource::<SceneFlags>()
            .init_resource::<NeoFeed>()
            .init_resource::<PlacedObjects>()
            .init_resource::<SceneMount>()
            .init_resource::<OrreryClock>()
            .init_resource::<HoverState>()
            .init_resource::<OrbitRig>()
            .insert_resource(SceneRng::from_seed_or_entropy(seed))
            .add_systems(
                Update,
                remount_scene
                    .run_if(resource_changed::<SceneFlags>.or(resource_changed::<NeoFeed>))
                    .before(AnimationSet::Clock),
            )
            .add_systems(Last, unmount_on_exit);
    }
}

/// Generation bookkeeping.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneMount {
    /// Number of generations built so far; the live one has this number.
    pub generation: u64,
    /// Whether a generation is currently mounted.
    pub mounted: bool,
}

/// Present while the pointer handler may run against the live generation.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerListener {
    pub generation: u64,
}

/// Release the live generation.
///
/// The listener goes first so no pointer work targets a scene being
/// dismantled; the surface goes last.
fn teardown(
    commands: &mut Commands,
    clock: &mut OrreryClock,
    hover: &mut HoverState,
    registry: &mut PlacedObjects,
    members: &Query<Entity, With<SceneMember>>,
    surfaces: &Query<Entity, With<SceneSurface>>,
) -> usize {
    commands.remove_resource::<PointerListener>();
    clock.running = false;
    *hover = HoverState::none();
    registry.clear();

    let mut released = 0;
    for entity in members.iter() {
        commands.entity(entity).despawn();
        released += 1;
    }
    for surface in surfaces.iter() {
        commands.entity(surface).despawn();
    }
    released
}

/// Tear down the live generation and build the next one from the current
/// feed and flags.
pub fn remount_scene(
    mut commands: Commands,
    flags: Res<SceneFlags>,
    feed: Res<NeoFeed>,
    config: Option<Res<OrreryConfig>>,
    rig: Res<OrbitRig>,
    mut mount: ResMut<SceneMount>,
    mut clock: ResMut<OrreryClock>,
    mut hover: ResMut<HoverState>,
    mut registry: ResMut<PlacedObjects>,
    mut rng: ResMut<SceneRng>,
    members: Query<Entity, With<SceneMember>>,
    surfaces: Query<Entity, With<SceneSurface>>,
) {
    if mount.mounted {
        let released = teardown(
            &mut commands,
            &mut clock,
            &mut hover,
            &mut registry,
            &members,
            &surfaces,
        );
        debug!(
            "Released scene generation {} ({released} entities)",
            mount.generation
        );
    }

    mount.generation += 1;
    let generation = mount.generation;
    let default_sampling = OrbitSampling::default();
    let sampling = config
        .as_ref()
        .map_or(&default_sampling, |config| &config.sampling);
    let now = clock.elapsed;

    spawn_surface(&mut commands, &rig, generation);
    let counts = build_scene(&mut commands, &mut rng.0, now);
    let placed = place_objects(
        &mut commands,
        &feed.records,
        *flags,
        sampling,
        &mut rng.0,
        &mut registry,
        now,
    );

    commands.insert_resource(PointerListener { generation });
    clock.running = true;
    mount.mounted = true;

    info!(
        "Scene generation {generation}: {} objects placed ({} trajectories), {} reference bodies, {} stars (hazardous only: {}, trajectories: {})",
        placed.placed,
        placed.trajectories,
        counts.reference_bodies,
        counts.stars,
        flags.hazardous_only,
        flags.show_trajectories,
    );
}

/// Tear down on application exit and abandon any fetch still in flight.
pub fn unmount_on_exit(
    mut exits: MessageReader<AppExit>,
    mut commands: Commands,
    mut mount: ResMut<SceneMount>,
    mut clock: ResMut<OrreryClock>,
    mut hover: ResMut<HoverState>,
    mut registry: ResMut<PlacedObjects>,
    fetch: Option<ResMut<FeedFetch>>,
    members: Query<Entity, With<SceneMember>>,
    surfaces: Query<Entity, With<SceneSurface>>,
) {
    if exits.read().count() == 0 {
        return;
    }
    if let Some(mut fetch) = fetch {
        fetch.cancel();
    }
    if !mount.mounted {
        return;
    }

    teardown(
        &mut commands,
        &mut clock,
        &mut hover,
        &mut registry,
        &members,
        &surfaces,
    );
    mount.mounted = false;
    info!("Unmounted scene generation {}", mount.generation);
}
