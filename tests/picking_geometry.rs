//! Hover resolution geometry and the headless pointer handler.

mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;
use bevy::window::CursorMoved;
use neo_orrery::neo::NeoMetadata;
use neo_orrery::picking::{
    HoverState, PickCandidate, PointerCamera, TooltipContent, cursor_to_ndc, pick_nearest,
};
use neo_orrery::placement::{PlacedObject, PlacedObjects};
use neo_orrery::scene::SceneSurface;
use neo_orrery::types::{OrreryClock, PLACED_OBJECT_RADIUS, TOOLTIP_OFFSET_PX};

use common::{VIEWPORT, create_headless_app, neo, primary_window, three_record_feed};

fn front_camera() -> PointerCamera {
    let transform = Transform::from_xyz(0.0, 0.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y);
    PointerCamera::new(&transform, VIEWPORT)
}

fn candidate(index: u32, center: Vec3) -> PickCandidate {
    let mut world = World::new();
    let mut entity = world.spawn_empty().id();
    for _ in 0..index {
        entity = world.spawn_empty().id();
    }
    PickCandidate {
        entity,
        center,
        radius: PLACED_OBJECT_RADIUS,
    }
}

const CENTER: Vec2 = Vec2::new(400.0, 300.0);

#[test]
fn test_cursor_to_ndc_corners() {
    assert_eq!(cursor_to_ndc(Vec2::ZERO, VIEWPORT), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(cursor_to_ndc(VIEWPORT, VIEWPORT), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(cursor_to_ndc(CENTER, VIEWPORT), Some(Vec2::ZERO));
    assert_eq!(cursor_to_ndc(CENTER, Vec2::ZERO), None);
}

#[test]
fn test_center_ray_hits_object_at_origin() {
    let camera = front_camera();
    let ray = camera.ray_from_cursor(CENTER).expect("ray");
    let hit = pick_nearest(ray, [candidate(1, Vec3::ZERO)]).expect("hit");
    assert_relative_eq!(hit.distance, 20.0 - PLACED_OBJECT_RADIUS - 0.1, epsilon = 1e-3);
}

#[test]
fn test_corner_ray_misses() {
    let camera = front_camera();
    let ray = camera.ray_from_cursor(Vec2::new(5.0, 5.0)).expect("ray");
    assert!(pick_nearest(ray, [candidate(1, Vec3::ZERO)]).is_none());
}

#[test]
fn test_nearest_of_stacked_objects_wins() {
    let camera = front_camera();
    let ray = camera.ray_from_cursor(CENTER).expect("ray");
    let far = candidate(1, Vec3::new(0.0, 0.0, -5.0));
    let near = candidate(2, Vec3::new(0.0, 0.0, 5.0));
    let middle = candidate(3, Vec3::ZERO);

    let hit = pick_nearest(ray, [far, middle, near]).expect("hit");
    assert_eq!(hit.entity, near.entity);
}

#[test]
fn test_equal_distance_keeps_first() {
    let camera = front_camera();
    let ray = camera.ray_from_cursor(CENTER).expect("ray");
    let first = candidate(1, Vec3::ZERO);
    let twin = candidate(2, Vec3::ZERO);
    assert_eq!(pick_nearest(ray, [first, twin]).map(|h| h.entity), Some(first.entity));
}

#[test]
fn test_empty_scene_never_hovers() {
    let camera = front_camera();
    let state = HoverState::resolve(&camera, CENTER, std::iter::empty(), |_| None);
    assert_eq!(state, HoverState::none());
}

#[test]
fn test_tooltip_anchor_sits_above_object() {
    let camera = front_camera();
    let anchor = camera.tooltip_anchor(Vec3::ZERO).expect("in front");
    assert_relative_eq!(anchor.x, CENTER.x, epsilon = 1e-3);
    assert_relative_eq!(anchor.y, CENTER.y - TOOLTIP_OFFSET_PX, epsilon = 1e-3);
}

#[test]
fn test_missing_metadata_degrades_to_unavailable() {
    let camera = front_camera();
    let state = HoverState::resolve(&camera, CENTER, [candidate(1, Vec3::ZERO)], |_| None);
    let hover = state.hover().expect("still hovering");
    assert_eq!(hover.content, TooltipContent::Unavailable);
}

#[test]
fn test_tooltip_formats_metadata() {
    let camera = front_camera();
    let mut record = neo("7", true, 12.346, 0.02);
    record.close_approach_data[0].miss_distance.kilometers = "2991957.4".into();
    let metadata = NeoMetadata::from(&record);

    let state = HoverState::resolve(&camera, CENTER, [candidate(1, Vec3::ZERO)], |_| {
        Some(&metadata)
    });
    let Some(TooltipContent::Details(fields)) = state.hover().map(|h| h.content.clone()) else {
        panic!("expected details");
    };
    assert_eq!(fields.size_meters_min, "12.35");
    assert_eq!(fields.size_meters_max, "24.69");
    assert_eq!(fields.name, "(7 TEST)");
    assert_eq!(fields.miss_distance_km, "2991957.40");
    assert!(fields.is_hazardous);
}

/// Camera snapshot of the live surface and the cursor position over the
/// first placed object matching `hazardous`.
fn aim_at(app: &mut App, hazardous: bool) -> (PointerCamera, Entity, Vec2) {
    let world = app.world_mut();
    let camera_transform = *world
        .query_filtered::<&Transform, With<SceneSurface>>()
        .single(world)
        .expect("surface");
    let (entity, position) = world
        .query::<(Entity, &Transform, &PlacedObject)>()
        .iter(world)
        .find(|(_, _, object)| object.hazardous == hazardous)
        .map(|(entity, transform, _)| (entity, transform.translation))
        .expect("a matching placed object");

    let camera = PointerCamera::new(&camera_transform, VIEWPORT);
    let ndc = camera.project_to_ndc(position).expect("visible");
    (camera, entity, camera.ndc_to_screen(ndc.truncate()))
}

fn move_cursor(app: &mut App, position: Vec2) {
    let window = primary_window(app);
    app.world_mut().write_message(CursorMoved {
        window,
        position,
        delta: None,
    });
}

/// Mounted app with motion frozen so objects stay under the cursor.
fn frozen_app() -> App {
    let mut app = create_headless_app(three_record_feed());
    app.update();
    app.world_mut().resource_mut::<OrreryClock>().running = false;
    app
}

#[test]
fn test_pointer_move_hovers_hazardous_object() {
    let mut app = frozen_app();
    let (_, target, cursor) = aim_at(&mut app, true);

    move_cursor(&mut app, cursor);
    app.update();

    let hover = app.world().resource::<HoverState>().clone();
    assert_eq!(hover.entity(), Some(target));
    assert!(app.world().resource::<PlacedObjects>().get(target).is_some());
    let Some(TooltipContent::Details(fields)) = hover.hover().map(|h| h.content.clone()) else {
        panic!("expected details");
    };
    assert!(fields.is_hazardous);

    // Moving to an empty corner clears the hover
    move_cursor(&mut app, Vec2::new(1.0, 1.0));
    app.update();
    assert!(!app.world().resource::<HoverState>().is_hovering());
}

#[test]
fn test_benign_object_is_not_interactive() {
    let mut app = frozen_app();
    let (_, benign, cursor) = aim_at(&mut app, false);
    assert_eq!(
        app.world().get::<PlacedObject>(benign).map(|p| p.neo_id.as_str()),
        Some("3")
    );

    move_cursor(&mut app, cursor);
    app.update();

    assert_eq!(*app.world().resource::<HoverState>(), HoverState::none());
}

#[test]
fn test_tooltip_follows_object_without_pointer_move() {
    let mut app = frozen_app();
    let (camera, target, cursor) = aim_at(&mut app, true);
    move_cursor(&mut app, cursor);
    app.update();
    let before = app.world().resource::<HoverState>().hover().expect("hovering").anchor;

    // Nudge the object sideways, still under the cursor
    let moved = {
        let mut transform = app.world_mut().get_mut::<Transform>(target).expect("object");
        transform.translation.x += 0.1;
        transform.translation
    };
    app.update();

    let hover = app.world().resource::<HoverState>().hover().cloned().expect("still hovering");
    assert_eq!(hover.entity, target);
    let expected = camera.tooltip_anchor(moved).expect("in front");
    assert_relative_eq!(hover.anchor.x, expected.x, epsilon = 1e-3);
    assert_relative_eq!(hover.anchor.y, expected.y, epsilon = 1e-3);
    assert!((hover.anchor.x - before.x).abs() > 0.1);
}
