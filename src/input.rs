//! Pointer and keyboard input.
//!
//! The last pointer position is hit-tested against the hazardous placed
//! objects every frame while a pointer listener is mounted, so the tooltip
//! follows an orbiting object. Keyboard shortcuts flip the presentation flags.

use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};

use crate::lifecycle::PointerListener;
use crate::picking::{HoverState, PickCandidate, PointerCamera};
use crate::placement::{PlacedObject, PlacedObjects};
use crate::scene::SceneSurface;
use crate::types::{AnimationSet, PLACED_OBJECT_RADIUS, SceneFlags};
use crate::ui::UiState;

/// Plugin providing pointer hover and keyboard shortcuts.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CursorMoved>()
            .init_resource::<HoverState>()
            .init_resource::<PointerPosition>()
            .add_systems(
                Update,
                (
                    handle_pointer_move
                        .after(AnimationSet::Motion)
                        .run_if(resource_exists::<PointerListener>),
                    update_cursor_icon.run_if(resource_changed::<HoverState>),
                    keyboard_shortcuts,
                ),
            );
    }
}

/// Last known cursor position in window pixels.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition(pub Option<Vec2>);

/// Resolve the hovered object at the latest cursor position.
///
/// Runs after motion, so the hover is re-evaluated against this frame's
/// object positions even when the pointer did not move. Only hazardous
/// objects are interactive.
pub fn handle_pointer_move(
    mut moves: MessageReader<CursorMoved>,
    mut pointer: ResMut<PointerPosition>,
    windows: Query<&Window, With<PrimaryWindow>>,
    surface: Query<&Transform, With<SceneSurface>>,
    objects: Query<(Entity, &Transform, &PlacedObject)>,
    registry: Res<PlacedObjects>,
    mut hover: ResMut<HoverState>,
) {
    if let Some(moved) = moves.read().last() {
        pointer.set_if_neq(PointerPosition(Some(moved.position)));
    }
    let Some(cursor) = pointer.0 else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(camera_transform) = surface.single() else {
        return;
    };

    let camera = PointerCamera::new(camera_transform, Vec2::new(window.width(), window.height()));
    let candidates = objects
        .iter()
        .filter(|(_, _, object)| object.hazardous)
        .map(|(entity, transform, _)| PickCandidate {
            entity,
            center: transform.translation,
            radius: PLACED_OBJECT_RADIUS,
        });

    let next = HoverState::resolve(&camera, cursor, candidates, |entity| registry.get(entity));
    hover.set_if_neq(next);
}

/// Show a pointer cursor while something is hovered.
fn update_cursor_icon(
    mut commands: Commands,
    hover: Res<HoverState>,
    windows: Query<(Entity, Option<&CursorIcon>), With<PrimaryWindow>>,
) {
    let Ok((window, current)) = windows.single() else {
        return;
    };
    let wanted = CursorIcon::System(if hover.is_hovering() {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    });
    if current != Some(&wanted) {
        commands.entity(window).insert(wanted);
    }
}

/// H: hazardous-only filter, T: trajectories, C: close-approach list.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut flags: ResMut<SceneFlags>,
    ui_state: Option<ResMut<UiState>>,
) {
    let mut next = *flags;
    if keys.just_pressed(KeyCode::KeyH) {
        next.hazardous_only = !next.hazardous_only;
        if next.hazardous_only {
            info!("Showing hazardous objects only");
        } else {
            info!("Showing all objects");
        }
    }
    if keys.just_pressed(KeyCode::KeyT) {
        next.show_trajectories = !next.show_trajectories;
        info!("Trajectories: {}", next.show_trajectories);
    }
    flags.set_if_neq(next);

    if keys.just_pressed(KeyCode::KeyC)
        && let Some(mut ui_state) = ui_state
    {
        ui_state.show_close_approaches = !ui_state.show_close_approaches;
    }
}
