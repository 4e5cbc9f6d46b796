//! UI module providing the egui overlay.
//!
//! A control bar across the top, the hover tooltip, and the close-approach
//! list. The UI only edits `SceneFlags` and `UiState`; the scene reacts to
//! flag changes on its own.

mod close_approaches;
mod controls;
pub mod icons;
mod tooltip;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use close_approaches::{ApproachRow, approach_rows};
pub use controls::{feed_status_text, toggle_label};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    controls::control_bar_system,
                    close_approaches::close_approach_system,
                    tooltip::tooltip_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// UI-only state, not read by the scene.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the close-approach list is open.
    pub show_close_approaches: bool,
    /// Keep only records passing closer than the near-pass threshold.
    pub near_passes_only: bool,
}
