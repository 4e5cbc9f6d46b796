//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Hazard warning
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Orbit/path icon
pub const ORBIT: &str = egui_phosphor::regular::PATH;
/// Close-approach list
pub const LIST: &str = egui_phosphor::regular::LIST_BULLETS;
/// Reload the feed
pub const REFRESH: &str = egui_phosphor::regular::ARROW_CLOCKWISE;
/// Feed loading
pub const LOADING: &str = egui_phosphor::regular::HOURGLASS;
/// Feed loaded
pub const SUCCESS: &str = egui_phosphor::regular::CHECK_CIRCLE;
/// Feed failed
pub const ERROR: &str = egui_phosphor::regular::WARNING_CIRCLE;
/// Asteroid
pub const ASTEROID: &str = egui_phosphor::regular::ASTERISK;
