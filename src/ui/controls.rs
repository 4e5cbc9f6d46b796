//! Control bar across the top of the window.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{UiState, icons};
use crate::neo::{FeedRefreshRequested, FeedState, NeoFeed};
use crate::types::SceneFlags;

mod colors {
    use bevy_egui::egui::Color32;

    pub const BAR_BG: Color32 = Color32::from_rgba_premultiplied(17, 24, 39, 230);
    pub const TITLE: Color32 = Color32::from_rgb(168, 85, 247);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const ACTIVE: Color32 = Color32::from_rgb(99, 102, 241);
    pub const DANGER: Color32 = Color32::from_rgb(224, 85, 85);
    pub const SUCCESS: Color32 = Color32::from_rgb(85, 176, 85);
}

/// "Show X" or "Hide X" depending on the current state.
pub fn toggle_label(shown: bool, subject: &str) -> String {
    format!("{} {subject}", if shown { "Hide" } else { "Show" })
}

/// Label of the hazard filter button: names what a click switches to.
pub fn hazard_filter_label(hazardous_only: bool) -> &'static str {
    if hazardous_only {
        "Show All Objects"
    } else {
        "Show Hazardous Only"
    }
}

/// One-line description of the feed state.
pub fn feed_status_text(state: &FeedState) -> String {
    match state {
        FeedState::NotLoaded => "No data yet".to_string(),
        FeedState::Loading => "Loading near-Earth objects...".to_string(),
        FeedState::Loaded { count } => format!("{count} objects loaded"),
        FeedState::Failed(reason) => format!("Feed unavailable: {reason}"),
    }
}

pub fn control_bar_system(
    mut contexts: EguiContexts,
    mut flags: ResMut<SceneFlags>,
    mut ui_state: ResMut<UiState>,
    feed: Res<NeoFeed>,
    feed_state: Res<FeedState>,
    mut refresh: MessageWriter<FeedRefreshRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut next = *flags;

    egui::TopBottomPanel::top("control_bar")
        .frame(
            egui::Frame::new()
                .fill(colors::BAR_BG)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Dynamic Orrery with PHAs and Orbital Trajectories")
                    .size(22.0)
                    .strong()
                    .color(colors::TITLE),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let label = format!(
                    "{} {}",
                    icons::WARNING,
                    hazard_filter_label(next.hazardous_only)
                );
                let hint = if next.hazardous_only {
                    "Place every object in the feed again (H)"
                } else {
                    "Hide objects not flagged as potentially hazardous (H)"
                };
                if toggle_button(ui, &label, next.hazardous_only)
                    .on_hover_text(hint)
                    .clicked()
                {
                    next.hazardous_only = !next.hazardous_only;
                }

                let label = format!(
                    "{} {}",
                    icons::ORBIT,
                    toggle_label(next.show_trajectories, "Orbital Trajectories")
                );
                if toggle_button(ui, &label, next.show_trajectories)
                    .on_hover_text("Draw every object's path (T)")
                    .clicked()
                {
                    next.show_trajectories = !next.show_trajectories;
                }

                let label = format!("{} View Close Approaches", icons::LIST);
                if toggle_button(ui, &label, ui_state.show_close_approaches)
                    .on_hover_text("Toggle the close-approach list (C)")
                    .clicked()
                {
                    ui_state.show_close_approaches = !ui_state.show_close_approaches;
                }

                ui.separator();
                render_feed_status(ui, &feed_state, feed.hazardous_count());

                let loading = matches!(*feed_state, FeedState::Loading);
                let button = egui::Button::new(egui::RichText::new(icons::REFRESH).size(16.0));
                if ui
                    .add_enabled(!loading, button)
                    .on_hover_text("Fetch the feed again")
                    .clicked()
                {
                    refresh.write(FeedRefreshRequested);
                }
            });
        });

    // Only touch the flags on a real change so the scene is not rebuilt every frame
    flags.set_if_neq(next);
}

fn toggle_button(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let text = egui::RichText::new(label).size(14.0).color(colors::TEXT);
    let button = egui::Button::new(text)
        .fill(if active {
            colors::ACTIVE
        } else {
            egui::Color32::from_rgb(40, 40, 55)
        })
        .corner_radius(14)
        .min_size(egui::vec2(0.0, 30.0));
    ui.add(button)
}

fn render_feed_status(ui: &mut egui::Ui, state: &FeedState, hazardous: usize) {
    let (icon, color) = match state {
        FeedState::NotLoaded | FeedState::Loading => (icons::LOADING, colors::TEXT),
        FeedState::Loaded { .. } => (icons::SUCCESS, colors::SUCCESS),
        FeedState::Failed(_) => (icons::ERROR, colors::DANGER),
    };
    let mut text = format!("{icon} {}", feed_status_text(state));
    if matches!(state, FeedState::Loaded { .. }) {
        text.push_str(&format!(" ({hazardous} hazardous)"));
    }
    ui.label(egui::RichText::new(text).size(13.0).color(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        assert_eq!(
            toggle_label(false, "Orbital Trajectories"),
            "Show Orbital Trajectories"
        );
        assert_eq!(toggle_label(true, "Orbital Trajectories"), "Hide Orbital Trajectories");
    }

    #[test]
    fn test_hazard_filter_label_names_the_next_state() {
        assert_eq!(hazard_filter_label(false), "Show Hazardous Only");
        assert_eq!(hazard_filter_label(true), "Show All Objects");
    }

    #[test]
    fn test_feed_status_text() {
        assert_eq!(feed_status_text(&FeedState::Loaded { count: 12 }), "12 objects loaded");
        assert_eq!(
            feed_status_text(&FeedState::Failed("timeout".into())),
            "Feed unavailable: timeout"
        );
    }
}
