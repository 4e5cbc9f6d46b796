//! Close-approach list.
//!
//! One card per record with its size, hazard flag and first close approach.
//! The "near passes only" filter keeps records that come within
//! `NEAR_PASS_AU` on any approach.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{UiState, icons};
use crate::neo::{NeoFeed, NeoRecord};
use crate::types::NEAR_PASS_AU;

/// First close approach of a record, as displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct ApproachSummary {
    pub date: String,
    pub miss_distance_km: String,
    pub relative_velocity_kmh: String,
}

/// One row of the list.
#[derive(Clone, Debug, PartialEq)]
pub struct ApproachRow {
    pub name: String,
    pub diameter_km: String,
    pub hazardous: bool,
    pub approach: Option<ApproachSummary>,
}

impl From<&NeoRecord> for ApproachRow {
    fn from(record: &NeoRecord) -> Self {
        let km = record.estimated_diameter.kilometers;
        Self {
            name: record.name.clone(),
            diameter_km: format!(
                "{} - {} km",
                km.estimated_diameter_min, km.estimated_diameter_max
            ),
            hazardous: record.is_potentially_hazardous_asteroid,
            approach: record.first_approach().map(|a| ApproachSummary {
                date: a.display_date().to_string(),
                miss_distance_km: a.miss_distance.kilometers.clone(),
                relative_velocity_kmh: a.relative_velocity.kilometers_per_hour.clone(),
            }),
        }
    }
}

/// Rows for the list, in feed order.
pub fn approach_rows(records: &[NeoRecord], near_passes_only: bool) -> Vec<ApproachRow> {
    records
        .iter()
        .filter(|r| !near_passes_only || r.passes_within_au(NEAR_PASS_AU))
        .map(ApproachRow::from)
        .collect()
}

pub fn close_approach_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    feed: Res<NeoFeed>,
) {
    if !ui_state.show_close_approaches {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut open = true;
    let mut near_only = ui_state.near_passes_only;

    egui::Window::new("Close Approach Data")
        .open(&mut open)
        .default_width(360.0)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 110.0))
        .show(ctx, |ui| {
            ui.checkbox(
                &mut near_only,
                format!("Near passes only (< {NEAR_PASS_AU} AU)"),
            );
            ui.separator();

            let rows = approach_rows(&feed.records, near_only);
            if rows.is_empty() {
                ui.label(if near_only {
                    "No asteroids passing near Earth in the given period."
                } else {
                    "No near-Earth objects loaded."
                });
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for row in &rows {
                    render_row(ui, row);
                    ui.add_space(4.0);
                }
            });
        });

    ui_state.near_passes_only = near_only;
    if !open {
        ui_state.show_close_approaches = false;
    }
}

fn render_row(ui: &mut egui::Ui, row: &ApproachRow) {
    egui::Frame::new()
        .fill(egui::Color32::from_rgb(55, 65, 81))
        .corner_radius(6)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("{} {}", icons::ASTEROID, row.name))
                    .strong()
                    .size(15.0),
            );
            ui.label(format!("Diameter: {}", row.diameter_km));
            let hazard = if row.hazardous {
                egui::RichText::new("Yes").color(egui::Color32::from_rgb(224, 85, 85))
            } else {
                egui::RichText::new("No")
            };
            ui.horizontal(|ui| {
                ui.label("Potentially Hazardous:");
                ui.label(hazard);
            });
            if let Some(approach) = &row.approach {
                ui.label(format!("Close Approach Date: {}", approach.date));
                ui.label(format!("Miss Distance: {} km", approach.miss_distance_km));
                ui.label(format!(
                    "Relative Velocity: {} km/h",
                    approach.relative_velocity_kmh
                ));
            }
        });
}
