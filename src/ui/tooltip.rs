//! Tooltip for the hovered object.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::picking::{HoverState, TooltipContent};

const HAZARD_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

/// Draw the tooltip at the anchor resolved by the pointer handler.
pub fn tooltip_system(mut contexts: EguiContexts, hover: Res<HoverState>) {
    let Some(hover) = hover.hover() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("neo_tooltip"))
        .fixed_pos(egui::pos2(hover.anchor.x, hover.anchor.y))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .interactable(false)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_premultiplied(0, 0, 0, 200))
                .show(ui, |ui| match &hover.content {
                    TooltipContent::Details(fields) => {
                        ui.label(egui::RichText::new(&fields.name).strong());
                        ui.label(format!(
                            "Size: {} - {} m ({} - {} mi)",
                            fields.size_meters_min,
                            fields.size_meters_max,
                            fields.size_miles_min,
                            fields.size_miles_max
                        ));
                        ui.label(format!("Miss Distance: {} km", fields.miss_distance_km));
                        ui.horizontal(|ui| {
                            ui.label("Potentially Hazardous:");
                            if fields.is_hazardous {
                                ui.label(egui::RichText::new("Yes").color(HAZARD_COLOR));
                            } else {
                                ui.label("No");
                            }
                        });
                    }
                    TooltipContent::Unavailable => {
                        ui.label("Details unavailable");
                    }
                });
        });
}
