//! Digital twin tab: view mode toggle, camera buttons and the summary
//! tiles. The 3D scene itself is drawn by the rendering crate behind egui.

use bevy::prelude::*;
use bevy_egui::egui;

use rendering::camera::CameraCommand;
use simulation::fixtures::analytics::HOURLY_CONGESTION;
use simulation::fixtures::{TWIN_ALERT, TWIN_SUMMARY};

use super::{routing_map, DashboardUi, ExpandedPanel};
use crate::{charts, theme, widgets};

/// How the twin tab presents the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwinMode {
    #[default]
    ThreeD,
    Map,
    Congestion,
}

impl TwinMode {
    pub const ALL: [(TwinMode, &'static str); 3] = [
        (TwinMode::ThreeD, "3D View"),
        (TwinMode::Map, "Map View"),
        (TwinMode::Congestion, "Congestion"),
    ];
}

fn mode_toggle(ui: &mut egui::Ui, ui_state: &mut DashboardUi) {
    let mut mode = ui_state.twin_mode;
    if widgets::tab_bar(ui, &mut mode, &TwinMode::ALL) {
        info!("Twin mode: {:?}", mode);
        ui_state.twin_mode = mode;
    }
}

/// Summary tiles and the congestion alert.
pub(super) fn summary(ui: &mut egui::Ui) {
    for stat in TWIN_SUMMARY {
        widgets::stat_card(ui, stat);
        ui.add_space(4.0);
    }
    egui::Frame::NONE
        .fill(theme::faded(theme::WARNING, 0.12))
        .stroke(egui::Stroke::new(1.0, theme::WARNING))
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Traffic Alert")
                    .strong()
                    .color(theme::WARNING),
            );
            widgets::paragraph(ui, TWIN_ALERT);
        });
}

/// Side panel shown next to the live 3D scene.
pub(super) fn controls(
    ui: &mut egui::Ui,
    ui_state: &mut DashboardUi,
    camera_commands: &mut EventWriter<CameraCommand>,
) {
    widgets::heading(ui, "Digital Twin");
    widgets::caption(ui, "Live 3D model of the intersection grid");
    ui.add_space(theme::ITEM_SPACING);
    if ui_state.expanded.is_none() {
        mode_toggle(ui, ui_state);
        ui.add_space(theme::ITEM_SPACING);
    }

    ui.horizontal(|ui| {
        if widgets::secondary_button(ui, "Zoom In").clicked() {
            camera_commands.send(CameraCommand::ZoomIn);
        }
        if widgets::secondary_button(ui, "Zoom Out").clicked() {
            camera_commands.send(CameraCommand::ZoomOut);
        }
        if widgets::secondary_button(ui, "Reset").clicked() {
            camera_commands.send(CameraCommand::ResetView);
        }
    });
    widgets::caption(ui, "Right-drag to orbit, scroll to zoom");
    widgets::section_separator(ui);

    egui::ScrollArea::vertical().show(ui, |ui| {
        summary(ui);
    });

    ui.add_space(theme::ITEM_SPACING);
    if ui_state.expanded.is_none() {
        if widgets::secondary_button(ui, "Expand").clicked() {
            ui_state.expand(ExpandedPanel::DigitalTwin);
        }
    } else if widgets::secondary_button(ui, "Close").clicked() {
        ui_state.collapse();
    }
}

/// Body of the twin tab when the 3D scene is not shown.
pub(super) fn flat_view(ui: &mut egui::Ui, ui_state: &mut DashboardUi) {
    mode_toggle(ui, ui_state);
    ui.add_space(theme::ITEM_SPACING);
    ui.columns(2, |cols| {
        match ui_state.twin_mode {
            TwinMode::Map => {
                widgets::card(&mut cols[0], "City Map", |ui| {
                    routing_map::routing_map(ui, &mut ui_state.selected_route, 360.0);
                });
            }
            TwinMode::Congestion => {
                widgets::card(&mut cols[0], "Congestion Overlay", |ui| {
                    routing_map::congestion_map(ui, 300.0);
                    ui.add_space(theme::ITEM_SPACING);
                    let labels: Vec<&str> = HOURLY_CONGESTION.iter().map(|h| h.time).collect();
                    let levels: Vec<f32> =
                        HOURLY_CONGESTION.iter().map(|h| h.level as f32).collect();
                    charts::draw_bar_chart(
                        ui,
                        &labels,
                        &[charts::Series {
                            name: "Congestion",
                            color: theme::NEGATIVE,
                            values: &levels,
                        }],
                        140.0,
                    );
                });
            }
            // The 3D view replaces this body with the side panel.
            TwinMode::ThreeD => {}
        }
        widgets::card(&mut cols[1], "Summary", summary);
    });
}
