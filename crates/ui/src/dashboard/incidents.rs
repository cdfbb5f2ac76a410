//! Incident list, incidents-by-type chart and the expanded incident report.

use bevy::prelude::*;
use bevy_egui::egui;

use simulation::fixtures::analytics::INCIDENTS_BY_TYPE;
use simulation::fixtures::incidents::{
    live_incidents, severity_breakdown, Incident, IncidentStatus, Severity, INCIDENTS,
};

use super::{DashboardUi, ExpandedPanel};
use crate::{charts, theme, widgets};

fn severity_color(severity: Severity) -> egui::Color32 {
    theme::rgb(severity.rgb())
}

fn status_color(status: IncidentStatus) -> egui::Color32 {
    match status {
        IncidentStatus::Active => theme::NEGATIVE,
        IncidentStatus::Scheduled => theme::PRIMARY,
    }
}

/// One incident as a compact row: kind, location, badges, time.
fn incident_row(ui: &mut egui::Ui, incident: &Incident, selected: bool) -> egui::Response {
    let frame = egui::Frame::NONE
        .fill(if selected { theme::PRIMARY_SOFT } else { theme::MUTED_BG })
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(10));
    let response = frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (dot, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(dot.center(), 5.0, severity_color(incident.severity));
                ui.label(
                    egui::RichText::new(incident.kind.label())
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(theme::TEXT_HEADING),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::caption(ui, incident.clock_time());
                });
            });
            widgets::caption(ui, incident.location);
            ui.horizontal(|ui| {
                widgets::badge(ui, incident.severity.label(), severity_color(incident.severity));
                widgets::badge(ui, incident.status.label(), status_color(incident.status));
            });
        })
        .response;
    response.interact(egui::Sense::click())
}

/// The compact "Live Incidents" list.
pub(super) fn live_incident_list(ui: &mut egui::Ui) {
    for incident in live_incidents() {
        incident_row(ui, incident, false);
        ui.add_space(4.0);
    }
}

fn incidents_by_type_chart(ui: &mut egui::Ui) {
    let rows: Vec<(&str, f32, egui::Color32)> = INCIDENTS_BY_TYPE
        .iter()
        .map(|t| (t.kind, t.count as f32, theme::rgb(t.color)))
        .collect();
    charts::draw_horizontal_bars(ui, &rows);
}

pub(super) fn incidents_tab(ui: &mut egui::Ui, ui_state: &mut DashboardUi) {
    ui.columns(2, |cols| {
        let (_, expand) = widgets::expandable_card(&mut cols[0], "Incident Report", |ui| {
            for (i, incident) in INCIDENTS.iter().enumerate() {
                if incident_row(ui, incident, false).clicked() {
                    ui_state.selected_incident = i;
                    ui_state.expand(ExpandedPanel::IncidentReport);
                }
                ui.add_space(4.0);
            }
        });
        if expand {
            ui_state.expand(ExpandedPanel::IncidentReport);
        }
        widgets::card(&mut cols[1], "Incidents by Type", incidents_by_type_chart);
    });
}

/// Expanded report: incident list on the left, the selected incident's
/// details, timeline and affected area on the right.
pub(super) fn incident_report(ui: &mut egui::Ui, ui_state: &mut DashboardUi) {
    let (high, medium, low) = severity_breakdown(INCIDENTS);
    ui.horizontal(|ui| {
        widgets::badge(ui, &format!("{high} High"), severity_color(Severity::High));
        widgets::badge(ui, &format!("{medium} Medium"), severity_color(Severity::Medium));
        widgets::badge(ui, &format!("{low} Low"), severity_color(Severity::Low));
    });
    ui.add_space(theme::ITEM_SPACING);

    ui.columns(2, |cols| {
        for (i, incident) in INCIDENTS.iter().enumerate() {
            let selected = ui_state.selected_incident == i;
            if incident_row(&mut cols[0], incident, selected).clicked() {
                ui_state.selected_incident = i;
            }
            cols[0].add_space(4.0);
        }

        let Some(incident) = INCIDENTS.get(ui_state.selected_incident) else {
            return;
        };
        incident_details(&mut cols[1], incident);
    });
}

fn incident_details(ui: &mut egui::Ui, incident: &Incident) {
    widgets::subheading(ui, &format!("{} at {}", incident.kind.label(), incident.location));
    widgets::caption(ui, &format!("Reported {}", incident.timestamp.replace('T', " ")));
    ui.add_space(4.0);
    widgets::paragraph(ui, incident.description);
    widgets::section_separator(ui);

    widgets::stat_row(ui, "Respondents", &incident.respondents.join(", "));
    widgets::stat_row(
        ui,
        "Coordinates",
        &format!("{:.4}, {:.4}", incident.lat, incident.lng),
    );
    let camera = if incident.camera_available {
        incident.camera_id.to_string()
    } else {
        format!("{} (offline)", incident.camera_id)
    };
    widgets::stat_row(ui, "Camera", &camera);
    widgets::section_separator(ui);

    widgets::subheading(ui, "Timeline");
    for update in incident.updates {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(update.time)
                    .size(theme::FONT_SMALL)
                    .monospace()
                    .color(theme::TEXT_MUTED),
            );
            ui.label(egui::RichText::new(update.text).size(theme::FONT_BODY));
        });
    }
    widgets::section_separator(ui);

    widgets::subheading(ui, "Affected Area");
    let area = &incident.affected;
    widgets::stat_row(ui, "Lanes affected", area.lanes);
    widgets::stat_row(ui, "Estimated clear time", area.estimated_clear_time);
    widgets::stat_row(ui, "Impact radius", area.impact_radius);
    widgets::stat_row(ui, "Congestion level", area.congestion_level);

    ui.add_space(theme::ITEM_SPACING);
    if widgets::secondary_button(ui, "Dispatch Update").clicked() {
        info!("Dispatch update requested for incident {}", incident.id);
    }
}
