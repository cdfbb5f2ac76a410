//! Analysis tab and the expanded traffic analysis report.

use bevy_egui::egui;

use simulation::fixtures::analytics::{
    peak_hour, peak_trends, share_fraction, ANALYTICS_SERIES, AREA_DENSITY, DAILY_TRAFFIC,
    HOURLY_CONGESTION, PEDESTRIAN_ACTIVITY, SIGN_COMPLIANCE, VEHICLE_COUNTS,
    VEHICLE_COUNTS_DETAILED, VEHICLE_SHARES, WEEKLY_TRAFFIC,
};
use simulation::fixtures::chart_color;

use super::{DashboardUi, ExpandedPanel};
use crate::charts::{self, Series};
use crate::{theme, widgets};

const CHART_HEIGHT: f32 = 200.0;

fn to_f32<T>(rows: &[T], value: impl Fn(&T) -> u32) -> Vec<f32> {
    rows.iter().map(|r| value(r) as f32).collect()
}

/// Vehicle counts as bars, one color per type.
pub(super) fn vehicle_type_chart(ui: &mut egui::Ui, detailed: bool) {
    let table = if detailed { VEHICLE_COUNTS_DETAILED } else { VEHICLE_COUNTS };
    let rows: Vec<(&str, f32, egui::Color32)> = table
        .iter()
        .enumerate()
        .map(|(i, v)| (v.kind, v.count as f32, theme::rgb(chart_color(i))))
        .collect();
    charts::draw_horizontal_bars(ui, &rows);
}

fn daily_volume_chart(ui: &mut egui::Ui) {
    let labels: Vec<&str> = DAILY_TRAFFIC.iter().map(|s| s.time).collect();
    let volume = to_f32(DAILY_TRAFFIC, |s| s.volume);
    let series = [Series { name: "Volume", color: theme::PRIMARY, values: &volume }];
    charts::draw_bar_chart(ui, &labels, &series, CHART_HEIGHT);
    let congestion = to_f32(DAILY_TRAFFIC, |s| s.congestion);
    let congestion_series = [Series {
        name: "Congestion %",
        color: theme::WARNING,
        values: &congestion,
    }];
    ui.add_space(4.0);
    charts::draw_line_chart(ui, &labels, &congestion_series, 110.0);
    ui.horizontal(|ui| {
        charts::legend_item(ui, theme::PRIMARY, "Volume");
        charts::legend_item(ui, theme::WARNING, "Congestion %");
    });
}

fn vehicle_distribution(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let slices: Vec<(f32, egui::Color32)> = VEHICLE_SHARES
            .iter()
            .enumerate()
            .map(|(i, s)| (share_fraction(VEHICLE_SHARES, i), theme::rgb(s.color)))
            .collect();
        charts::draw_pie_chart(ui, &slices, 160.0);
        ui.vertical(|ui| {
            for share in VEHICLE_SHARES {
                ui.horizontal(|ui| {
                    charts::legend_item(ui, theme::rgb(share.color), share.name);
                    widgets::caption(ui, &format!("{}%", share.percent));
                });
            }
        });
    });
}

fn day_series_chart(ui: &mut egui::Ui) {
    let labels: Vec<&str> = ANALYTICS_SERIES.iter().map(|s| s.time).collect();
    let congestion = to_f32(ANALYTICS_SERIES, |s| s.congestion);
    let speed = to_f32(ANALYTICS_SERIES, |s| s.speed);
    let incidents: Vec<f32> = ANALYTICS_SERIES
        .iter()
        .map(|s| s.incidents as f32 * 10.0)
        .collect();
    let series = [
        Series { name: "Congestion %", color: theme::rgb(chart_color(3)), values: &congestion },
        Series { name: "Avg speed (mph)", color: theme::rgb(chart_color(0)), values: &speed },
        Series { name: "Incidents (x10)", color: theme::rgb(chart_color(4)), values: &incidents },
    ];
    charts::draw_line_chart(ui, &labels, &series, CHART_HEIGHT);
    charts::legend(ui, &series);

    let vehicles = to_f32(ANALYTICS_SERIES, |s| s.vehicles);
    let vehicle_series = [Series {
        name: "Vehicles",
        color: theme::rgb(chart_color(1)),
        values: &vehicles,
    }];
    ui.add_space(4.0);
    charts::draw_line_chart(ui, &labels, &vehicle_series, 120.0);
    charts::legend(ui, &vehicle_series);
}

fn peak_cards(ui: &mut egui::Ui) {
    let peak = peak_hour(ANALYTICS_SERIES).unwrap_or("n/a");
    ui.columns(2, |cols| {
        widgets::card(&mut cols[0], "Peak Hour", |ui| {
            ui.label(
                egui::RichText::new(peak)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_HEADING),
            );
            widgets::caption(ui, "Highest congestion of the day");
        });
        widgets::card(&mut cols[1], "Rush Hour Trend", |ui| {
            let Some(trends) = peak_trends(ANALYTICS_SERIES) else {
                widgets::caption(ui, "Not enough samples");
                return;
            };
            widgets::stat_row(ui, "Morning average", &format!("{}%", trends.morning));
            widgets::stat_row(ui, "Evening average", &format!("{}%", trends.evening));
            let (text, color) = if trends.evening_worse {
                (format!("Evening is {}% worse", trends.difference), theme::NEGATIVE)
            } else {
                (format!("Morning is {}% worse", -trends.difference), theme::POSITIVE)
            };
            widgets::badge(ui, &text, color);
        });
    });
}

fn weekly_table(ui: &mut egui::Ui) {
    egui::Grid::new("weekly_traffic")
        .striped(true)
        .num_columns(3)
        .show(ui, |ui| {
            ui.strong("Day");
            ui.strong("Volume");
            ui.strong("Congestion");
            ui.end_row();
            for row in WEEKLY_TRAFFIC {
                ui.label(row.day);
                ui.label(row.volume.to_string());
                ui.colored_label(
                    charts::congestion_color(row.congestion as f32 / 100.0),
                    format!("{}%", row.congestion),
                );
                ui.end_row();
            }
        });
}

fn pedestrian_chart(ui: &mut egui::Ui) {
    let labels: Vec<&str> = PEDESTRIAN_ACTIVITY.iter().map(|s| s.time).collect();
    let counts = to_f32(PEDESTRIAN_ACTIVITY, |s| s.count);
    let series = [Series {
        name: "Pedestrians",
        color: theme::rgb(chart_color(2)),
        values: &counts,
    }];
    charts::draw_bar_chart(ui, &labels, &series, 160.0);
}

fn compliance_table(ui: &mut egui::Ui) {
    for row in SIGN_COMPLIANCE {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(row.sign).size(theme::FONT_BODY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::badge(ui, &format!("{}% violations", row.violations), theme::NEGATIVE);
                widgets::badge(ui, &format!("{}% compliant", row.compliance), theme::POSITIVE);
            });
        });
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 6.0),
            egui::Sense::hover(),
        );
        let split = rect.min.x + rect.width() * row.compliance as f32 / 100.0;
        let painter = ui.painter_at(rect);
        painter.rect_filled(
            egui::Rect::from_min_max(rect.min, egui::pos2(split, rect.max.y)),
            2.0,
            theme::POSITIVE,
        );
        painter.rect_filled(
            egui::Rect::from_min_max(egui::pos2(split, rect.min.y), rect.max),
            2.0,
            theme::NEGATIVE,
        );
        ui.add_space(6.0);
    }
}

fn area_density(ui: &mut egui::Ui) {
    let rows: Vec<(&str, f32, egui::Color32)> = AREA_DENSITY
        .iter()
        .map(|a| {
            (
                a.area,
                a.density as f32,
                charts::congestion_color(a.density as f32 / 100.0),
            )
        })
        .collect();
    charts::draw_horizontal_bars(ui, &rows);
}

fn hourly_congestion(ui: &mut egui::Ui) {
    let labels: Vec<&str> = HOURLY_CONGESTION.iter().map(|s| s.time).collect();
    let level = to_f32(HOURLY_CONGESTION, |s| s.level);
    let speed = to_f32(HOURLY_CONGESTION, |s| s.speed);
    let series = [
        Series { name: "Congestion level", color: theme::NEGATIVE, values: &level },
        Series { name: "Speed (mph)", color: theme::PRIMARY, values: &speed },
    ];
    charts::draw_line_chart(ui, &labels, &series, CHART_HEIGHT);
    charts::legend(ui, &series);
}

pub(super) fn analysis_tab(ui: &mut egui::Ui, ui_state: &mut DashboardUi) {
    let (_, expand) = widgets::expandable_card(ui, "Traffic Analysis", daily_volume_chart);
    if expand {
        ui_state.expand(ExpandedPanel::TrafficAnalysis);
    }
    ui.add_space(theme::ITEM_SPACING);
    ui.columns(2, |cols| {
        widgets::card(&mut cols[0], "Vehicle Distribution", vehicle_distribution);
        widgets::card(&mut cols[1], "24 Hour Overview", day_series_chart);
    });
    ui.add_space(theme::ITEM_SPACING);
    peak_cards(ui);
    ui.add_space(theme::ITEM_SPACING);
    ui.columns(2, |cols| {
        widgets::card(&mut cols[0], "Weekly Traffic", weekly_table);
        widgets::card(&mut cols[1], "Pedestrian Activity", pedestrian_chart);
    });
    ui.add_space(theme::ITEM_SPACING);
    ui.columns(2, |cols| {
        widgets::card(&mut cols[0], "Road Sign Compliance", compliance_table);
        widgets::card(&mut cols[1], "Traffic Density by Area", area_density);
    });
}

/// Expanded report: everything on the analysis tab plus the detailed
/// vehicle table and the hourly congestion curve.
pub(super) fn traffic_report(ui: &mut egui::Ui) {
    widgets::card(ui, "Daily Volume", daily_volume_chart);
    ui.add_space(theme::ITEM_SPACING);
    widgets::card(ui, "Hourly Congestion", hourly_congestion);
    ui.add_space(theme::ITEM_SPACING);
    ui.columns(2, |cols| {
        widgets::card(&mut cols[0], "Vehicle Counts", |ui| vehicle_type_chart(ui, true));
        widgets::card(&mut cols[1], "Vehicle Distribution", vehicle_distribution);
    });
    ui.add_space(theme::ITEM_SPACING);
    peak_cards(ui);
}
