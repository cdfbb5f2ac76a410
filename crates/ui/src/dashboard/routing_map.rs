//! Stylized routing map: a street grid with congestion markers and the
//! alternative routes drawn as polylines over it.

use bevy::prelude::*;
use bevy_egui::egui;

use simulation::fixtures::incidents::Severity;
use simulation::fixtures::routing::{MapBounds, ALTERNATIVE_ROUTES, CONGESTION_POINTS};

use crate::{theme, widgets};

const MAP_BG: egui::Color32 = egui::Color32::from_rgb(0xee, 0xf2, 0xf6);
const STREET: egui::Color32 = egui::Color32::from_rgb(0xd6, 0xdd, 0xe6);
const MAIN_ROAD: egui::Color32 = egui::Color32::from_rgb(0xb8, 0xc2, 0xcf);
const ROUTE: egui::Color32 = egui::Color32::from_rgb(0x22, 0xc5, 0x5e);
const GRID_STREETS: usize = 8;
/// Fraction of the fixture extent left as padding around the map.
const MAP_MARGIN: f64 = 0.15;

/// Marker radius in points for a congestion severity.
pub(crate) fn marker_radius(severity: Severity) -> f32 {
    match severity {
        Severity::High => 16.0,
        Severity::Medium => 12.0,
        Severity::Low => 9.0,
    }
}

/// Map a normalized `(u, v)` projection into `rect`.
pub(crate) fn to_screen(rect: egui::Rect, uv: (f32, f32)) -> egui::Pos2 {
    egui::pos2(
        rect.min.x + uv.0 * rect.width(),
        rect.min.y + uv.1 * rect.height(),
    )
}

fn paint_streets(painter: &egui::Painter, rect: egui::Rect) {
    for i in 1..GRID_STREETS {
        let t = i as f32 / GRID_STREETS as f32;
        let x = rect.min.x + t * rect.width();
        let y = rect.min.y + t * rect.height();
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            egui::Stroke::new(1.0, STREET),
        );
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(1.0, STREET),
        );
    }
    // Two arterials crossing at the center
    let c = rect.center();
    painter.line_segment(
        [egui::pos2(rect.min.x, c.y), egui::pos2(rect.max.x, c.y)],
        egui::Stroke::new(6.0, MAIN_ROAD),
    );
    painter.line_segment(
        [egui::pos2(c.x, rect.min.y), egui::pos2(c.x, rect.max.y)],
        egui::Stroke::new(6.0, MAIN_ROAD),
    );
}

fn paint_congestion(painter: &egui::Painter, rect: egui::Rect, bounds: &MapBounds) {
    for point in CONGESTION_POINTS {
        let at = to_screen(rect, bounds.project(point.at));
        let color = theme::rgb(point.severity.rgb());
        let radius = marker_radius(point.severity);
        painter.circle_filled(at, radius, theme::faded(color, 0.35));
        painter.circle_stroke(at, radius, egui::Stroke::new(1.5, color));
        painter.circle_filled(at, 3.0, color);
    }
}

fn paint_routes(
    painter: &egui::Painter,
    rect: egui::Rect,
    bounds: &MapBounds,
    selected: Option<usize>,
) {
    for (i, route) in ALTERNATIVE_ROUTES.iter().enumerate() {
        let points: Vec<egui::Pos2> = route
            .waypoints
            .iter()
            .map(|p| to_screen(rect, bounds.project(*p)))
            .collect();
        let is_selected = selected == Some(i);
        let stroke = if is_selected {
            egui::Stroke::new(4.0, ROUTE)
        } else {
            egui::Stroke::new(2.0, theme::faded(ROUTE, 0.45))
        };
        painter.add(egui::Shape::line(points, stroke));
    }
}

/// Full routing map with route selection buttons and the selected route's
/// summary below it.
pub(crate) fn routing_map(ui: &mut egui::Ui, selected: &mut Option<usize>, height: f32) {
    let bounds = MapBounds::covering_fixtures(MAP_MARGIN);
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, MAP_BG);
    paint_streets(&painter, rect);
    paint_routes(&painter, rect, &bounds, *selected);
    paint_congestion(&painter, rect, &bounds);

    ui.add_space(theme::ITEM_SPACING);
    ui.horizontal_wrapped(|ui| {
        for (i, route) in ALTERNATIVE_ROUTES.iter().enumerate() {
            let is_selected = *selected == Some(i);
            if ui
                .selectable_label(is_selected, route.button_label())
                .clicked()
            {
                *selected = if is_selected { None } else { Some(i) };
                info!("Route selection: {:?}", selected.map(|r| ALTERNATIVE_ROUTES[r].id));
            }
        }
    });

    if let Some(route) = selected.and_then(|i| ALTERNATIVE_ROUTES.get(i)) {
        ui.add_space(4.0);
        widgets::stat_row(ui, "From", route.origin);
        widgets::stat_row(ui, "To", route.destination);
        widgets::stat_row(ui, "Distance", route.distance);
        widgets::caption(ui, &route.summary());
    }
}

/// Map with congestion markers only, for the twin's congestion mode.
pub(crate) fn congestion_map(ui: &mut egui::Ui, height: f32) {
    let bounds = MapBounds::covering_fixtures(MAP_MARGIN);
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, MAP_BG);
    paint_streets(&painter, rect);
    paint_congestion(&painter, rect, &bounds);

    ui.add_space(theme::ITEM_SPACING);
    ui.horizontal_wrapped(|ui| {
        for severity in [Severity::High, Severity::Medium, Severity::Low] {
            crate::charts::legend_item(ui, theme::rgb(severity.rgb()), severity.label());
        }
    });
    for point in CONGESTION_POINTS {
        widgets::stat_row_colored(
            ui,
            point.name,
            point.severity.label(),
            theme::rgb(point.severity.rgb()),
        );
    }
}
