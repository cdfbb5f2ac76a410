//! Painter-drawn charts: grouped bars, multi-line series, pie slices and
//! legend items. Every chart allocates a fixed rect and draws into it, so
//! callers size them like any other widget.

use std::f32::consts::TAU;

use bevy_egui::egui;

use crate::theme;

const CHART_BG: egui::Color32 = egui::Color32::from_rgb(0xfb, 0xfc, 0xfe);
const GRID: egui::Color32 = egui::Color32::from_rgb(0xe5, 0xe7, 0xeb);
const AXIS_LABEL_HEIGHT: f32 = 16.0;
const GRID_LINES: usize = 4;

/// One named data series.
pub struct Series<'a> {
    pub name: &'a str,
    pub color: egui::Color32,
    pub values: &'a [f32],
}

/// Round `max` up to a readable axis limit (1, 2, 2.5 or 5 times a power of
/// ten). Returns 1 for empty or non-positive input.
pub fn nice_axis_max(max: f32) -> f32 {
    if !(max.is_finite() && max > 0.0) {
        return 1.0;
    }
    let magnitude = 10f32.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s + 1e-6)
        .unwrap_or(10.0);
    step * magnitude
}

fn series_max(series: &[Series]) -> f32 {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f32::max)
}

/// Start and end angle (radians, clockwise from 12 o'clock) of each slice.
pub fn slice_angles(fractions: &[f32]) -> Vec<(f32, f32)> {
    let mut start = 0.0;
    fractions
        .iter()
        .map(|f| {
            let end = start + f.max(0.0) * TAU;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

fn draw_grid(painter: &egui::Painter, plot: egui::Rect, axis_max: f32) {
    for i in 0..=GRID_LINES {
        let t = i as f32 / GRID_LINES as f32;
        let y = plot.max.y - t * plot.height();
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            egui::Stroke::new(0.5, GRID),
        );
        painter.text(
            egui::pos2(plot.min.x - 4.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{}", (axis_max * t).round()),
            egui::FontId::proportional(9.0),
            theme::TEXT_MUTED,
        );
    }
}

fn draw_x_labels(painter: &egui::Painter, plot: egui::Rect, labels: &[&str], centered: bool) {
    let n = labels.len();
    if n == 0 {
        return;
    }
    for (i, label) in labels.iter().enumerate() {
        let x = if centered {
            plot.min.x + (i as f32 + 0.5) / n as f32 * plot.width()
        } else if n == 1 {
            plot.center().x
        } else {
            plot.min.x + i as f32 / (n - 1) as f32 * plot.width()
        };
        painter.text(
            egui::pos2(x, plot.max.y + 3.0),
            egui::Align2::CENTER_TOP,
            *label,
            egui::FontId::proportional(9.0),
            theme::TEXT_MUTED,
        );
    }
}

fn plot_area(ui: &mut egui::Ui, height: f32) -> (egui::Painter, egui::Rect) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, CHART_BG);
    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + 32.0, rect.min.y + 6.0),
        egui::pos2(rect.max.x - 6.0, rect.max.y - AXIS_LABEL_HEIGHT),
    );
    (painter, plot)
}

/// Grouped vertical bars spanning the available width: one group per
/// label, one bar per series.
pub fn draw_bar_chart(
    ui: &mut egui::Ui,
    labels: &[&str],
    series: &[Series],
    height: f32,
) {
    let (painter, plot) = plot_area(ui, height);
    let axis_max = nice_axis_max(series_max(series));
    draw_grid(&painter, plot, axis_max);
    draw_x_labels(&painter, plot, labels, true);

    if labels.is_empty() || series.is_empty() {
        return;
    }
    let group_width = plot.width() / labels.len() as f32;
    let bar_width = (group_width * 0.7) / series.len() as f32;
    for (g, _) in labels.iter().enumerate() {
        let group_left = plot.min.x + g as f32 * group_width + group_width * 0.15;
        for (s, data) in series.iter().enumerate() {
            let Some(&v) = data.values.get(g) else {
                continue;
            };
            let h = (v / axis_max).clamp(0.0, 1.0) * plot.height();
            let left = group_left + s as f32 * bar_width;
            let bar = egui::Rect::from_min_max(
                egui::pos2(left, plot.max.y - h),
                egui::pos2(left + bar_width - 1.0, plot.max.y),
            );
            painter.rect_filled(bar, 2.0, data.color);
        }
    }
}

/// Horizontal bars with the label on the left and the value on the right.
pub fn draw_horizontal_bars(ui: &mut egui::Ui, rows: &[(&str, f32, egui::Color32)]) {
    let row_height = 22.0;
    let width = ui.available_width();
    let height = rows.len() as f32 * row_height;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let max = nice_axis_max(rows.iter().map(|r| r.1).fold(0.0, f32::max));
    let label_width = 90.0;
    let value_width = 44.0;
    let track = (rect.width() - label_width - value_width).max(1.0);

    for (i, (label, value, color)) in rows.iter().enumerate() {
        let y = rect.min.y + i as f32 * row_height + row_height / 2.0;
        painter.text(
            egui::pos2(rect.min.x, y),
            egui::Align2::LEFT_CENTER,
            *label,
            egui::FontId::proportional(11.0),
            theme::TEXT,
        );
        let bar = egui::Rect::from_min_size(
            egui::pos2(rect.min.x + label_width, y - 6.0),
            egui::vec2((value / max).clamp(0.0, 1.0) * track, 12.0),
        );
        painter.rect_filled(bar, 3.0, *color);
        painter.text(
            egui::pos2(rect.max.x, y),
            egui::Align2::RIGHT_CENTER,
            format!("{}", value.round()),
            egui::FontId::proportional(11.0),
            theme::TEXT_HEADING,
        );
    }
}

/// Multi-series line chart with points at each sample.
pub fn draw_line_chart(
    ui: &mut egui::Ui,
    labels: &[&str],
    series: &[Series],
    height: f32,
) {
    let (painter, plot) = plot_area(ui, height);
    let axis_max = nice_axis_max(series_max(series));
    draw_grid(&painter, plot, axis_max);
    draw_x_labels(&painter, plot, labels, false);

    for data in series {
        if data.values.len() < 2 {
            continue;
        }
        let n = data.values.len();
        let points: Vec<egui::Pos2> = data
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = plot.min.x + (i as f32 / (n - 1) as f32) * plot.width();
                let y = plot.max.y - (v / axis_max).clamp(0.0, 1.0) * plot.height();
                egui::pos2(x, y)
            })
            .collect();

        for window in points.windows(2) {
            painter.line_segment([window[0], window[1]], egui::Stroke::new(2.0, data.color));
        }
        for pt in &points {
            painter.circle_filled(*pt, 2.5, data.color);
        }
    }
}

/// Pie chart of `(fraction, color)` slices, drawn as a triangle fan.
pub fn draw_pie_chart(ui: &mut egui::Ui, slices: &[(f32, egui::Color32)], diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = diameter / 2.0 - 2.0;

    let fractions: Vec<f32> = slices.iter().map(|s| s.0).collect();
    let mut mesh = egui::Mesh::default();
    for ((start, end), (_, color)) in slice_angles(&fractions).into_iter().zip(slices) {
        let steps = (((end - start) / TAU) * 64.0).ceil().max(1.0) as usize;
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(center, *color);
        for k in 0..=steps {
            let a = start + (end - start) * k as f32 / steps as f32;
            // Clockwise from 12 o'clock; screen y grows downward.
            let p = center + radius * egui::vec2(a.sin(), -a.cos());
            mesh.colored_vertex(p, *color);
        }
        for k in 0..steps as u32 {
            mesh.add_triangle(base, base + 1 + k, base + 2 + k);
        }
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Green through yellow to red for a congestion level in `0..=1`.
pub fn congestion_color(level: f32) -> egui::Color32 {
    let t = level.clamp(0.0, 1.0);
    if t < 0.5 {
        let ratio = t * 2.0;
        egui::Color32::from_rgb((ratio * 255.0) as u8, 200, ((1.0 - ratio) * 100.0) as u8)
    } else {
        let ratio = (t - 0.5) * 2.0;
        egui::Color32::from_rgb(255, ((1.0 - ratio) * 200.0) as u8, 0)
    }
}

pub fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT),
    );
}

/// Legend row for a set of series.
pub fn legend(ui: &mut egui::Ui, series: &[Series]) {
    ui.horizontal_wrapped(|ui| {
        for s in series {
            legend_item(ui, s.color, s.name);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_axis_max_rounds_up() {
        assert_eq!(nice_axis_max(87.0), 100.0);
        assert_eq!(nice_axis_max(4200.0), 5000.0);
        assert_eq!(nice_axis_max(230.0), 250.0);
        assert_eq!(nice_axis_max(100.0), 100.0);
    }

    #[test]
    fn test_nice_axis_max_degenerate() {
        assert_eq!(nice_axis_max(0.0), 1.0);
        assert_eq!(nice_axis_max(-3.0), 1.0);
        assert_eq!(nice_axis_max(f32::NAN), 1.0);
    }

    #[test]
    fn test_slice_angles_cover_full_turn() {
        let slices = slice_angles(&[0.68, 0.12, 0.08, 0.07, 0.05]);
        assert_eq!(slices.len(), 5);
        assert_eq!(slices[0].0, 0.0);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        assert!((slices[4].1 - TAU).abs() < 1e-4);
    }

    #[test]
    fn test_congestion_color_endpoints() {
        assert_eq!(congestion_color(0.0), egui::Color32::from_rgb(0, 200, 100));
        assert_eq!(congestion_color(1.0), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(congestion_color(5.0), congestion_color(1.0));
    }
}
