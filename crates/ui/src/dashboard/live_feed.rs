//! Live camera feed panel. The "video" is a painted street view; the mock
//! detections from [`LiveFeed`] are overlaid on it.

use bevy_egui::egui;

use simulation::fixtures::detections::{CameraStatus, CAMERA_SOURCES, FEED_CANVAS};
use simulation::live_feed::LiveFeed;

use crate::{overlay, theme, widgets};

fn paint_feed(ui: &mut egui::Ui, feed: &LiveFeed) {
    let width = ui.available_width();
    let height = width * FEED_CANVAS[1] / FEED_CANVAS[0];
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    overlay::paint_street(&painter, rect);
    for detection in &feed.boxes {
        overlay::paint_detection(&painter, rect, FEED_CANVAS, detection);
    }

    let camera = &CAMERA_SOURCES[feed.camera.min(CAMERA_SOURCES.len() - 1)];
    painter.text(
        rect.min + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format!("{} - {}", camera.id, camera.name),
        egui::FontId::proportional(11.0),
        egui::Color32::WHITE,
    );
    if feed.playing {
        painter.circle_filled(rect.right_top() + egui::vec2(-46.0, 14.0), 4.0, theme::NEGATIVE);
        painter.text(
            rect.right_top() + egui::vec2(-38.0, 14.0),
            egui::Align2::LEFT_CENTER,
            "LIVE",
            egui::FontId::proportional(10.0),
            egui::Color32::WHITE,
        );
    } else {
        painter.rect_filled(rect, 6.0, egui::Color32::from_black_alpha(110));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Paused",
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
    }
}

fn camera_picker(ui: &mut egui::Ui, feed: &mut LiveFeed) {
    let selected = CAMERA_SOURCES
        .get(feed.camera)
        .map(|c| format!("{} - {}", c.id, c.name))
        .unwrap_or_default();
    let mut choice = feed.camera;
    egui::ComboBox::from_id_salt("feed_camera")
        .selected_text(selected)
        .width(240.0)
        .show_ui(ui, |ui| {
            for (i, cam) in CAMERA_SOURCES.iter().enumerate() {
                let label = match cam.status {
                    CameraStatus::Active => format!("{} - {}", cam.id, cam.name),
                    CameraStatus::Maintenance => format!("{} - {} (maintenance)", cam.id, cam.name),
                };
                ui.selectable_value(&mut choice, i, label);
            }
        });
    if choice != feed.camera {
        feed.select_camera(choice);
    }
}

/// Feed with its controls. `detailed` adds the object counters and the
/// camera location line used by the expanded modal.
pub(super) fn feed_panel(ui: &mut egui::Ui, feed: &mut LiveFeed, detailed: bool) {
    ui.horizontal(|ui| {
        camera_picker(ui, feed);
        let play_label = if feed.playing { "Pause" } else { "Play" };
        if widgets::secondary_button(ui, play_label).clicked() {
            feed.toggle_playing();
        }
        let detect_label = if feed.detecting { "Detection: On" } else { "Detection: Off" };
        if widgets::secondary_button(ui, detect_label).clicked() {
            feed.toggle_detecting();
        }
    });
    ui.add_space(theme::ITEM_SPACING);
    paint_feed(ui, feed);

    if detailed {
        ui.add_space(theme::ITEM_SPACING);
        if let Some(camera) = CAMERA_SOURCES.get(feed.camera) {
            widgets::stat_row(ui, "Location", camera.location);
            let (status, color) = match camera.status {
                CameraStatus::Active => ("Active", theme::POSITIVE),
                CameraStatus::Maintenance => ("Maintenance", theme::WARNING),
            };
            widgets::stat_row_colored(ui, "Status", status, color);
        }
        widgets::section_separator(ui);
        widgets::subheading(ui, "Detected Objects");
        let counts = feed.counts;
        ui.columns(4, |cols| {
            for (col, (label, n)) in cols.iter_mut().zip([
                ("Cars", counts.cars),
                ("Trucks", counts.trucks),
                ("Buses", counts.buses),
                ("Pedestrians", counts.pedestrians),
            ]) {
                col.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(n.to_string())
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_HEADING),
                    );
                    widgets::caption(ui, label);
                });
            }
        });
    }
}
