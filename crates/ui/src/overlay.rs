//! Detection box overlays shared by the live feed and the detection page.

use bevy_egui::egui;

use simulation::fixtures::detections::DetectionBox;

use crate::theme;

/// Screen rect of `detection`, laid out on a `canvas`-sized source image
/// that is drawn into `frame`.
pub fn box_rect(frame: egui::Rect, canvas: [f32; 2], detection: &DetectionBox) -> egui::Rect {
    let sx = frame.width() / canvas[0].max(1.0);
    let sy = frame.height() / canvas[1].max(1.0);
    egui::Rect::from_min_size(
        frame.min + egui::vec2(detection.x * sx, detection.y * sy),
        egui::vec2(detection.width * sx, detection.height * sy),
    )
}

/// Outline plus a caption tag above the top-left corner.
pub fn paint_detection(
    painter: &egui::Painter,
    frame: egui::Rect,
    canvas: [f32; 2],
    detection: &DetectionBox,
) {
    let color = theme::rgb(detection.class.rgb());
    let r = box_rect(frame, canvas, detection);
    painter.rect_stroke(r, 2.0, egui::Stroke::new(2.0, color), egui::StrokeKind::Inside);

    let galley = painter.layout_no_wrap(
        detection.caption(),
        egui::FontId::proportional(10.0),
        egui::Color32::WHITE,
    );
    let tag = egui::Rect::from_min_size(
        r.min - egui::vec2(0.0, galley.size().y + 2.0),
        galley.size() + egui::vec2(6.0, 2.0),
    );
    painter.rect_filled(tag, 2.0, color);
    painter.galley(tag.min + egui::vec2(3.0, 1.0), galley, egui::Color32::WHITE);
}

/// A stylized street scene standing in for camera footage.
pub fn paint_street(painter: &egui::Painter, rect: egui::Rect) {
    const SKY: egui::Color32 = egui::Color32::from_rgb(0x1e, 0x29, 0x3b);
    const ROAD: egui::Color32 = egui::Color32::from_rgb(0x33, 0x3d, 0x4d);

    painter.rect_filled(rect, 6.0, SKY);
    let horizon = rect.min.y + rect.height() * 0.35;
    let road = vec![
        egui::pos2(rect.center().x - rect.width() * 0.08, horizon),
        egui::pos2(rect.center().x + rect.width() * 0.08, horizon),
        egui::pos2(rect.max.x, rect.max.y),
        egui::pos2(rect.min.x, rect.max.y),
    ];
    painter.add(egui::Shape::convex_polygon(road, ROAD, egui::Stroke::NONE));
    for i in 0..6 {
        let t0 = i as f32 / 6.0;
        let t1 = t0 + 0.08;
        let y0 = horizon + t0 * (rect.max.y - horizon);
        let y1 = horizon + t1 * (rect.max.y - horizon);
        painter.line_segment(
            [egui::pos2(rect.center().x, y0), egui::pos2(rect.center().x, y1)],
            egui::Stroke::new(1.0 + 2.0 * t0, egui::Color32::from_gray(220)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::fixtures::detections::{ObjectClass, ANALYSIS_CANVAS, FEED_CANVAS};

    fn sample_box() -> DetectionBox {
        DetectionBox {
            id: 1,
            class: ObjectClass::Car,
            confidence: 0.9,
            x: 100.0,
            y: 50.0,
            width: 80.0,
            height: 40.0,
        }
    }

    #[test]
    fn test_box_rect_at_native_size() {
        let frame = egui::Rect::from_min_size(
            egui::pos2(10.0, 20.0),
            egui::vec2(FEED_CANVAS[0], FEED_CANVAS[1]),
        );
        let r = box_rect(frame, FEED_CANVAS, &sample_box());
        assert_eq!(r.min, egui::pos2(110.0, 70.0));
        assert_eq!(r.size(), egui::vec2(80.0, 40.0));
    }

    #[test]
    fn test_box_rect_scales_with_frame() {
        let frame = egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(ANALYSIS_CANVAS[0] / 2.0, ANALYSIS_CANVAS[1] / 2.0),
        );
        let r = box_rect(frame, ANALYSIS_CANVAS, &sample_box());
        assert_eq!(r.min, egui::pos2(50.0, 25.0));
        assert_eq!(r.size(), egui::vec2(40.0, 20.0));
    }
}
