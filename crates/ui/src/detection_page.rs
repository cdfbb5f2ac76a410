//! Object detection page: image preview, mock analysis, filters and results.
//!
//! The analysis itself lives in `simulation::detection`; this module draws it
//! and owns the uploaded preview texture.

use std::path::Path;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::detection::{summarize, ConfidenceTier, DetectionSettings, DetectionSummary, ImageAnalysis};
use simulation::fixtures::detections::{
    CameraStatus, DetectionBox, DetectionCategory, ANALYSIS_CANVAS, CAMERA_SOURCES, PROCESSING_TIME,
};

use crate::{image_preview, overlay, theme, widgets};

/// Name shown when the built-in sample scene stands in for an upload.
pub const SAMPLE_IMAGE_NAME: &str = "sample-intersection.jpg";

const CANVAS_MAX_WIDTH: f32 = 720.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionTab {
    #[default]
    Image,
    Video,
    Live,
}

impl DetectionTab {
    pub const ALL: [(DetectionTab, &'static str); 3] = [
        (DetectionTab::Image, "Image Analysis"),
        (DetectionTab::Video, "Video Analysis"),
        (DetectionTab::Live, "Live Camera"),
    ];
}

/// Decoded upload registered with egui.
#[derive(Debug, Clone)]
pub struct Preview {
    pub handle: Handle<Image>,
    pub texture: egui::TextureId,
    pub size: egui::Vec2,
}

#[derive(Resource, Debug, Default)]
pub struct DetectionPageUi {
    pub tab: DetectionTab,
    pub path_input: String,
    pub preview: Option<Preview>,
    /// Message from the last failed load, cleared by the next success.
    pub last_error: Option<String>,
}

/// What the results column should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Idle,
    Analyzing(f32),
    Ready {
        detections: Vec<DetectionBox>,
        summary: DetectionSummary,
    },
}

impl ResultsView {
    pub fn from_state(analysis: &ImageAnalysis, settings: &DetectionSettings) -> Self {
        if analysis.is_analyzing() {
            ResultsView::Analyzing(analysis.progress())
        } else if analysis.is_analyzed() {
            let detections = settings.visible_results();
            let summary = summarize(&detections);
            ResultsView::Ready {
                detections,
                summary,
            }
        } else {
            ResultsView::Idle
        }
    }
}

/// Button presses collected while drawing, applied once egui is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageAction {
    LoadFile,
    UseSample,
    Analyze,
    Reset,
}

/// Size of the preview canvas for a column `available` pixels wide.
pub fn canvas_size(available: f32) -> egui::Vec2 {
    let width = available.clamp(1.0, CANVAS_MAX_WIDTH);
    egui::vec2(width, width * ANALYSIS_CANVAS[1] / ANALYSIS_CANVAS[0])
}

/// Image rect of `image_size` fitted inside `frame`, centered.
pub fn fit_rect(frame: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return frame;
    }
    let scale = (frame.width() / image_size.x).min(frame.height() / image_size.y);
    egui::Rect::from_center_size(frame.center(), image_size * scale)
}

// =============================================================================
// Systems
// =============================================================================

pub fn detection_page(
    mut contexts: EguiContexts,
    mut page: ResMut<DetectionPageUi>,
    mut analysis: ResMut<ImageAnalysis>,
    mut settings: ResMut<DetectionSettings>,
    mut images: ResMut<Assets<Image>>,
) {
    let mut action = None;
    let ctx = contexts.ctx_mut();

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(theme::PAGE_BG)
                .inner_margin(egui::Margin::symmetric(24, 16)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                widgets::heading(ui, "Object Detection");
                widgets::caption(
                    ui,
                    "Identify vehicles, pedestrians and traffic signals in camera footage",
                );
                ui.add_space(theme::ITEM_SPACING);
                widgets::tab_bar(ui, &mut page.tab, &DetectionTab::ALL);
                ui.add_space(theme::SECTION_SPACING);

                match page.tab {
                    DetectionTab::Image => {
                        action = image_tab(ui, &mut page, &analysis, &mut settings);
                    }
                    DetectionTab::Video => video_tab(ui),
                    DetectionTab::Live => live_tab(ui),
                }
            });
        });

    if let Some(action) = action {
        apply_action(action, &mut contexts, &mut page, &mut analysis, &mut images);
    }
}

fn apply_action(
    action: PageAction,
    contexts: &mut EguiContexts,
    page: &mut DetectionPageUi,
    analysis: &mut ImageAnalysis,
    images: &mut Assets<Image>,
) {
    match action {
        PageAction::LoadFile => {
            let input = page.path_input.trim().to_string();
            let path = Path::new(&input);
            release_preview(page, contexts, images);
            match image_preview::load_image_file(path) {
                Ok(image) => {
                    let size = image.size();
                    let handle = images.add(image);
                    let texture = contexts.add_image(handle.clone());
                    page.preview = Some(Preview {
                        handle,
                        texture,
                        size: egui::vec2(size.x as f32, size.y as f32),
                    });
                    page.last_error = None;
                    let name = image_preview::display_name(path);
                    info!("Loaded {} ({}x{})", name, size.x, size.y);
                    analysis.load(name);
                }
                Err(e) => {
                    warn!("Failed to load image '{}': {}", input, e);
                    page.last_error = Some(e.to_string());
                    analysis.reset();
                }
            }
        }
        PageAction::UseSample => {
            release_preview(page, contexts, images);
            page.last_error = None;
            analysis.load(SAMPLE_IMAGE_NAME);
        }
        PageAction::Analyze => {
            if analysis.start() {
                info!(
                    "Analyzing {}",
                    analysis.image_name.as_deref().unwrap_or("image")
                );
            }
        }
        PageAction::Reset => {
            release_preview(page, contexts, images);
            page.path_input.clear();
            page.last_error = None;
            analysis.reset();
        }
    }
}

fn release_preview(
    page: &mut DetectionPageUi,
    contexts: &mut EguiContexts,
    images: &mut Assets<Image>,
) {
    if let Some(preview) = page.preview.take() {
        contexts.remove_image(&preview.handle);
        images.remove(&preview.handle);
    }
}

/// Leaving the page frees the preview and forgets the analysis.
pub fn leave_detection_page(
    mut contexts: EguiContexts,
    mut page: ResMut<DetectionPageUi>,
    mut analysis: ResMut<ImageAnalysis>,
    mut images: ResMut<Assets<Image>>,
) {
    release_preview(&mut page, &mut contexts, &mut images);
    *page = DetectionPageUi::default();
    analysis.reset();
}

// =============================================================================
// Image tab
// =============================================================================

fn image_tab(
    ui: &mut egui::Ui,
    page: &mut DetectionPageUi,
    analysis: &ImageAnalysis,
    settings: &mut DetectionSettings,
) -> Option<PageAction> {
    let mut action = None;
    let view = ResultsView::from_state(analysis, settings);

    let columns = widgets::responsive_columns(ui.available_width(), 420.0, 2);
    ui.columns(columns, |cols| {
        widgets::card(&mut cols[0], "Image", |ui| {
            paint_canvas(ui, page.preview.as_ref(), analysis, &view);
            ui.add_space(theme::ITEM_SPACING);
            if let Some(pending) = upload_controls(ui, page, analysis) {
                action = Some(pending);
            }
        });
        let side = cols.len() - 1;
        if side > 0 {
            cols[side].vertical(|ui| settings_card(ui, settings));
            results_card(&mut cols[side], &view);
        } else {
            cols[0].add_space(theme::SECTION_SPACING);
            settings_card(&mut cols[0], settings);
            results_card(&mut cols[0], &view);
        }
    });
    action
}

fn paint_canvas(
    ui: &mut egui::Ui,
    preview: Option<&Preview>,
    analysis: &ImageAnalysis,
    view: &ResultsView,
) {
    let size = canvas_size(ui.available_width());
    let (frame, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(frame);
    let image_rect = preview.map_or(frame, |p| fit_rect(frame, p.size));

    match (preview, &analysis.image_name) {
        (Some(preview), _) => {
            painter.rect_filled(frame, 6.0, egui::Color32::from_gray(20));
            painter.image(
                preview.texture,
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        (None, Some(_)) => overlay::paint_street(&painter, frame),
        (None, None) => {
            painter.rect_filled(frame, 6.0, theme::MUTED_BG);
            painter.rect_stroke(
                frame,
                6.0,
                egui::Stroke::new(1.0, theme::CARD_BORDER),
                egui::StrokeKind::Inside,
            );
            painter.text(
                frame.center(),
                egui::Align2::CENTER_CENTER,
                "Load an image or use the sample to begin",
                egui::FontId::proportional(theme::FONT_BODY),
                theme::TEXT_MUTED,
            );
        }
    }

    match view {
        ResultsView::Ready { detections, .. } => {
            for detection in detections {
                overlay::paint_detection(&painter, image_rect, ANALYSIS_CANVAS, detection);
            }
        }
        ResultsView::Analyzing(_) => {
            painter.rect_filled(frame, 6.0, egui::Color32::from_black_alpha(120));
            painter.text(
                frame.center(),
                egui::Align2::CENTER_CENTER,
                "Analyzing...",
                egui::FontId::proportional(theme::FONT_HEADING),
                egui::Color32::WHITE,
            );
        }
        ResultsView::Idle => {}
    }
}

fn upload_controls(
    ui: &mut egui::Ui,
    page: &mut DetectionPageUi,
    analysis: &ImageAnalysis,
) -> Option<PageAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut page.path_input)
                .hint_text("Path to a .png or .jpg file")
                .desired_width(260.0),
        );
        let has_path = !page.path_input.trim().is_empty();
        if ui
            .add_enabled_ui(has_path, |ui| widgets::secondary_button(ui, "Load"))
            .inner
            .clicked()
        {
            action = Some(PageAction::LoadFile);
        }
        if widgets::secondary_button(ui, "Use Sample Image").clicked() {
            action = Some(PageAction::UseSample);
        }
    });

    if let Some(err) = &page.last_error {
        ui.label(
            egui::RichText::new(err)
                .size(theme::FONT_SMALL)
                .color(theme::NEGATIVE),
        );
    }
    if let Some(name) = &analysis.image_name {
        widgets::stat_row(ui, "Image", name);
    }
    if analysis.is_analyzing() {
        let progress = analysis.progress();
        widgets::progress_bar(
            ui,
            progress,
            &format!("Analyzing... {:.0}%", progress * 100.0),
        );
    }

    ui.add_space(theme::ITEM_SPACING);
    ui.horizontal(|ui| {
        let label = if analysis.is_analyzed() { "Analyze Again" } else { "Analyze Image" };
        if ui
            .add_enabled_ui(analysis.can_analyze(), |ui| widgets::primary_button(ui, label))
            .inner
            .clicked()
        {
            action = Some(PageAction::Analyze);
        }
        if widgets::secondary_button(ui, "Reset").clicked() {
            action = Some(PageAction::Reset);
        }
    });
    action
}

fn settings_card(ui: &mut egui::Ui, settings: &mut DetectionSettings) {
    widgets::card(ui, "Detection Settings", |ui| {
        ui.label(egui::RichText::new("Confidence threshold").color(theme::TEXT));
        ui.add(
            egui::Slider::new(&mut settings.threshold, 0.0..=100.0)
                .step_by(1.0)
                .suffix("%"),
        );
        ui.add_space(theme::ITEM_SPACING);
        ui.label(egui::RichText::new("Detect").color(theme::TEXT));
        for category in DetectionCategory::ALL {
            let mut on = settings.is_enabled(category);
            if ui.checkbox(&mut on, category.label()).changed() {
                settings.set_enabled(category, on);
            }
        }
    });
}

fn results_card(ui: &mut egui::Ui, view: &ResultsView) {
    ui.add_space(theme::ITEM_SPACING);
    widgets::card(ui, "Results", |ui| match view {
        ResultsView::Idle => widgets::caption(ui, "Analyze an image to see detected objects."),
        ResultsView::Analyzing(progress) => {
            widgets::progress_bar(ui, *progress, "Processing");
        }
        ResultsView::Ready {
            detections,
            summary,
        } => {
            widgets::stat_row(ui, "Total objects", &summary.total.to_string());
            widgets::stat_row(
                ui,
                "Average confidence",
                &format!("{:.1}%", summary.average_confidence),
            );
            widgets::stat_row(ui, "Processing time", PROCESSING_TIME);
            ui.add_space(theme::ITEM_SPACING);
            ui.horizontal_wrapped(|ui| {
                for (group, count) in summary.per_group {
                    widgets::badge(
                        ui,
                        &format!("{}: {}", group.label(), count),
                        theme::rgb(group.rgb()),
                    );
                }
            });
            widgets::section_separator(ui);
            if detections.is_empty() {
                widgets::caption(ui, "No objects pass the current filters.");
            }
            for detection in detections {
                ui.horizontal(|ui| {
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(5.0, 9.0),
                        4.0,
                        theme::rgb(detection.class.rgb()),
                    );
                    ui.add_space(14.0);
                    ui.label(egui::RichText::new(detection.class.label()).color(theme::TEXT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let percent = detection.confidence_percent();
                        let tier = ConfidenceTier::for_percent(percent);
                        widgets::badge(ui, &format!("{percent:.0}%"), theme::rgb(tier.rgb()));
                    });
                });
            }
        }
    });
}

// =============================================================================
// Placeholder tabs
// =============================================================================

fn video_tab(ui: &mut egui::Ui) {
    widgets::card(ui, "Video Analysis", |ui| {
        widgets::paragraph(
            ui,
            "Upload recorded footage to track vehicles and pedestrians across frames.",
        );
        widgets::caption(ui, "Video analysis is not available in this demo.");
    });
}

fn live_tab(ui: &mut egui::Ui) {
    widgets::card(ui, "Live Camera", |ui| {
        widgets::paragraph(ui, "Connect to a city camera for continuous detection.");
        ui.add_space(theme::ITEM_SPACING);
        egui::Grid::new("detection_cameras")
            .num_columns(3)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for camera in CAMERA_SOURCES {
                    ui.label(egui::RichText::new(camera.id).strong());
                    ui.label(camera.location);
                    match camera.status {
                        CameraStatus::Active => widgets::badge(ui, "Active", theme::POSITIVE),
                        CameraStatus::Maintenance => {
                            widgets::badge(ui, "Maintenance", theme::WARNING)
                        }
                    };
                    ui.end_row();
                }
            });
        ui.add_space(theme::ITEM_SPACING);
        widgets::caption(ui, "Live streaming is available on the dashboard's Live Feed tab.");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_before_analysis() {
        let mut analysis = ImageAnalysis::default();
        let settings = DetectionSettings::default();
        assert_eq!(ResultsView::from_state(&analysis, &settings), ResultsView::Idle);
        analysis.load(SAMPLE_IMAGE_NAME);
        assert_eq!(ResultsView::from_state(&analysis, &settings), ResultsView::Idle);
    }

    #[test]
    fn test_analyzing_reports_progress() {
        let mut analysis = ImageAnalysis::default();
        analysis.load(SAMPLE_IMAGE_NAME);
        assert!(analysis.start());
        analysis.advance(1.25);
        let settings = DetectionSettings::default();
        match ResultsView::from_state(&analysis, &settings) {
            ResultsView::Analyzing(p) => assert!((p - 0.5).abs() < 1e-4),
            other => panic!("expected Analyzing, got {other:?}"),
        }
    }

    #[test]
    fn test_ready_view_respects_filters() {
        let mut analysis = ImageAnalysis::default();
        analysis.load(SAMPLE_IMAGE_NAME);
        analysis.start();
        analysis.advance(10.0);

        let mut settings = DetectionSettings::default();
        let ResultsView::Ready { detections, summary } =
            ResultsView::from_state(&analysis, &settings)
        else {
            panic!("analysis should be complete");
        };
        assert_eq!(summary.total, detections.len());
        assert!(!detections.is_empty());

        settings.threshold = 100.0;
        let ResultsView::Ready { detections, summary } =
            ResultsView::from_state(&analysis, &settings)
        else {
            panic!("analysis should be complete");
        };
        assert!(detections.is_empty());
        assert_eq!(summary.average_confidence, 0.0);
    }

    #[test]
    fn test_canvas_keeps_aspect_and_caps_width() {
        let small = canvas_size(360.0);
        assert_eq!(small.x, 360.0);
        assert!((small.y / small.x - ANALYSIS_CANVAS[1] / ANALYSIS_CANVAS[0]).abs() < 1e-5);
        assert_eq!(canvas_size(5000.0).x, CANVAS_MAX_WIDTH);
    }

    #[test]
    fn test_fit_rect_letterboxes_wide_images() {
        let frame = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 200.0));
        let fitted = fit_rect(frame, egui::vec2(800.0, 200.0));
        assert_eq!(fitted.size(), egui::vec2(400.0, 100.0));
        assert_eq!(fitted.center(), frame.center());
    }

    #[test]
    fn test_fit_rect_with_empty_image_uses_frame() {
        let frame = egui::Rect::from_min_size(egui::pos2(5.0, 5.0), egui::vec2(100.0, 50.0));
        assert_eq!(fit_rect(frame, egui::Vec2::ZERO), frame);
    }
}
