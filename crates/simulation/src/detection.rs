//! Mock image analysis for the detection page.
//!
//! The analysis is a timer: once started it runs for
//! [`ANALYSIS_DURATION_SECS`] and then exposes the fixture detections,
//! filtered by the user's confidence threshold and enabled categories.

use bevy::prelude::*;

use crate::app_state::AppState;
use crate::config::{ANALYSIS_DURATION_SECS, DEFAULT_CONFIDENCE_THRESHOLD};
use crate::fixtures::detections::{DetectionBox, DetectionCategory, SummaryGroup, ANALYSIS_RESULTS};

/// Where the analysis workflow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnalysisPhase {
    /// No image chosen.
    #[default]
    Empty,
    /// An image is loaded but not analyzed.
    Loaded,
    /// Analysis running; `elapsed` seconds so far.
    Analyzing { elapsed: f32 },
    /// Results are available.
    Analyzed,
}

/// State of the detection page's image analysis.
#[derive(Resource, Debug, Clone, Default)]
pub struct ImageAnalysis {
    pub phase: AnalysisPhase,
    /// Display name of the loaded image.
    pub image_name: Option<String>,
}

impl ImageAnalysis {
    /// A new image replaces the previous one and discards old results.
    pub fn load(&mut self, name: impl Into<String>) {
        self.image_name = Some(name.into());
        self.phase = AnalysisPhase::Loaded;
    }

    pub fn can_analyze(&self) -> bool {
        self.image_name.is_some()
            && matches!(self.phase, AnalysisPhase::Loaded | AnalysisPhase::Analyzed)
    }

    /// Start analyzing. Returns `false` if there is nothing to analyze or an
    /// analysis is already running.
    pub fn start(&mut self) -> bool {
        if !self.can_analyze() {
            return false;
        }
        self.phase = AnalysisPhase::Analyzing { elapsed: 0.0 };
        true
    }

    /// Advance a running analysis by `dt` seconds. Returns `true` on the
    /// call that completes it.
    pub fn advance(&mut self, dt: f32) -> bool {
        let AnalysisPhase::Analyzing { elapsed } = self.phase else {
            return false;
        };
        let elapsed = elapsed + dt;
        if elapsed >= ANALYSIS_DURATION_SECS {
            self.phase = AnalysisPhase::Analyzed;
            true
        } else {
            self.phase = AnalysisPhase::Analyzing { elapsed };
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Analyzing { .. })
    }

    pub fn is_analyzed(&self) -> bool {
        self.phase == AnalysisPhase::Analyzed
    }

    /// Fraction of the analysis completed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        match self.phase {
            AnalysisPhase::Empty | AnalysisPhase::Loaded => 0.0,
            AnalysisPhase::Analyzing { elapsed } => (elapsed / ANALYSIS_DURATION_SECS).min(1.0),
            AnalysisPhase::Analyzed => 1.0,
        }
    }
}

/// User-adjustable detection filters.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DetectionSettings {
    /// Minimum confidence in percent.
    pub threshold: f32,
    enabled: [bool; 5],
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            enabled: [true; 5],
        }
    }
}

impl DetectionSettings {
    fn slot(category: DetectionCategory) -> usize {
        DetectionCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0)
    }

    pub fn is_enabled(&self, category: DetectionCategory) -> bool {
        self.enabled[Self::slot(category)]
    }

    pub fn set_enabled(&mut self, category: DetectionCategory, on: bool) {
        self.enabled[Self::slot(category)] = on;
    }

    /// Whether a detection passes the threshold and category filters.
    pub fn accepts(&self, detection: &DetectionBox) -> bool {
        detection.confidence_percent() >= self.threshold
            && self.is_enabled(detection.class.category())
    }

    pub fn filter(&self, detections: &[DetectionBox]) -> Vec<DetectionBox> {
        detections.iter().copied().filter(|d| self.accepts(d)).collect()
    }

    /// The analysis results visible under the current settings.
    pub fn visible_results(&self) -> Vec<DetectionBox> {
        self.filter(ANALYSIS_RESULTS)
    }
}

/// Aggregates shown beside the analyzed image.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionSummary {
    pub total: usize,
    /// Mean confidence in percent, `0` when empty.
    pub average_confidence: f32,
    pub per_group: [(SummaryGroup, usize); 4],
}

pub fn summarize(detections: &[DetectionBox]) -> DetectionSummary {
    let mut per_group = SummaryGroup::ALL.map(|g| (g, 0));
    for d in detections {
        let group = d.class.category().summary_group();
        if let Some(entry) = per_group.iter_mut().find(|(g, _)| *g == group) {
            entry.1 += 1;
        }
    }
    let average_confidence = if detections.is_empty() {
        0.0
    } else {
        detections.iter().map(|d| d.confidence_percent()).sum::<f32>() / detections.len() as f32
    };
    DetectionSummary {
        total: detections.len(),
        average_confidence,
        per_group,
    }
}

/// Badge color band for a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    Excellent,
    High,
    Fair,
    Low,
}

impl ConfidenceTier {
    /// Tier for a confidence in percent. Bounds are exclusive.
    pub fn for_percent(percent: f32) -> Self {
        if percent > 95.0 {
            ConfidenceTier::Excellent
        } else if percent > 90.0 {
            ConfidenceTier::High
        } else if percent > 85.0 {
            ConfidenceTier::Fair
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            ConfidenceTier::Excellent => [0x22, 0xc5, 0x5e],
            ConfidenceTier::High => [0x16, 0xa3, 0x4a],
            ConfidenceTier::Fair => [0xf5, 0x9e, 0x0b],
            ConfidenceTier::Low => [0xd9, 0x77, 0x06],
        }
    }
}

/// System: drive a running analysis from frame time.
pub fn tick_image_analysis(time: Res<Time>, mut analysis: ResMut<ImageAnalysis>) {
    if !analysis.is_analyzing() {
        return;
    }
    if analysis.advance(time.delta_secs()) {
        info!(
            "Analysis of {} complete",
            analysis.image_name.as_deref().unwrap_or("image")
        );
    }
}

pub struct DetectionPlugin;

impl Plugin for DetectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImageAnalysis>()
            .init_resource::<DetectionSettings>()
            .add_systems(
                Update,
                tick_image_analysis.run_if(in_state(AppState::Detection)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::detections::ObjectClass;

    #[test]
    fn test_cannot_analyze_without_image() {
        let mut analysis = ImageAnalysis::default();
        assert!(!analysis.start());
        assert_eq!(analysis.phase, AnalysisPhase::Empty);
    }

    #[test]
    fn test_full_workflow() {
        let mut analysis = ImageAnalysis::default();
        analysis.load("intersection.png");
        assert_eq!(analysis.phase, AnalysisPhase::Loaded);
        assert!(analysis.start());
        assert!(!analysis.start(), "already running");

        assert!(!analysis.advance(1.0));
        assert!((analysis.progress() - 0.4).abs() < 1e-6);
        assert!(!analysis.advance(1.0));
        assert!(analysis.advance(0.5));
        assert!(analysis.is_analyzed());

        // Re-analysis from results is allowed.
        assert!(analysis.start());
    }

    #[test]
    fn test_new_image_returns_to_loaded() {
        let mut analysis = ImageAnalysis::default();
        analysis.load("a.png");
        analysis.start();
        analysis.advance(3.0);
        analysis.load("b.jpg");
        assert_eq!(analysis.phase, AnalysisPhase::Loaded);
        assert_eq!(analysis.image_name.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn test_reset_clears_image() {
        let mut analysis = ImageAnalysis::default();
        analysis.load("a.png");
        analysis.reset();
        assert_eq!(analysis.phase, AnalysisPhase::Empty);
        assert!(analysis.image_name.is_none());
        assert_eq!(analysis.progress(), 0.0);
    }

    #[test]
    fn test_default_threshold_keeps_all_results() {
        let settings = DetectionSettings::default();
        assert_eq!(settings.visible_results().len(), 5);
    }

    #[test]
    fn test_threshold_filters_results() {
        let settings = DetectionSettings {
            threshold: 90.0,
            ..Default::default()
        };
        let visible = settings.visible_results();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|d| d.confidence_percent() >= 90.0));
    }

    #[test]
    fn test_disabled_category_hidden() {
        let mut settings = DetectionSettings::default();
        settings.set_enabled(DetectionCategory::Vehicles, false);
        let visible = settings.visible_results();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|d| d.class.category() != DetectionCategory::Vehicles));
        assert!(!settings.is_enabled(DetectionCategory::Vehicles));
    }

    #[test]
    fn test_summary_counts_groups() {
        let summary = summarize(ANALYSIS_RESULTS);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.per_group[0], (SummaryGroup::Vehicles, 3));
        assert_eq!(summary.per_group[1], (SummaryGroup::Pedestrians, 1));
        assert_eq!(summary.per_group[2], (SummaryGroup::Infrastructure, 1));
        assert_eq!(summary.per_group[3], (SummaryGroup::Other, 0));
        // (98.2 + 95.7 + 91.3 + 88.5 + 86.9) / 5 = 92.12
        assert!((summary.average_confidence - 92.12).abs() < 0.01);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_confidence, 0.0);
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(ConfidenceTier::for_percent(98.2), ConfidenceTier::Excellent);
        assert_eq!(ConfidenceTier::for_percent(95.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::for_percent(91.3), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::for_percent(88.5), ConfidenceTier::Fair);
        assert_eq!(ConfidenceTier::for_percent(85.0), ConfidenceTier::Low);
    }

    #[test]
    fn test_accepts_checks_both_filters() {
        let settings = DetectionSettings::default();
        let weak = DetectionBox {
            id: 9,
            class: ObjectClass::Car,
            confidence: 0.5,
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        };
        assert!(!settings.accepts(&weak));
    }
}
