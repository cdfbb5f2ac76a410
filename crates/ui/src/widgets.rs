//! Reusable themed widget helpers for the showcase pages.
//!
//! These wrap the egui patterns every page repeats (cards, stat tiles,
//! badges, headings, label/value rows) with the styling constants from
//! [`crate::theme`], so panels never hand-pick colors or spacing.

use bevy_egui::egui;

use simulation::fixtures::{HeadlineStat, Trend};

use crate::theme;

// =============================================================================
// Cards
// =============================================================================

/// White rounded card with a thin border.
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::CARD_BG)
        .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(14))
}

/// A card with a title row. Returns whatever `add_contents` returns.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            heading(ui, title);
            ui.add_space(theme::ITEM_SPACING);
            add_contents(ui)
        })
        .inner
}

/// A card whose title row ends with an "Expand" button. Returns the inner
/// value and whether the button was clicked.
pub fn expandable_card<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> (R, bool) {
    card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let mut expand = false;
            ui.horizontal(|ui| {
                heading(ui, title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    expand = ui.small_button("Expand").clicked();
                });
            });
            ui.add_space(theme::ITEM_SPACING);
            (add_contents(ui), expand)
        })
        .inner
}

/// Headline number tile: title, big value, colored change line.
pub fn stat_card(ui: &mut egui::Ui, stat: &HeadlineStat) {
    let accent = theme::tint(stat.tint);
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().circle_filled(dot.center(), 5.0, accent);
            ui.label(
                egui::RichText::new(stat.title)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
        });
        ui.label(
            egui::RichText::new(stat.value)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_HEADING),
        );
        let (arrow, color) = trend_marker(stat.trend);
        ui.label(
            egui::RichText::new(format!("{arrow} {}", stat.change))
                .size(theme::FONT_SMALL)
                .color(color),
        );
    });
}

/// Arrow glyph and color for a change line.
pub fn trend_marker(trend: Trend) -> (&'static str, egui::Color32) {
    match trend {
        Trend::Up => ("▲", theme::POSITIVE),
        Trend::Down => ("▼", theme::NEGATIVE),
    }
}

// =============================================================================
// Text
// =============================================================================

pub fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

pub fn subheading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SUBHEADING)
            .color(theme::TEXT_HEADING),
    );
}

/// Muted small text line.
pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}

/// Body paragraph that wraps to the available width.
pub fn paragraph(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .color(theme::TEXT),
        )
        .wrap(),
    );
}

/// A label-value row: muted label on the left, value on the right.
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
    stat_row_colored(ui, label, value, theme::TEXT_HEADING);
}

pub fn stat_row_colored(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(theme::FONT_BODY)
                    .strong()
                    .color(color),
            );
        });
    });
}

// =============================================================================
// Badges and buttons
// =============================================================================

/// Pill-shaped label on a faded background of the same color.
pub fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> egui::Response {
    egui::Frame::NONE
        .fill(theme::faded(color, 0.15))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(theme::FONT_SMALL)
                    .strong()
                    .color(color),
            );
        })
        .response
}

/// Filled call-to-action button.
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(theme::PRIMARY)
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add(button)
}

/// Outlined secondary button.
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(theme::TEXT_HEADING),
    )
    .fill(theme::CARD_BG)
    .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add(button)
}

/// Row of mutually exclusive tabs. Updates `current` on click and returns
/// true when the selection changed.
pub fn tab_bar<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    current: &mut T,
    tabs: &[(T, &str)],
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for &(tab, label) in tabs {
            let selected = *current == tab;
            let text = egui::RichText::new(label).size(theme::FONT_BODY);
            let text = if selected { text.strong().color(theme::PRIMARY) } else { text };
            if ui.selectable_label(selected, text).clicked() && !selected {
                *current = tab;
                changed = true;
            }
        }
    });
    changed
}

/// Themed progress bar with a text overlay. `fraction` is clamped to
/// `0.0..=1.0`.
pub fn progress_bar(ui: &mut egui::Ui, fraction: f32, text: &str) -> egui::Response {
    ui.add(
        egui::ProgressBar::new(fraction.clamp(0.0, 1.0))
            .fill(theme::PRIMARY)
            .text(text)
            .desired_width(ui.available_width()),
    )
}

// =============================================================================
// Layout
// =============================================================================

/// Number of equal columns that fit `available` width when each needs at
/// least `min_width`, capped at `max`.
pub fn responsive_columns(available: f32, min_width: f32, max: usize) -> usize {
    if min_width <= 0.0 {
        return max.max(1);
    }
    ((available / min_width).floor() as usize).clamp(1, max.max(1))
}

/// Add a separator with consistent spacing above and below.
pub fn section_separator(ui: &mut egui::Ui) {
    ui.add_space(theme::ITEM_SPACING);
    ui.separator();
    ui.add_space(theme::ITEM_SPACING);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responsive_columns_fits_width() {
        assert_eq!(responsive_columns(1200.0, 280.0, 4), 4);
        assert_eq!(responsive_columns(700.0, 280.0, 4), 2);
        assert_eq!(responsive_columns(100.0, 280.0, 4), 1);
    }

    #[test]
    fn test_responsive_columns_degenerate_inputs() {
        assert_eq!(responsive_columns(500.0, 0.0, 3), 3);
        assert_eq!(responsive_columns(500.0, 100.0, 0), 1);
    }

    #[test]
    fn test_trend_marker_colors() {
        assert_eq!(trend_marker(Trend::Up).1, theme::POSITIVE);
        assert_eq!(trend_marker(Trend::Down).0, "▼");
    }
}
