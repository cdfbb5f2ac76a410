//! Showcase palette, font sizes and the global egui style.

use bevy_egui::{egui, EguiContexts};

use simulation::fixtures::Tint;

// Surfaces
pub const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(0xf8, 0xfa, 0xfc);
pub const CARD_BG: egui::Color32 = egui::Color32::WHITE;
pub const CARD_BORDER: egui::Color32 = egui::Color32::from_rgb(0xe2, 0xe8, 0xf0);
pub const MUTED_BG: egui::Color32 = egui::Color32::from_rgb(0xf1, 0xf5, 0xf9);
pub const HERO_BG: egui::Color32 = egui::Color32::from_rgb(0x0c, 0x4a, 0x6e);
pub const FOOTER_BG: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x17, 0x2a);

// Accents
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x02, 0x84, 0xc7);
pub const PRIMARY_SOFT: egui::Color32 = egui::Color32::from_rgb(0xe0, 0xf2, 0xfe);
pub const POSITIVE: egui::Color32 = egui::Color32::from_rgb(0x16, 0xa3, 0x4a);
pub const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(0xdc, 0x26, 0x26);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(0xd9, 0x77, 0x06);

// Text
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(0x33, 0x41, 0x55);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x17, 0x2a);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(0x64, 0x74, 0x8b);
pub const TEXT_ON_DARK: egui::Color32 = egui::Color32::from_rgb(0xf1, 0xf5, 0xf9);

pub const FONT_HERO: f32 = 40.0;
pub const FONT_TITLE: f32 = 26.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_SUBHEADING: f32 = 15.0;
pub const FONT_BODY: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

pub const CARD_CORNER_RADIUS: u8 = 8;
pub const WIDGET_CORNER_RADIUS: u8 = 6;
pub const SECTION_SPACING: f32 = 24.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Convert a fixture sRGB triple to an egui color.
pub fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

pub fn tint(t: Tint) -> egui::Color32 {
    rgb(t.rgb())
}

/// Same hue at `alpha` of full opacity, for soft badge backgrounds.
pub fn faded(color: egui::Color32, alpha: f32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

pub fn apply_showcase_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let inactive = MUTED_BG;
    let hover = egui::Color32::from_rgb(0xe2, 0xe8, 0xf0);
    let active = PRIMARY;

    style.visuals.widgets.noninteractive.bg_fill = CARD_BG;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT);
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = CARD_BG;
    style.visuals.panel_fill = PAGE_BG;
    style.visuals.extreme_bg_color = egui::Color32::WHITE;
    style.visuals.faint_bg_color = MUTED_BG;

    style.visuals.selection.bg_fill = PRIMARY_SOFT;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);
    style.visuals.hyperlink_color = PRIMARY;

    let window_rounding = egui::CornerRadius::same(CARD_CORNER_RADIUS);
    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(ITEM_SPACING, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_matches_fixture_triple() {
        assert_eq!(rgb([0x02, 0x84, 0xc7]), PRIMARY);
        assert_eq!(tint(Tint::Red), NEGATIVE);
    }

    #[test]
    fn test_faded_keeps_hue() {
        let c = faded(PRIMARY, 0.5);
        assert_eq!(c.a(), 127);
        let opaque = faded(PRIMARY, 2.0);
        assert_eq!(opaque, PRIMARY);
    }
}
