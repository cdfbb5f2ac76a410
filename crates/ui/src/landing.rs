//! Landing page: hero, feature grid, dataset blurb, dashboard promo, footer.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use chrono::{Datelike, Local};

use simulation::app_state::AppState;
use simulation::fixtures::landing::{
    copyright_line, FeatureCard, BRAND_LONG, DATASET_BODY, DATASET_FACTS, DATASET_TITLE,
    FEATURES, FEATURES_SUBTITLE, FEATURES_TITLE, FOOTER_BLURB, FOOTER_COLUMNS, FOOTER_LEGAL,
    HERO_BADGE, HERO_HIGHLIGHTS, HERO_SUBTITLE, HERO_TITLE, HERO_TITLE_ACCENT, PROMO_POINTS,
    PROMO_SUBTITLE, PROMO_TITLE,
};

use crate::navigation::go_to;
use crate::{theme, widgets};

const CONTENT_MAX_WIDTH: f32 = 1100.0;
const FEATURE_MIN_WIDTH: f32 = 280.0;

/// Calendar year shown in the footer, fixed at startup.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterYear(pub i32);

impl Default for FooterYear {
    fn default() -> Self {
        Self(current_year())
    }
}

/// Current year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn landing_page(
    mut contexts: EguiContexts,
    year: Res<FooterYear>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let ctx = contexts.ctx_mut();
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::PAGE_BG))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    hero(ui, &mut next_state);
                    centered(ui, |ui| {
                        ui.add_space(theme::SECTION_SPACING * 2.0);
                        features(ui);
                        ui.add_space(theme::SECTION_SPACING * 2.0);
                        dataset(ui);
                        ui.add_space(theme::SECTION_SPACING * 2.0);
                        promo(ui, &mut next_state);
                        ui.add_space(theme::SECTION_SPACING * 2.0);
                    });
                    footer(ui, year.0);
                });
        });
}

/// Lay `add_contents` out in a column no wider than the content width,
/// centered horizontally.
fn centered(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui);
        });
    });
}

fn hero(ui: &mut egui::Ui, next_state: &mut NextState<AppState>) {
    egui::Frame::NONE
        .fill(theme::HERO_BG)
        .inner_margin(egui::Margin::symmetric(24, 48))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            centered(ui, |ui| {
                widgets::badge(ui, HERO_BADGE, theme::PRIMARY_SOFT);
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(HERO_TITLE)
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new(HERO_TITLE_ACCENT)
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(egui::Color32::from_rgb(0x7d, 0xd3, 0xfc)),
                );
                ui.add_space(12.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(HERO_SUBTITLE)
                            .size(theme::FONT_SUBHEADING)
                            .color(theme::TEXT_ON_DARK),
                    )
                    .wrap(),
                );
                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    if widgets::primary_button(ui, "Get Started").clicked() {
                        go_to(next_state, AppState::Landing, AppState::Detection);
                    }
                    if widgets::secondary_button(ui, "View Dashboard").clicked() {
                        go_to(next_state, AppState::Landing, AppState::Dashboard);
                    }
                });
                ui.add_space(32.0);
                ui.columns(HERO_HIGHLIGHTS.len(), |cols| {
                    for (col, card) in cols.iter_mut().zip(HERO_HIGHLIGHTS) {
                        feature_card(col, card);
                    }
                });
            });
        });
}

fn feature_card(ui: &mut egui::Ui, card: &FeatureCard) {
    widgets::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        widgets::subheading(ui, card.title);
        ui.add_space(4.0);
        widgets::paragraph(ui, card.description);
    });
}

fn features(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(FEATURES_TITLE)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_HEADING),
        );
        ui.add_space(6.0);
        widgets::paragraph(ui, FEATURES_SUBTITLE);
    });
    ui.add_space(theme::SECTION_SPACING);

    let columns = widgets::responsive_columns(ui.available_width(), FEATURE_MIN_WIDTH, 3);
    for row in FEATURES.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, card) in cols.iter_mut().zip(row) {
                feature_card(col, card);
            }
        });
        ui.add_space(theme::ITEM_SPACING);
    }
}

fn dataset(ui: &mut egui::Ui) {
    widgets::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(DATASET_TITLE)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_HEADING),
        );
        ui.add_space(8.0);
        widgets::paragraph(ui, DATASET_BODY);
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for fact in DATASET_FACTS {
                widgets::badge(ui, fact, theme::PRIMARY);
            }
        });
    });
}

fn promo(ui: &mut egui::Ui, next_state: &mut NextState<AppState>) {
    ui.label(
        egui::RichText::new(PROMO_TITLE)
            .size(theme::FONT_TITLE)
            .strong()
            .color(theme::TEXT_HEADING),
    );
    ui.add_space(6.0);
    widgets::paragraph(ui, PROMO_SUBTITLE);
    ui.add_space(12.0);
    for point in PROMO_POINTS {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("✔").color(theme::POSITIVE));
            ui.vertical(|ui| {
                widgets::subheading(ui, point.title);
                widgets::paragraph(ui, point.description);
            });
        });
        ui.add_space(6.0);
    }
    ui.add_space(12.0);
    if widgets::primary_button(ui, "Explore Dashboard").clicked() {
        go_to(next_state, AppState::Landing, AppState::Dashboard);
    }
}

fn footer(ui: &mut egui::Ui, year: i32) {
    egui::Frame::NONE
        .fill(theme::FOOTER_BG)
        .inner_margin(egui::Margin::symmetric(24, 32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            centered(ui, |ui| {
                ui.columns(FOOTER_COLUMNS.len() + 1, |cols| {
                    cols[0].label(
                        egui::RichText::new(BRAND_LONG)
                            .size(theme::FONT_SUBHEADING)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    cols[0].add(
                        egui::Label::new(
                            egui::RichText::new(FOOTER_BLURB)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_ON_DARK),
                        )
                        .wrap(),
                    );
                    for (col, column) in cols[1..].iter_mut().zip(FOOTER_COLUMNS) {
                        col.label(
                            egui::RichText::new(column.heading)
                                .size(theme::FONT_BODY)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        for link in column.links {
                            col.label(
                                egui::RichText::new(*link)
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_ON_DARK),
                            );
                        }
                    }
                });
                ui.add_space(16.0);
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(copyright_line(year))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_ON_DARK),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for item in FOOTER_LEGAL.iter().rev() {
                            ui.label(
                                egui::RichText::new(*item)
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_ON_DARK),
                            );
                        }
                    });
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn test_footer_year_defaults_to_local_year() {
        assert_eq!(FooterYear::default().0, Local::now().year());
    }

    #[test]
    fn test_copyright_line_carries_footer_year() {
        assert!(copyright_line(2031).contains("2031"));
    }
}
