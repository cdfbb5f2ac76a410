//! Top navigation bar shared by every page.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::app_state::AppState;
use simulation::fixtures::landing::{BRAND_LONG, BRAND_SHORT};

use crate::theme;

/// Width below which the long brand name is swapped for the short one.
const COMPACT_WIDTH: f32 = 900.0;

pub fn nav_bar(
    mut contexts: EguiContexts,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let ctx = contexts.ctx_mut();
    let current = *state.get();
    let compact = ctx.screen_rect().width() < COMPACT_WIDTH;

    egui::TopBottomPanel::top("nav_bar")
        .frame(
            egui::Frame::NONE
                .fill(theme::CARD_BG)
                .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
                .inner_margin(egui::Margin::symmetric(20, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (logo, _) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::hover());
                ui.painter().circle_filled(logo.center(), 11.0, theme::PRIMARY);
                ui.painter().circle_filled(logo.center(), 4.0, egui::Color32::WHITE);

                let brand = if compact { BRAND_SHORT } else { BRAND_LONG };
                let brand_response = ui.add(
                    egui::Label::new(
                        egui::RichText::new(brand)
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_HEADING),
                    )
                    .sense(egui::Sense::click()),
                );
                if brand_response.clicked() {
                    go_to(&mut next_state, current, AppState::Landing);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for page in AppState::ALL.into_iter().rev() {
                        let active = page == current;
                        let text = egui::RichText::new(page.nav_label()).size(theme::FONT_BODY);
                        let text = if active {
                            text.strong().color(theme::PRIMARY)
                        } else {
                            text.color(theme::TEXT)
                        };
                        if ui.selectable_label(active, text).clicked() {
                            go_to(&mut next_state, current, page);
                        }
                    }
                });
            });
        });
}

/// Request a page change, ignoring clicks on the page already shown.
pub fn go_to(next_state: &mut NextState<AppState>, current: AppState, target: AppState) {
    if current != target {
        next_state.set(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_same_page_is_noop() {
        let mut next = NextState::<AppState>::default();
        go_to(&mut next, AppState::Dashboard, AppState::Dashboard);
        assert!(matches!(next, NextState::Unchanged));
    }

    #[test]
    fn test_go_to_other_page_queues_transition() {
        let mut next = NextState::<AppState>::default();
        go_to(&mut next, AppState::Landing, AppState::Detection);
        assert!(matches!(next, NextState::Pending(AppState::Detection)));
    }
}
