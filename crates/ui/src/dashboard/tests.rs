use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_egui::egui;

use simulation::app_state::{AppState, TwinView};
use simulation::fixtures::incidents::Severity;

use super::routing_map::{marker_radius, to_screen};
use super::*;

fn dashboard_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_state(AppState::Dashboard)
        .add_sub_state::<TwinView>()
        .add_plugins(DashboardPlugin)
        .add_systems(
            Update,
            sync_twin_view.run_if(in_state(AppState::Dashboard)),
        );
    app.update();
    app
}

fn twin_view(app: &App) -> Option<TwinView> {
    app.world()
        .get_resource::<State<TwinView>>()
        .map(|s| *s.get())
}

// ====================================================================
// Twin view selection
// ====================================================================

#[test]
fn test_default_ui_keeps_twin_hidden() {
    assert_eq!(DashboardUi::default().desired_twin_view(), TwinView::Hidden);
}

#[test]
fn test_twin_tab_in_3d_mode_wants_live() {
    let ui = DashboardUi {
        tab: DashboardTab::DigitalTwin,
        ..default()
    };
    assert_eq!(ui.desired_twin_view(), TwinView::Live);
}

#[test]
fn test_twin_tab_in_map_mode_stays_hidden() {
    let ui = DashboardUi {
        tab: DashboardTab::DigitalTwin,
        twin_mode: TwinMode::Map,
        ..default()
    };
    assert_eq!(ui.desired_twin_view(), TwinView::Hidden);
}

#[test]
fn test_other_modal_hides_twin() {
    let mut ui = DashboardUi {
        tab: DashboardTab::DigitalTwin,
        ..default()
    };
    ui.expand(ExpandedPanel::LiveFeed);
    assert_eq!(ui.desired_twin_view(), TwinView::Hidden);
    ui.collapse();
    assert_eq!(ui.desired_twin_view(), TwinView::Live);
}

#[test]
fn test_expanded_twin_is_live_from_any_tab() {
    let mut ui = DashboardUi::default();
    ui.expand(ExpandedPanel::DigitalTwin);
    assert_eq!(ui.desired_twin_view(), TwinView::Live);
}

#[test]
fn test_feed_visible_on_its_tab_or_modal_only() {
    let mut ui = DashboardUi::default();
    assert!(!ui.feed_visible());

    ui.tab = DashboardTab::LiveFeed;
    assert!(ui.feed_visible());

    ui.tab = DashboardTab::Analysis;
    ui.expand(ExpandedPanel::LiveFeed);
    assert!(ui.feed_visible());

    ui.collapse();
    ui.tab = DashboardTab::LiveFeed;
    ui.expand(ExpandedPanel::DigitalTwin);
    assert!(!ui.feed_visible());
}

// ====================================================================
// ECS wiring
// ====================================================================

#[test]
fn test_sync_mounts_and_hides_twin() {
    let mut app = dashboard_app();
    assert_eq!(twin_view(&app), Some(TwinView::Hidden));

    app.world_mut().resource_mut::<DashboardUi>().tab = DashboardTab::DigitalTwin;
    app.update();
    app.update();
    assert_eq!(twin_view(&app), Some(TwinView::Live));

    app.world_mut().resource_mut::<DashboardUi>().tab = DashboardTab::Analysis;
    app.update();
    app.update();
    assert_eq!(twin_view(&app), Some(TwinView::Hidden));
}

#[test]
fn test_leaving_dashboard_resets_ui_state() {
    let mut app = dashboard_app();
    {
        let mut ui = app.world_mut().resource_mut::<DashboardUi>();
        ui.tab = DashboardTab::Incidents;
        ui.selected_incident = 2;
        ui.expand(ExpandedPanel::IncidentReport);
    }
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Landing);
    app.update();

    assert_eq!(*app.world().resource::<DashboardUi>(), DashboardUi::default());
    assert_eq!(twin_view(&app), None);
}

// ====================================================================
// Geometry helpers
// ====================================================================

#[test]
fn test_to_screen_maps_unit_square_onto_rect() {
    let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0));
    assert_eq!(to_screen(rect, (0.0, 0.0)), egui::pos2(10.0, 20.0));
    assert_eq!(to_screen(rect, (1.0, 1.0)), egui::pos2(210.0, 120.0));
    assert_eq!(to_screen(rect, (0.5, 0.5)), rect.center());
}

#[test]
fn test_marker_radius_grows_with_severity() {
    assert!(marker_radius(Severity::High) > marker_radius(Severity::Medium));
    assert!(marker_radius(Severity::Medium) > marker_radius(Severity::Low));
}
