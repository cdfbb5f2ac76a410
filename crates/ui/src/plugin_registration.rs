use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::app_state::AppState;

use crate::*;

/// Register all UI plugins and systems.
///
/// One page system runs per frame, gated on the current [`AppState`]. The
/// navigation bar runs first on every page.
pub(crate) fn register_ui_systems(app: &mut App) {
    // Core egui
    app.add_plugins(EguiPlugin);

    // Page plugins
    app.add_plugins(dashboard::DashboardPlugin);

    // UI resources
    app.init_resource::<landing::FooterYear>();
    app.init_resource::<detection_page::DetectionPageUi>();

    // UI systems
    app.add_systems(Startup, theme::apply_showcase_theme);
    app.add_systems(Update, navigation::nav_bar.in_set(UiSet::Navigation));
    app.add_systems(
        Update,
        landing::landing_page
            .in_set(UiSet::Page)
            .run_if(in_state(AppState::Landing)),
    );
    app.add_systems(
        Update,
        (dashboard::dashboard_page, dashboard::sync_twin_view)
            .chain()
            .in_set(UiSet::Page)
            .run_if(in_state(AppState::Dashboard)),
    );
    app.add_systems(
        Update,
        detection_page::detection_page
            .in_set(UiSet::Page)
            .run_if(in_state(AppState::Detection)),
    );
    app.add_systems(
        OnExit(AppState::Detection),
        detection_page::leave_detection_page,
    );
}
