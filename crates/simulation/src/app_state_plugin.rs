//! Plugin that registers the page and digital-twin states.
//!
//! Kept in its own file following the one-plugin-per-file convention.

use bevy::prelude::*;

use crate::app_state::{AppState, TwinView};
use crate::settings::ShowcaseSettings;

/// Initializes [`AppState`] and its [`TwinView`] sub-state.
///
/// The start page comes from [`ShowcaseSettings::start_route`] when the
/// settings resource is present, otherwise `Landing`.
pub struct AppStatePlugin;

impl Plugin for AppStatePlugin {
    fn build(&self, app: &mut App) {
        let start = app
            .world()
            .get_resource::<ShowcaseSettings>()
            .map(ShowcaseSettings::start_state)
            .unwrap_or_default();
        app.insert_state(start)
            .add_sub_state::<TwinView>()
            .add_systems(Update, log_page_changes);
    }
}

fn log_page_changes(mut transitions: EventReader<StateTransitionEvent<AppState>>) {
    for transition in transitions.read() {
        if let Some(entered) = transition.entered {
            info!("Navigated to {}", entered.route());
        }
    }
}
