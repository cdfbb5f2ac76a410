use bevy::prelude::*;

pub mod app_state;
pub mod app_state_plugin;
pub mod config;
pub mod detection;
pub mod fixtures;
pub mod layout;
pub mod live_feed;
pub mod scene;
pub mod settings;
pub mod signal;
pub mod sim_rng;
pub mod test_harness;
pub mod vehicles;

use app_state::TwinView;
use scene::SceneSet;
use settings::ShowcaseSettings;
use signal::SignalPhase;

/// Core plugin: page states, the digital-twin loop and the mock data
/// resources. Rendering and UI live in their own crates.
///
/// Reads [`ShowcaseSettings`] if the caller inserted it before adding the
/// plugin, otherwise inserts the defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let settings = match app.world().get_resource::<ShowcaseSettings>() {
            Some(settings) => settings.clone(),
            None => {
                let settings = ShowcaseSettings::default();
                app.insert_resource(settings.clone());
                settings
            }
        };

        app.insert_resource(Time::<Fixed>::from_hz(settings.tick_hz))
            .insert_resource(SignalPhase::new(settings.phase_length));

        app.add_plugins((
            app_state_plugin::AppStatePlugin,
            sim_rng::SimRngPlugin,
            detection::DetectionPlugin,
            live_feed::LiveFeedPlugin,
        ));

        // Digital twin: mounted only while its view is live, ticked at the
        // fixed rate, torn down on exit.
        app.configure_sets(
            FixedUpdate,
            (SceneSet::Signal, SceneSet::Props)
                .chain()
                .run_if(in_state(TwinView::Live)),
        )
        .add_systems(
            FixedUpdate,
            signal::advance_signal_phase.in_set(SceneSet::Signal),
        )
        .add_systems(
            FixedUpdate,
            (vehicles::step_vehicles, scene::update_signal_lamps).in_set(SceneSet::Props),
        )
        .add_systems(OnEnter(TwinView::Live), scene::mount_scene)
        .add_systems(OnExit(TwinView::Live), scene::unmount_scene);
    }
}
