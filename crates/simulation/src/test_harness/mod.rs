//! # TestScene: headless test harness for the showcase
//!
//! Wraps a `bevy::app::App` + `SimulationPlugin` so scene lifecycle and the
//! signal/vehicle loop can be driven without a window or renderer.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::settings::ShowcaseSettings;
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Navigate with the builder methods, call `tick()` to advance the scene
/// loop, then query or assert on the resulting ECS state.
pub struct TestScene {
    app: App,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScene {
    /// A showcase on the landing page with default settings.
    pub fn new() -> Self {
        Self::with_settings(ShowcaseSettings::default())
    }

    /// A showcase built from explicit settings. The settings' start route
    /// decides the initial page.
    pub fn with_settings(settings: ShowcaseSettings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        // Insert BEFORE SimulationPlugin so it picks up the values.
        app.insert_resource(settings);
        app.add_plugins(SimulationPlugin);

        // One update runs Startup and the initial state transition.
        app.update();

        Self { app }
    }
}
