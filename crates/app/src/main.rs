use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::settings::ShowcaseSettings;

#[cfg(target_arch = "wasm32")]
mod web_route;

fn main() {
    #[allow(unused_mut)]
    let mut settings = ShowcaseSettings::from_env();

    #[cfg(target_arch = "wasm32")]
    if let Some(route) = web_route::location_route() {
        settings.start_route = route;
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Smart Traffic Management System".to_string(),
            resolution: (settings.window_width, settings.window_height).into(),
            present_mode: PresentMode::AutoVsync,
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    // Read by the simulation plugin for the start page and loop timing
    .insert_resource(settings)
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
}
