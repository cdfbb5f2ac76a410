use bevy::prelude::*;

use simulation::app_state::TwinView;

use crate::*;

/// Register all rendering systems.
///
/// Scene meshes follow the twin view lifecycle: built on enter, attached to
/// new props while live, released on exit. Camera input only runs while the
/// scene is visible.
pub(crate) fn register_rendering_systems(app: &mut App) {
    app.add_systems(Startup, (camera::setup_camera, super::setup_lighting));

    // Scene lifecycle
    app.add_systems(OnEnter(TwinView::Live), scene_meshes::spawn_static_scene);
    app.add_systems(OnExit(TwinView::Live), scene_meshes::release_scene_assets);
    app.add_systems(
        Update,
        (
            scene_meshes::attach_vehicle_meshes,
            signal_lamps::attach_lamp_meshes,
            signal_lamps::sync_lamp_materials,
        )
            .chain()
            .run_if(in_state(TwinView::Live))
            .run_if(resource_exists::<scene_meshes::SceneAssets>),
    );

    // Camera controls
    app.add_systems(
        Update,
        (
            camera::apply_camera_commands,
            camera::camera_orbit_drag,
            camera::camera_zoom,
            camera::apply_orbit_camera,
        )
            .chain()
            .run_if(in_state(TwinView::Live)),
    );
}
