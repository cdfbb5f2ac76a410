use bevy::prelude::*;

pub mod camera;
pub mod scene_meshes;
pub mod signal_lamps;

mod plugin_registration;

use camera::{CameraCommand, CameraOrbitDrag, OrbitCamera};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .init_resource::<CameraOrbitDrag>()
            .add_event::<CameraCommand>();

        plugin_registration::register_rendering_systems(app);
    }
}

fn setup_lighting(mut commands: Commands) {
    // Soft grey fill so the unlit sides of buildings stay readable
    commands.insert_resource(AmbientLight {
        color: Color::srgb_u8(0x40, 0x40, 0x40),
        brightness: 1500.0,
    });

    // Sun from above the south-east corner
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
