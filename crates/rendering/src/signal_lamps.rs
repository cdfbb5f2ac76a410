//! Signal lamp visuals. Each lamp owns its material so its emissive level
//! can follow the lamp's intensity independently.

use bevy::prelude::*;

use simulation::scene::SignalLamp;
use simulation::signal::LampColor;

use crate::scene_meshes::SceneAssets;

/// Emissive output at intensity 1.0, in linear units.
const EMISSIVE_GAIN: f32 = 4.0;

pub fn lamp_rgb(color: LampColor) -> LinearRgba {
    match color {
        LampColor::Red => LinearRgba::rgb(1.0, 0.0, 0.0),
        LampColor::Yellow => LinearRgba::rgb(1.0, 1.0, 0.0),
        LampColor::Green => LinearRgba::rgb(0.0, 1.0, 0.0),
    }
}

/// Emissive color for a lamp at `intensity`.
pub fn lamp_emissive(color: LampColor, intensity: f32) -> LinearRgba {
    lamp_rgb(color) * (intensity * EMISSIVE_GAIN)
}

/// System: give newly spawned lamps a sphere mesh and their own material.
pub fn attach_lamp_meshes(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    lamps: Query<(Entity, &SignalLamp), Added<SignalLamp>>,
) {
    for (entity, lamp) in &lamps {
        commands.entity(entity).insert((
            Mesh3d(assets.lamp.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::LinearRgba(lamp_rgb(lamp.color)),
                emissive: lamp_emissive(lamp.color, lamp.intensity),
                ..default()
            })),
        ));
    }
}

/// System: push changed lamp intensities into their materials.
pub fn sync_lamp_materials(
    lamps: Query<(&SignalLamp, &MeshMaterial3d<StandardMaterial>), Changed<SignalLamp>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (lamp, material) in &lamps {
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.emissive = lamp_emissive(lamp.color, lamp.intensity);
        }
    }
}
