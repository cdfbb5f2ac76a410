//! Digital-twin scene lifecycle.
//!
//! Mounting spawns the logical scene entities (vehicles and signal lamps)
//! and resets the signal counter; unmounting despawns everything tagged
//! [`SceneEntity`]. The `rendering` crate hangs meshes off the same entities
//! and adds its own static geometry under the same marker, so one despawn
//! pass releases the whole scene.

use bevy::prelude::*;

use crate::config::{GREEN_LAMP_Y, RED_LAMP_Y, SIGNAL_LAMP_FACE_OFFSET, VEHICLE_Y, YELLOW_LAMP_Y};
use crate::layout::{SIGNAL_POSTS, VEHICLE_SPAWNS};
use crate::settings::ShowcaseSettings;
use crate::signal::{Axis, LampColor, SignalPhase};
use crate::vehicles::VehicleProp;

/// Marker for every entity that belongs to the mounted scene.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneEntity;

/// One lamp of a signal post.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SignalLamp {
    /// Index into [`SIGNAL_POSTS`].
    pub post: usize,
    pub axis: Axis,
    pub color: LampColor,
    /// Current emissive intensity, written every tick.
    pub intensity: f32,
}

impl SignalLamp {
    pub fn height(&self) -> f32 {
        match self.color {
            LampColor::Red => RED_LAMP_Y,
            LampColor::Yellow => YELLOW_LAMP_Y,
            LampColor::Green => GREEN_LAMP_Y,
        }
    }
}

/// Ordering of the per-tick scene systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSet {
    /// Advance the shared phase counter.
    Signal,
    /// Step vehicles and update lamp intensities from the new phase.
    Props,
}

/// System: spawn the moving props and lamps. Runs on entering the live view.
pub fn mount_scene(
    mut commands: Commands,
    settings: Option<Res<ShowcaseSettings>>,
    mut phase: ResMut<SignalPhase>,
) {
    if let Some(settings) = settings {
        phase.phase_length = settings.phase_length;
    }
    phase.reset();

    for spawn in VEHICLE_SPAWNS {
        commands.spawn((
            SceneEntity,
            VehicleProp::new(spawn.heading, spawn.speed, spawn.color),
            Transform::from_xyz(spawn.x, VEHICLE_Y, spawn.z)
                .with_rotation(Quat::from_rotation_y(spawn.heading.yaw())),
        ));
    }

    let mut lamps = 0;
    for (post_index, post) in SIGNAL_POSTS.iter().enumerate() {
        let levels = phase.lamp_levels(post.axis);
        for color in LampColor::ALL {
            let lamp = SignalLamp {
                post: post_index,
                axis: post.axis,
                color,
                intensity: levels.get(color),
            };
            commands.spawn((
                SceneEntity,
                lamp,
                Transform::from_xyz(post.x, lamp.height(), post.z + SIGNAL_LAMP_FACE_OFFSET),
            ));
            lamps += 1;
        }
    }

    info!(
        "Digital twin mounted: {} vehicles, {} signal lamps, phase length {}",
        VEHICLE_SPAWNS.len(),
        lamps,
        phase.phase_length
    );
}

/// System: despawn everything belonging to the scene. Runs on leaving the
/// live view (including leaving the dashboard page entirely).
pub fn unmount_scene(mut commands: Commands, entities: Query<Entity, With<SceneEntity>>) {
    let mut count = 0;
    for entity in &entities {
        commands.entity(entity).despawn_recursive();
        count += 1;
    }
    info!("Digital twin unmounted, released {} entities", count);
}

/// System: write the current phase's intensities into every lamp.
pub fn update_signal_lamps(phase: Res<SignalPhase>, mut lamps: Query<&mut SignalLamp>) {
    for mut lamp in &mut lamps {
        let level = phase.lamp_levels(lamp.axis).get(lamp.color);
        if lamp.intensity != level {
            lamp.intensity = level;
        }
    }
}
