//! Query and tick methods for `TestScene`.

use bevy::prelude::*;

use crate::app_state::{AppState, TwinView};
use crate::scene::{SceneEntity, SignalLamp};
use crate::signal::SignalPhase;
use crate::vehicles::VehicleProp;

use super::TestScene;

impl TestScene {
    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N scene ticks by directly executing the `FixedUpdate` schedule.
    /// This bypasses Bevy's time system, so the tick count is exact
    /// regardless of wall-clock time.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run one full frame (`App::update`).
    pub fn update(&mut self) {
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Queries (note: Bevy's World::query() requires &mut World)
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Get a reference to any resource.
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn page(&self) -> AppState {
        *self.app.world().resource::<State<AppState>>().get()
    }

    /// Current twin view, `None` off the dashboard.
    pub fn twin_view(&self) -> Option<TwinView> {
        self.app
            .world()
            .get_resource::<State<TwinView>>()
            .map(|s| *s.get())
    }

    pub fn phase(&self) -> &SignalPhase {
        self.resource::<SignalPhase>()
    }

    pub fn vehicle_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<VehicleProp>>()
            .iter(world)
            .count()
    }

    pub fn lamp_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<SignalLamp>>()
            .iter(world)
            .count()
    }

    /// Every entity tagged as part of the scene.
    pub fn scene_entity_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<SceneEntity>>()
            .iter(world)
            .count()
    }

    /// Snapshot of every vehicle prop with its position.
    pub fn vehicles(&mut self) -> Vec<(VehicleProp, Vec3)> {
        let world = self.app.world_mut();
        world
            .query::<(&VehicleProp, &Transform)>()
            .iter(world)
            .map(|(prop, t)| (*prop, t.translation))
            .collect()
    }

    /// Snapshot of every signal lamp.
    pub fn lamps(&mut self) -> Vec<SignalLamp> {
        let world = self.app.world_mut();
        world.query::<&SignalLamp>().iter(world).copied().collect()
    }
}
