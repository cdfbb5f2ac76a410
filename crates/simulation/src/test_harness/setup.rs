//! Navigation builders for `TestScene`.

use bevy::prelude::*;

use crate::app_state::{AppState, TwinView};

use super::TestScene;

impl TestScene {
    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Switch page and apply the transition immediately by running the
    /// `StateTransition` schedule, so `OnEnter`/`OnExit` systems and their
    /// commands have taken effect when this returns.
    pub fn navigate(&mut self, page: AppState) {
        self.app
            .world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(page);
        self.app.world_mut().run_schedule(StateTransition);
    }

    /// Switch the dashboard's twin view. Has no effect off the dashboard,
    /// where the sub-state does not exist.
    pub fn set_twin_view(&mut self, view: TwinView) {
        let world = self.app.world_mut();
        match world.get_resource_mut::<NextState<TwinView>>() {
            Some(mut next) => next.set(view),
            None => return,
        }
        world.run_schedule(StateTransition);
    }

    /// Open the dashboard with the digital twin mounted.
    pub fn with_live_twin(mut self) -> Self {
        self.navigate(AppState::Dashboard);
        self.set_twin_view(TwinView::Live);
        self
    }
}
