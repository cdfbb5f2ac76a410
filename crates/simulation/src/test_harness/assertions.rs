//! Assertion helpers for `TestScene` integration tests.

use crate::config::{LAMP_BRIGHT, LAMP_DIM};
use crate::layout::{SIGNAL_POSTS, VEHICLE_SPAWNS};
use crate::signal::{Axis, LampColor};

use super::TestScene;

impl TestScene {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert the full set of moving props and lamps is present.
    pub fn assert_scene_mounted(&mut self) {
        let vehicles = self.vehicle_count();
        let lamps = self.lamp_count();
        assert_eq!(
            vehicles,
            VEHICLE_SPAWNS.len(),
            "Expected {} vehicles, got {vehicles}",
            VEHICLE_SPAWNS.len()
        );
        assert_eq!(
            lamps,
            SIGNAL_POSTS.len() * LampColor::ALL.len(),
            "Expected {} lamps, got {lamps}",
            SIGNAL_POSTS.len() * LampColor::ALL.len()
        );
    }

    /// Assert nothing tagged as part of the scene is left.
    pub fn assert_scene_released(&mut self) {
        let count = self.scene_entity_count();
        assert_eq!(count, 0, "Expected no scene entities, found {count}");
    }

    /// Assert every post controlling `axis` shows green (and not red).
    pub fn assert_axis_green(&mut self, axis: Axis) {
        for lamp in self.lamps().into_iter().filter(|l| l.axis == axis) {
            let expected = match lamp.color {
                LampColor::Green => LAMP_BRIGHT,
                LampColor::Red | LampColor::Yellow => LAMP_DIM,
            };
            assert_eq!(
                lamp.intensity, expected,
                "{:?} lamp on post {} of {:?} axis: expected {expected}, got {}",
                lamp.color, lamp.post, axis, lamp.intensity
            );
        }
    }

    /// Assert every post controlling `axis` shows red.
    pub fn assert_axis_red(&mut self, axis: Axis) {
        for lamp in self.lamps().into_iter().filter(|l| l.axis == axis) {
            match lamp.color {
                LampColor::Red => assert_eq!(lamp.intensity, LAMP_BRIGHT),
                LampColor::Green => assert_eq!(lamp.intensity, LAMP_DIM),
                LampColor::Yellow => {}
            }
        }
    }
}
