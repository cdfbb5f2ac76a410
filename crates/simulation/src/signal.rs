//! Two-phase signal alternator for the digital-twin intersections.
//!
//! A single counter cycles through `2 * phase_length` ticks. The first half
//! gives north–south traffic right of way, the second half east–west. Lamp
//! intensities are a pure function of the counter, so every signal post in
//! the scene reads the same [`SignalPhase`] resource.

use bevy::prelude::*;

use crate::config::{
    DEFAULT_PHASE_LENGTH, LAMP_BRIGHT, LAMP_DIM, MAX_PHASE_LENGTH, READY_WINDOW,
};

/// Direction of travel a signal post or vehicle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Travel along z.
    NorthSouth,
    /// Travel along x.
    EastWest,
}

/// Color of one lamp in a signal housing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LampColor {
    Red,
    Yellow,
    Green,
}

impl LampColor {
    pub const ALL: [LampColor; 3] = [LampColor::Red, LampColor::Yellow, LampColor::Green];
}

/// Emissive intensity of each lamp on one post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampLevels {
    pub red: f32,
    pub yellow: f32,
    pub green: f32,
}

impl LampLevels {
    pub fn get(&self, color: LampColor) -> f32 {
        match color {
            LampColor::Red => self.red,
            LampColor::Yellow => self.yellow,
            LampColor::Green => self.green,
        }
    }
}

/// Global signal counter shared by all posts.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SignalPhase {
    /// Position in the cycle, always `< 2 * phase_length`.
    pub counter: u32,
    /// Ticks each axis keeps right of way.
    pub phase_length: u32,
}

impl Default for SignalPhase {
    fn default() -> Self {
        Self::new(DEFAULT_PHASE_LENGTH)
    }
}

impl SignalPhase {
    pub fn new(phase_length: u32) -> Self {
        debug_assert!(phase_length > READY_WINDOW && phase_length <= MAX_PHASE_LENGTH);
        Self {
            counter: 0,
            phase_length,
        }
    }

    pub fn cycle_length(&self) -> u32 {
        self.phase_length * 2
    }

    /// Advance one tick, wrapping at the end of the cycle.
    pub fn advance(&mut self) {
        self.counter = (self.counter + 1) % self.cycle_length();
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// The phase flag: true while north–south traffic has right of way.
    pub fn north_south_green(&self) -> bool {
        self.counter < self.phase_length
    }

    pub fn has_right_of_way(&self, axis: Axis) -> bool {
        match axis {
            Axis::NorthSouth => self.north_south_green(),
            Axis::EastWest => !self.north_south_green(),
        }
    }

    /// True during the last [`READY_WINDOW`] ticks before a phase change.
    pub fn near_change(&self) -> bool {
        self.counter % self.phase_length > self.phase_length - READY_WINDOW
    }

    /// Lamp intensities for a post controlling `axis`.
    ///
    /// The waiting axis shows red plus amber during the ready window before
    /// it gets green.
    pub fn lamp_levels(&self, axis: Axis) -> LampLevels {
        let go = self.has_right_of_way(axis);
        LampLevels {
            red: if go { LAMP_DIM } else { LAMP_BRIGHT },
            yellow: if !go && self.near_change() {
                LAMP_BRIGHT
            } else {
                LAMP_DIM
            },
            green: if go { LAMP_BRIGHT } else { LAMP_DIM },
        }
    }
}

/// System: advance the shared signal counter by one tick.
pub fn advance_signal_phase(mut phase: ResMut<SignalPhase>) {
    phase.advance();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_north_south_green() {
        let phase = SignalPhase::default();
        assert!(phase.north_south_green());
        assert!(phase.has_right_of_way(Axis::NorthSouth));
        assert!(!phase.has_right_of_way(Axis::EastWest));
    }

    #[test]
    fn test_flag_flips_after_phase_length() {
        let mut phase = SignalPhase::new(100);
        for _ in 0..99 {
            phase.advance();
        }
        assert!(phase.north_south_green());
        phase.advance();
        assert_eq!(phase.counter, 100);
        assert!(!phase.north_south_green());
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut phase = SignalPhase::new(100);
        for _ in 0..37 {
            phase.advance();
        }
        let before = phase.clone();
        for _ in 0..phase.cycle_length() {
            phase.advance();
        }
        assert_eq!(phase, before);
    }

    #[test]
    fn test_longest_phase_wraps_without_overflow() {
        let mut phase = SignalPhase::new(MAX_PHASE_LENGTH);
        assert_eq!(phase.cycle_length(), MAX_PHASE_LENGTH * 2);
        phase.counter = phase.cycle_length() - 1;
        phase.advance();
        assert_eq!(phase.counter, 0);
        assert!(phase.north_south_green());
    }

    #[test]
    fn test_flag_toggles_twice_per_cycle() {
        let mut phase = SignalPhase::new(30);
        let mut last = phase.north_south_green();
        let mut toggles = 0;
        for _ in 0..phase.cycle_length() {
            phase.advance();
            if phase.north_south_green() != last {
                toggles += 1;
                last = phase.north_south_green();
            }
        }
        assert_eq!(toggles, 2);
    }

    #[test]
    fn test_lamps_for_green_axis() {
        let phase = SignalPhase::new(100);
        let ns = phase.lamp_levels(Axis::NorthSouth);
        assert_eq!(ns.red, LAMP_DIM);
        assert_eq!(ns.green, LAMP_BRIGHT);
        assert_eq!(ns.yellow, LAMP_DIM);

        let ew = phase.lamp_levels(Axis::EastWest);
        assert_eq!(ew.red, LAMP_BRIGHT);
        assert_eq!(ew.green, LAMP_DIM);
    }

    #[test]
    fn test_ready_window_lights_amber_on_waiting_axis() {
        let mut phase = SignalPhase::new(100);
        phase.counter = 80;
        assert!(!phase.near_change());
        phase.counter = 81;
        assert!(phase.near_change());
        assert_eq!(phase.lamp_levels(Axis::EastWest).yellow, LAMP_BRIGHT);
        assert_eq!(phase.lamp_levels(Axis::EastWest).red, LAMP_BRIGHT);
        // The axis that still has green never shows amber.
        assert_eq!(phase.lamp_levels(Axis::NorthSouth).yellow, LAMP_DIM);

        phase.counter = 195;
        assert_eq!(phase.lamp_levels(Axis::NorthSouth).yellow, LAMP_BRIGHT);
        assert_eq!(phase.lamp_levels(Axis::EastWest).yellow, LAMP_DIM);
    }

    #[test]
    fn test_exactly_one_of_red_green_bright() {
        let mut phase = SignalPhase::new(40);
        for _ in 0..phase.cycle_length() {
            phase.advance();
            for axis in [Axis::NorthSouth, Axis::EastWest] {
                let l = phase.lamp_levels(axis);
                assert_ne!(l.red, l.green);
                assert_eq!(l.get(LampColor::Red), l.red);
            }
        }
    }
}
