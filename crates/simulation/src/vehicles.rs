//! Moving vehicle props.
//!
//! Each prop slides along one road at a constant speed and wraps around at
//! the scene edge. The only interaction is with the signal phase: a prop
//! whose axis is held at red stops while it sits inside one of the fixed
//! intersection approach bands, then resumes when its axis turns green.

use bevy::prelude::*;

use crate::config::WRAP_EXTENT;
use crate::signal::{Axis, SignalPhase};

/// Direction of travel. North is −z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    pub fn axis(self) -> Axis {
        match self {
            Heading::North | Heading::South => Axis::NorthSouth,
            Heading::East | Heading::West => Axis::EastWest,
        }
    }

    /// Unit step on the ground plane as (dx, dz).
    pub fn direction(self) -> Vec2 {
        match self {
            Heading::North => Vec2::new(0.0, -1.0),
            Heading::South => Vec2::new(0.0, 1.0),
            Heading::East => Vec2::new(1.0, 0.0),
            Heading::West => Vec2::new(-1.0, 0.0),
        }
    }

    /// Rotation about Y so the long side of the vehicle box follows the road.
    pub fn yaw(self) -> f32 {
        match self.axis() {
            Axis::NorthSouth => 0.0,
            Axis::EastWest => std::f32::consts::FRAC_PI_2,
        }
    }
}

/// Approach bands (open intervals along z) where north–south traffic waits.
pub const NORTH_SOUTH_STOP_BANDS: [(f32, f32); 2] = [(25.0, 35.0), (-35.0, -25.0)];
/// Approach bands (open intervals along x) where east–west traffic waits.
pub const EAST_WEST_STOP_BANDS: [(f32, f32); 3] = [(-45.0, -35.0), (-5.0, 5.0), (35.0, 45.0)];

/// A moving vehicle in the digital-twin scene.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct VehicleProp {
    pub heading: Heading,
    /// Per-tick distance when the way is clear.
    pub cruise_speed: f32,
    /// Distance covered on the most recent tick (0 while held).
    pub current_speed: f32,
    /// sRGB body color.
    pub color: [u8; 3],
}

impl VehicleProp {
    pub fn new(heading: Heading, cruise_speed: f32, color: [u8; 3]) -> Self {
        Self {
            heading,
            cruise_speed,
            current_speed: cruise_speed,
            color,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.current_speed == 0.0
    }
}

/// True if a vehicle travelling on `axis` at `pos` is inside an approach band.
pub fn in_stop_band(axis: Axis, pos: Vec3) -> bool {
    let (coord, bands): (f32, &[(f32, f32)]) = match axis {
        Axis::NorthSouth => (pos.z, &NORTH_SOUTH_STOP_BANDS),
        Axis::EastWest => (pos.x, &EAST_WEST_STOP_BANDS),
    };
    bands.iter().any(|&(lo, hi)| coord > lo && coord < hi)
}

/// Distance the vehicle may move this tick.
pub fn tick_speed(prop: &VehicleProp, pos: Vec3, phase: &SignalPhase) -> f32 {
    let axis = prop.heading.axis();
    if !phase.has_right_of_way(axis) && in_stop_band(axis, pos) {
        0.0
    } else {
        prop.cruise_speed
    }
}

/// Move `pos` by `distance` along `heading`, wrapping past the leading edge
/// of the scene to the opposite edge.
pub fn advance_position(pos: &mut Vec3, heading: Heading, distance: f32) {
    let step = heading.direction() * distance;
    pos.x += step.x;
    pos.z += step.y;
    match heading {
        Heading::North if pos.z < -WRAP_EXTENT => pos.z = WRAP_EXTENT,
        Heading::South if pos.z > WRAP_EXTENT => pos.z = -WRAP_EXTENT,
        Heading::East if pos.x > WRAP_EXTENT => pos.x = -WRAP_EXTENT,
        Heading::West if pos.x < -WRAP_EXTENT => pos.x = WRAP_EXTENT,
        _ => {}
    }
}

/// System: step every vehicle prop by one tick.
pub fn step_vehicles(
    phase: Res<SignalPhase>,
    mut vehicles: Query<(&mut VehicleProp, &mut Transform)>,
) {
    for (mut prop, mut transform) in &mut vehicles {
        let speed = tick_speed(&prop, transform.translation, &phase);
        prop.current_speed = speed;
        if speed > 0.0 {
            advance_position(&mut transform.translation, prop.heading, speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn east_west_green() -> SignalPhase {
        let mut phase = SignalPhase::new(100);
        phase.counter = 150;
        phase
    }

    #[test]
    fn test_heading_axes() {
        assert_eq!(Heading::North.axis(), Axis::NorthSouth);
        assert_eq!(Heading::West.axis(), Axis::EastWest);
        assert_eq!(Heading::North.yaw(), 0.0);
        assert_eq!(Heading::East.yaw(), std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_stop_bands_are_open_intervals() {
        assert!(in_stop_band(Axis::NorthSouth, Vec3::new(0.0, 1.0, 30.0)));
        assert!(!in_stop_band(Axis::NorthSouth, Vec3::new(0.0, 1.0, 35.0)));
        assert!(!in_stop_band(Axis::NorthSouth, Vec3::new(0.0, 1.0, 25.0)));
        assert!(in_stop_band(Axis::NorthSouth, Vec3::new(0.0, 1.0, -26.0)));
        assert!(in_stop_band(Axis::EastWest, Vec3::new(0.0, 1.0, 30.0)));
        assert!(in_stop_band(Axis::EastWest, Vec3::new(-40.0, 1.0, 30.0)));
        assert!(!in_stop_band(Axis::EastWest, Vec3::new(20.0, 1.0, 30.0)));
    }

    #[test]
    fn test_north_south_vehicle_held_on_red_inside_band() {
        let prop = VehicleProp::new(Heading::North, 0.25, [255, 0, 0]);
        let phase = east_west_green();
        assert_eq!(tick_speed(&prop, Vec3::new(0.0, 1.0, 30.0), &phase), 0.0);
        // Outside the band it keeps moving even on red.
        assert_eq!(tick_speed(&prop, Vec3::new(0.0, 1.0, 10.0), &phase), 0.25);
    }

    #[test]
    fn test_north_south_vehicle_moves_on_green() {
        let prop = VehicleProp::new(Heading::South, 0.2, [0, 0, 255]);
        let phase = SignalPhase::new(100);
        assert_eq!(tick_speed(&prop, Vec3::new(-40.0, 1.0, 30.0), &phase), 0.2);
    }

    #[test]
    fn test_east_west_vehicle_held_while_north_south_green() {
        let prop = VehicleProp::new(Heading::East, 0.18, [0, 255, 0]);
        let phase = SignalPhase::new(100);
        assert_eq!(tick_speed(&prop, Vec3::new(0.0, 1.0, -30.0), &phase), 0.0);
        assert_eq!(
            tick_speed(&prop, Vec3::new(0.0, 1.0, -30.0), &east_west_green()),
            0.18
        );
    }

    #[test]
    fn test_advance_moves_along_heading() {
        let mut pos = Vec3::new(0.0, 1.0, 20.0);
        advance_position(&mut pos, Heading::North, 0.5);
        assert_eq!(pos, Vec3::new(0.0, 1.0, 19.5));

        let mut pos = Vec3::new(10.0, 1.0, 30.0);
        advance_position(&mut pos, Heading::West, 1.0);
        assert_eq!(pos, Vec3::new(9.0, 1.0, 30.0));
    }

    #[test]
    fn test_wrap_to_opposite_edge() {
        let mut pos = Vec3::new(0.0, 1.0, -99.9);
        advance_position(&mut pos, Heading::North, 0.25);
        assert_eq!(pos.z, WRAP_EXTENT);

        let mut pos = Vec3::new(-40.0, 1.0, 99.9);
        advance_position(&mut pos, Heading::South, 0.2);
        assert_eq!(pos.z, -WRAP_EXTENT);

        let mut pos = Vec3::new(99.95, 1.0, 30.0);
        advance_position(&mut pos, Heading::East, 0.22);
        assert_eq!(pos.x, -WRAP_EXTENT);

        let mut pos = Vec3::new(-99.9, 1.0, -30.0);
        advance_position(&mut pos, Heading::West, 0.18);
        assert_eq!(pos.x, WRAP_EXTENT);
    }

    #[test]
    fn test_trailing_edge_does_not_wrap() {
        // A north-bound vehicle beyond the south edge keeps its position.
        let mut pos = Vec3::new(0.0, 1.0, 100.5);
        advance_position(&mut pos, Heading::North, 0.25);
        assert_eq!(pos.z, 100.25);
    }
}
