//! Fixed layout of the digital-twin scene.
//!
//! Everything here is plain data: the `rendering` crate turns it into meshes
//! and the vehicle systems use the spawn table. Coordinates are world units
//! on the ground plane (x east, z south), matching Bevy's Y-up convention.

use bevy::prelude::*;

use crate::config::{MARKING_SPACING, ROAD_LENGTH, ROAD_WIDTH};
use crate::signal::Axis;
use crate::vehicles::Heading;

/// One straight road strip running the full length of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadStrip {
    /// Direction the road runs.
    pub axis: Axis,
    /// x for north–south roads, z for east–west roads.
    pub offset: f32,
}

impl RoadStrip {
    /// Ground-plane center of the strip.
    pub fn center(&self) -> Vec2 {
        match self.axis {
            Axis::NorthSouth => Vec2::new(self.offset, 0.0),
            Axis::EastWest => Vec2::new(0.0, self.offset),
        }
    }

    /// Footprint as (x extent, z extent).
    pub fn size(&self) -> Vec2 {
        match self.axis {
            Axis::NorthSouth => Vec2::new(ROAD_WIDTH, ROAD_LENGTH),
            Axis::EastWest => Vec2::new(ROAD_LENGTH, ROAD_WIDTH),
        }
    }

    /// Centers of the center-line dashes, one every [`MARKING_SPACING`]
    /// units from two units inside the near end.
    pub fn marking_centers(&self) -> Vec<Vec2> {
        let half = ROAD_LENGTH / 2.0;
        let mut along = -half + 2.0;
        let mut out = Vec::new();
        while along < half {
            out.push(match self.axis {
                Axis::NorthSouth => Vec2::new(self.offset, along),
                Axis::EastWest => Vec2::new(along, self.offset),
            });
            along += MARKING_SPACING;
        }
        out
    }
}

pub const ROADS: [RoadStrip; 5] = [
    RoadStrip { axis: Axis::NorthSouth, offset: 0.0 },
    RoadStrip { axis: Axis::EastWest, offset: -30.0 },
    RoadStrip { axis: Axis::EastWest, offset: 30.0 },
    RoadStrip { axis: Axis::NorthSouth, offset: -40.0 },
    RoadStrip { axis: Axis::NorthSouth, offset: 40.0 },
];

/// A box-shaped building block standing on the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingBlock {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    /// sRGB color.
    pub color: [u8; 3],
}

const fn block(x: f32, z: f32, width: f32, depth: f32, height: f32, color: [u8; 3]) -> BuildingBlock {
    BuildingBlock { x, z, width, depth, height, color }
}

pub const BUILDINGS: [BuildingBlock; 12] = [
    block(-25.0, -15.0, 20.0, 20.0, 15.0, [0x88, 0x99, 0xaa]),
    block(-60.0, -40.0, 30.0, 25.0, 20.0, [0x99, 0xaa, 0xbb]),
    block(-20.0, -60.0, 25.0, 30.0, 25.0, [0xaa, 0xbb, 0xcc]),
    block(25.0, -15.0, 20.0, 20.0, 30.0, [0x77, 0x88, 0xaa]),
    block(60.0, -40.0, 30.0, 25.0, 15.0, [0x99, 0xaa, 0xcc]),
    block(20.0, -60.0, 25.0, 30.0, 20.0, [0x88, 0x99, 0xbb]),
    block(-25.0, 15.0, 20.0, 20.0, 25.0, [0x77, 0x99, 0xaa]),
    block(-60.0, 40.0, 30.0, 25.0, 15.0, [0x88, 0x99, 0xbb]),
    block(-20.0, 60.0, 25.0, 30.0, 20.0, [0x99, 0xaa, 0xbb]),
    block(25.0, 15.0, 20.0, 20.0, 35.0, [0xaa, 0xbb, 0xcc]),
    block(60.0, 40.0, 30.0, 25.0, 20.0, [0x77, 0x88, 0xaa]),
    block(20.0, 60.0, 25.0, 30.0, 15.0, [0x99, 0xaa, 0xcc]),
];

/// A signal post at an intersection approach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalPost {
    pub x: f32,
    pub z: f32,
    /// Traffic this post controls.
    pub axis: Axis,
}

pub const SIGNAL_POSTS: [SignalPost; 8] = [
    SignalPost { x: 6.0, z: -30.0, axis: Axis::EastWest },
    SignalPost { x: -6.0, z: -30.0, axis: Axis::EastWest },
    SignalPost { x: 6.0, z: 30.0, axis: Axis::EastWest },
    SignalPost { x: -6.0, z: 30.0, axis: Axis::EastWest },
    SignalPost { x: -40.0, z: 6.0, axis: Axis::NorthSouth },
    SignalPost { x: -40.0, z: -6.0, axis: Axis::NorthSouth },
    SignalPost { x: 40.0, z: 6.0, axis: Axis::NorthSouth },
    SignalPost { x: 40.0, z: -6.0, axis: Axis::NorthSouth },
];

/// Initial placement of one moving vehicle prop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSpawn {
    pub x: f32,
    pub z: f32,
    pub color: [u8; 3],
    pub heading: Heading,
    /// Distance covered per tick when not held at a signal.
    pub speed: f32,
}

const fn car(x: f32, z: f32, color: [u8; 3], heading: Heading, speed: f32) -> VehicleSpawn {
    VehicleSpawn { x, z, color, heading, speed }
}

pub const VEHICLE_SPAWNS: [VehicleSpawn; 21] = [
    // Main north–south road.
    car(0.0, 20.0, [0xff, 0x00, 0x00], Heading::North, 0.25),
    car(0.0, 10.0, [0x00, 0x00, 0xff], Heading::North, 0.25),
    car(0.0, 0.0, [0x00, 0xff, 0x00], Heading::North, 0.25),
    car(0.0, -10.0, [0xff, 0xff, 0x00], Heading::North, 0.25),
    car(0.0, -20.0, [0xff, 0x00, 0xff], Heading::North, 0.25),
    // Southern east–west road.
    car(-20.0, -30.0, [0x00, 0xff, 0xff], Heading::West, 0.18),
    car(-10.0, -30.0, [0xff, 0xaa, 0x00], Heading::West, 0.18),
    car(10.0, -30.0, [0x00, 0xaa, 0xff], Heading::East, 0.18),
    car(20.0, -30.0, [0xaa, 0xff, 0x00], Heading::East, 0.18),
    // Northern east–west road.
    car(-20.0, 30.0, [0xff, 0x00, 0xaa], Heading::West, 0.22),
    car(-10.0, 30.0, [0xaa, 0x00, 0xff], Heading::West, 0.22),
    car(10.0, 30.0, [0x00, 0xff, 0xaa], Heading::East, 0.22),
    car(20.0, 30.0, [0xaa, 0xff, 0x00], Heading::East, 0.22),
    // West north–south road.
    car(-40.0, 20.0, [0xff, 0x55, 0x00], Heading::South, 0.2),
    car(-40.0, 10.0, [0x00, 0x55, 0xff], Heading::South, 0.2),
    car(-40.0, -10.0, [0x55, 0xff, 0x00], Heading::South, 0.2),
    car(-40.0, -20.0, [0xff, 0x55, 0x55], Heading::South, 0.2),
    // East north–south road.
    car(40.0, 20.0, [0x55, 0xff, 0x55], Heading::North, 0.15),
    car(40.0, 10.0, [0x55, 0x55, 0xff], Heading::North, 0.15),
    car(40.0, -10.0, [0xff, 0x55, 0xff], Heading::North, 0.15),
    car(40.0, -20.0, [0x55, 0xff, 0xff], Heading::North, 0.15),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WRAP_EXTENT;

    #[test]
    fn test_every_vehicle_starts_on_a_road() {
        for spawn in VEHICLE_SPAWNS {
            let on_road = ROADS.iter().any(|road| {
                road.axis == spawn.heading.axis()
                    && match road.axis {
                        Axis::NorthSouth => road.offset == spawn.x,
                        Axis::EastWest => road.offset == spawn.z,
                    }
            });
            assert!(on_road, "vehicle at ({}, {}) is off-road", spawn.x, spawn.z);
        }
    }

    #[test]
    fn test_spawns_inside_wrap_extent() {
        for spawn in VEHICLE_SPAWNS {
            assert!(spawn.x.abs() <= WRAP_EXTENT && spawn.z.abs() <= WRAP_EXTENT);
            assert!(spawn.speed > 0.0);
        }
    }

    #[test]
    fn test_signal_posts_split_evenly_between_axes() {
        let ns = SIGNAL_POSTS.iter().filter(|p| p.axis == Axis::NorthSouth).count();
        assert_eq!(ns, 4);
        assert_eq!(SIGNAL_POSTS.len() - ns, 4);
    }

    #[test]
    fn test_marking_centers_span_the_road() {
        let road = ROADS[0];
        let marks = road.marking_centers();
        assert_eq!(marks.len(), 40);
        assert_eq!(marks[0], Vec2::new(0.0, -98.0));
        assert_eq!(marks[39], Vec2::new(0.0, 97.0));

        let cross = ROADS[1].marking_centers();
        assert!(cross.iter().all(|m| m.y == -30.0));
    }

    #[test]
    fn test_road_footprints() {
        assert_eq!(ROADS[0].size(), Vec2::new(ROAD_WIDTH, ROAD_LENGTH));
        assert_eq!(ROADS[1].size(), Vec2::new(ROAD_LENGTH, ROAD_WIDTH));
        assert_eq!(ROADS[2].center(), Vec2::new(0.0, 30.0));
    }
}
