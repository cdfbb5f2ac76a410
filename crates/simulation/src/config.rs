/// Side length of the square ground plane in world units.
pub const GROUND_SIZE: f32 = 200.0;
/// Vehicles leaving the scene past this coordinate re-enter on the opposite side.
pub const WRAP_EXTENT: f32 = 100.0;

pub const ROAD_WIDTH: f32 = 12.0;
pub const ROAD_LENGTH: f32 = 200.0;
/// Distance between consecutive lane-marking dashes.
pub const MARKING_SPACING: f32 = 5.0;
pub const MARKING_LONG: f32 = 2.0;
pub const MARKING_SHORT: f32 = 0.5;

/// Road surfaces sit a hair above the ground to avoid z-fighting.
pub const ROAD_Y: f32 = 0.01;
pub const MARKING_Y: f32 = 0.02;

/// Vehicle box dimensions (width, height, length) and the height of their center.
pub const VEHICLE_SIZE: [f32; 3] = [2.0, 1.0, 4.0];
pub const VEHICLE_Y: f32 = 1.0;

pub const SIGNAL_POLE_RADIUS: f32 = 0.3;
pub const SIGNAL_POLE_HEIGHT: f32 = 7.0;
pub const SIGNAL_HOUSING_SIZE: [f32; 3] = [1.0, 3.0, 1.0];
pub const SIGNAL_HOUSING_Y: f32 = 7.0;
pub const SIGNAL_LAMP_RADIUS: f32 = 0.3;
/// Lamps sit on the +z face of the housing.
pub const SIGNAL_LAMP_FACE_OFFSET: f32 = 0.55;
pub const RED_LAMP_Y: f32 = 8.0;
pub const YELLOW_LAMP_Y: f32 = 7.0;
pub const GREEN_LAMP_Y: f32 = 6.0;

/// Ticks each axis keeps right of way. A full cycle is twice this.
pub const DEFAULT_PHASE_LENGTH: u32 = 100;
/// Ticks before a phase change during which the waiting axis shows amber.
pub const READY_WINDOW: u32 = 20;
/// Longest phase whose full cycle (twice the phase) still fits a `u32`.
pub const MAX_PHASE_LENGTH: u32 = u32::MAX / 2;
/// Scene loop rate. One tick per rendered frame at 60 fps.
pub const DEFAULT_TICK_HZ: f64 = 60.0;
/// Fastest accepted loop rate; the fixed timestep must stay non-zero.
pub const MAX_TICK_HZ: f64 = 1000.0;

pub const LAMP_BRIGHT: f32 = 0.8;
pub const LAMP_DIM: f32 = 0.1;

/// Seconds the mock analysis "runs" before results appear.
pub const ANALYSIS_DURATION_SECS: f32 = 2.5;
/// Live-feed detection boxes drift once per this many seconds.
pub const FEED_JITTER_INTERVAL_SECS: f32 = 1.0;
pub const FEED_JITTER_X: f32 = 5.0;
pub const FEED_JITTER_Y: f32 = 3.0;
/// Chance per jitter step that the live object counts change.
pub const FEED_COUNT_CHANGE_CHANCE: f64 = 0.3;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 75.0;
