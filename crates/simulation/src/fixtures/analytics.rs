//! Chart series for the dashboard's analysis views.

/// One point of the 24-hour volume/congestion series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficSample {
    pub time: &'static str,
    pub volume: u32,
    /// Congestion in percent.
    pub congestion: u32,
}

pub const DAILY_TRAFFIC: &[TrafficSample] = &[
    TrafficSample { time: "00:00", volume: 420, congestion: 10 },
    TrafficSample { time: "03:00", volume: 250, congestion: 5 },
    TrafficSample { time: "06:00", volume: 1100, congestion: 45 },
    TrafficSample { time: "09:00", volume: 1800, congestion: 85 },
    TrafficSample { time: "12:00", volume: 1400, congestion: 65 },
    TrafficSample { time: "15:00", volume: 1600, congestion: 75 },
    TrafficSample { time: "18:00", volume: 2100, congestion: 95 },
    TrafficSample { time: "21:00", volume: 1200, congestion: 55 },
];

/// One point of the enhanced analytics series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticsSample {
    pub time: &'static str,
    pub vehicles: u32,
    pub incidents: u32,
    pub congestion: u32,
    /// Average speed in mph.
    pub speed: u32,
}

pub const ANALYTICS_SERIES: &[AnalyticsSample] = &[
    AnalyticsSample { time: "00:00", vehicles: 320, incidents: 1, congestion: 15, speed: 40 },
    AnalyticsSample { time: "03:00", vehicles: 180, incidents: 0, congestion: 8, speed: 52 },
    AnalyticsSample { time: "06:00", vehicles: 620, incidents: 2, congestion: 35, speed: 28 },
    AnalyticsSample { time: "09:00", vehicles: 1400, incidents: 3, congestion: 78, speed: 15 },
    AnalyticsSample { time: "12:00", vehicles: 1100, incidents: 1, congestion: 60, speed: 22 },
    AnalyticsSample { time: "15:00", vehicles: 1320, incidents: 2, congestion: 75, speed: 18 },
    AnalyticsSample { time: "18:00", vehicles: 1650, incidents: 4, congestion: 90, speed: 12 },
    AnalyticsSample { time: "21:00", vehicles: 980, incidents: 2, congestion: 55, speed: 24 },
];

/// A slice of the vehicle-type pie chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleShare {
    pub name: &'static str,
    /// Share in percent. The table sums to 100.
    pub percent: u32,
    pub color: [u8; 3],
}

pub const VEHICLE_SHARES: &[VehicleShare] = &[
    VehicleShare { name: "Cars", percent: 68, color: [0x3b, 0x82, 0xf6] },
    VehicleShare { name: "Trucks", percent: 12, color: [0xf9, 0x73, 0x16] },
    VehicleShare { name: "Motorcycles", percent: 8, color: [0x8b, 0x5c, 0xf6] },
    VehicleShare { name: "Buses", percent: 7, color: [0x22, 0xc5, 0x5e] },
    VehicleShare { name: "Bicycles", percent: 5, color: [0xea, 0xb3, 0x08] },
];

/// Incident count per category over the last 24 hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidentTally {
    pub kind: &'static str,
    pub count: u32,
    pub color: [u8; 3],
}

pub const INCIDENTS_BY_TYPE: &[IncidentTally] = &[
    IncidentTally { kind: "Congestion", count: 42, color: [0xf9, 0x73, 0x16] },
    IncidentTally { kind: "Accidents", count: 7, color: [0xef, 0x44, 0x44] },
    IncidentTally { kind: "Roadwork", count: 12, color: [0x3b, 0x82, 0xf6] },
    IncidentTally { kind: "Weather", count: 5, color: [0x8b, 0x5c, 0xf6] },
    IncidentTally { kind: "Events", count: 8, color: [0x22, 0xc5, 0x5e] },
];

/// Vehicles counted per type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleCount {
    pub kind: &'static str,
    pub count: u32,
}

/// Compact table for the overview card.
pub const VEHICLE_COUNTS: &[VehicleCount] = &[
    VehicleCount { kind: "Cars", count: 1200 },
    VehicleCount { kind: "Trucks", count: 300 },
    VehicleCount { kind: "Buses", count: 150 },
    VehicleCount { kind: "Motorcycles", count: 400 },
    VehicleCount { kind: "Bicycles", count: 250 },
];

/// Full table for the expanded analysis view.
pub const VEHICLE_COUNTS_DETAILED: &[VehicleCount] = &[
    VehicleCount { kind: "Cars", count: 1200 },
    VehicleCount { kind: "SUVs", count: 650 },
    VehicleCount { kind: "Trucks", count: 300 },
    VehicleCount { kind: "Buses", count: 150 },
    VehicleCount { kind: "Motorcycles", count: 400 },
    VehicleCount { kind: "Bicycles", count: 250 },
    VehicleCount { kind: "Pedestrians", count: 520 },
];

/// Hourly congestion level and speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyCongestion {
    pub time: &'static str,
    pub level: u32,
    pub speed: u32,
}

pub const HOURLY_CONGESTION: &[HourlyCongestion] = &[
    HourlyCongestion { time: "6:00", level: 30, speed: 45 },
    HourlyCongestion { time: "7:00", level: 50, speed: 35 },
    HourlyCongestion { time: "8:00", level: 80, speed: 20 },
    HourlyCongestion { time: "9:00", level: 65, speed: 25 },
    HourlyCongestion { time: "10:00", level: 50, speed: 30 },
    HourlyCongestion { time: "11:00", level: 45, speed: 35 },
    HourlyCongestion { time: "12:00", level: 50, speed: 30 },
    HourlyCongestion { time: "13:00", level: 55, speed: 28 },
    HourlyCongestion { time: "14:00", level: 60, speed: 26 },
    HourlyCongestion { time: "15:00", level: 70, speed: 22 },
    HourlyCongestion { time: "16:00", level: 85, speed: 18 },
    HourlyCongestion { time: "17:00", level: 90, speed: 15 },
    HourlyCongestion { time: "18:00", level: 75, speed: 20 },
    HourlyCongestion { time: "19:00", level: 60, speed: 28 },
    HourlyCongestion { time: "20:00", level: 40, speed: 38 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklySample {
    pub day: &'static str,
    pub volume: u32,
    pub congestion: u32,
}

pub const WEEKLY_TRAFFIC: &[WeeklySample] = &[
    WeeklySample { day: "Mon", volume: 2100, congestion: 75 },
    WeeklySample { day: "Tue", volume: 1950, congestion: 68 },
    WeeklySample { day: "Wed", volume: 2000, congestion: 70 },
    WeeklySample { day: "Thu", volume: 2200, congestion: 78 },
    WeeklySample { day: "Fri", volume: 2400, congestion: 85 },
    WeeklySample { day: "Sat", volume: 1800, congestion: 55 },
    WeeklySample { day: "Sun", volume: 1400, congestion: 40 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PedestrianSample {
    pub time: &'static str,
    pub count: u32,
}

pub const PEDESTRIAN_ACTIVITY: &[PedestrianSample] = &[
    PedestrianSample { time: "6:00", count: 120 },
    PedestrianSample { time: "8:00", count: 350 },
    PedestrianSample { time: "10:00", count: 280 },
    PedestrianSample { time: "12:00", count: 450 },
    PedestrianSample { time: "14:00", count: 380 },
    PedestrianSample { time: "16:00", count: 520 },
    PedestrianSample { time: "18:00", count: 620 },
    PedestrianSample { time: "20:00", count: 250 },
];

/// Road-sign compliance in percent; `compliance + violations == 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignCompliance {
    pub sign: &'static str,
    pub compliance: u32,
    pub violations: u32,
}

pub const SIGN_COMPLIANCE: &[SignCompliance] = &[
    SignCompliance { sign: "Stop Signs", compliance: 82, violations: 18 },
    SignCompliance { sign: "Traffic Lights", compliance: 88, violations: 12 },
    SignCompliance { sign: "Speed Limits", compliance: 65, violations: 35 },
    SignCompliance { sign: "Pedestrian Crossings", compliance: 75, violations: 25 },
    SignCompliance { sign: "No Parking", compliance: 70, violations: 30 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaDensity {
    pub area: &'static str,
    pub density: u32,
}

pub const AREA_DENSITY: &[AreaDensity] = &[
    AreaDensity { area: "Downtown", density: 85 },
    AreaDensity { area: "Uptown", density: 65 },
    AreaDensity { area: "Midtown", density: 75 },
    AreaDensity { area: "West Side", density: 50 },
    AreaDensity { area: "East Side", density: 60 },
    AreaDensity { area: "South End", density: 45 },
    AreaDensity { area: "North End", density: 40 },
];

/// Time label with the highest congestion. Ties go to the earliest sample.
pub fn peak_hour(samples: &[AnalyticsSample]) -> Option<&'static str> {
    let mut best: Option<&AnalyticsSample> = None;
    for sample in samples {
        match best {
            Some(b) if sample.congestion <= b.congestion => {}
            _ => best = Some(sample),
        }
    }
    best.map(|s| s.time)
}

/// Morning versus evening rush-hour comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakTrends {
    /// Mean congestion over the morning window, rounded.
    pub morning: u32,
    /// Mean congestion over the evening window, rounded.
    pub evening: u32,
    /// Evening minus morning means, rounded.
    pub difference: i32,
    pub evening_worse: bool,
}

/// Samples 2..4 form the morning window and 5..7 the evening window of the
/// three-hourly series.
pub fn peak_trends(samples: &[AnalyticsSample]) -> Option<PeakTrends> {
    let morning = mean_congestion(samples.get(2..4)?)?;
    let evening = mean_congestion(samples.get(5..7)?)?;
    Some(PeakTrends {
        morning: morning.round() as u32,
        evening: evening.round() as u32,
        difference: (evening - morning).round() as i32,
        evening_worse: evening > morning,
    })
}

fn mean_congestion(window: &[AnalyticsSample]) -> Option<f32> {
    if window.is_empty() {
        return None;
    }
    let sum: u32 = window.iter().map(|s| s.congestion).sum();
    Some(sum as f32 / window.len() as f32)
}

/// Fraction of the pie taken by slice `index`.
pub fn share_fraction(shares: &[VehicleShare], index: usize) -> f32 {
    let total: u32 = shares.iter().map(|s| s.percent).sum();
    match shares.get(index) {
        Some(share) if total > 0 => share.percent as f32 / total as f32,
        _ => 0.0,
    }
}
