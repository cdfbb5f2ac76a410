//! Hard-coded telemetry shown by the dashboard, landing and detection pages.
//!
//! Nothing here is measured or mutated: every table is a `&'static` slice of
//! display fixtures. The few derived numbers the pages show (peak hour,
//! morning/evening trend, pie fractions, map projection) are computed by the
//! pure functions next to the data they read.

pub mod analytics;
pub mod detections;
pub mod incidents;
pub mod landing;
pub mod routing;

#[cfg(test)]
mod tests;

/// Direction of change shown next to a headline number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Color family used to tint a card or chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Traffic,
    Amber,
    Blue,
    Red,
    Green,
}

impl Tint {
    /// sRGB accent for this tint.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Tint::Traffic => [0x02, 0x84, 0xc7],
            Tint::Amber => [0xd9, 0x77, 0x06],
            Tint::Blue => [0x25, 0x63, 0xeb],
            Tint::Red => [0xdc, 0x26, 0x26],
            Tint::Green => [0x16, 0xa3, 0x4a],
        }
    }
}

/// A headline stat card on top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlineStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub tint: Tint,
}

pub const HEADLINE_STATS: &[HeadlineStat] = &[
    HeadlineStat {
        title: "Total Vehicles",
        value: "24,892",
        change: "+12%",
        trend: Trend::Up,
        tint: Tint::Traffic,
    },
    HeadlineStat {
        title: "Current Congestion",
        value: "65%",
        change: "+5%",
        trend: Trend::Up,
        tint: Tint::Amber,
    },
    HeadlineStat {
        title: "Average Speed",
        value: "28 km/h",
        change: "-3 km/h",
        trend: Trend::Down,
        tint: Tint::Blue,
    },
    HeadlineStat {
        title: "Active Incidents",
        value: "7",
        change: "+2",
        trend: Trend::Up,
        tint: Tint::Red,
    },
];

/// Summary tiles under the digital twin.
pub const TWIN_SUMMARY: &[HeadlineStat] = &[
    HeadlineStat {
        title: "Traffic Flow",
        value: "92%",
        change: "Optimal efficiency",
        trend: Trend::Up,
        tint: Tint::Green,
    },
    HeadlineStat {
        title: "Average Speed",
        value: "32 mph",
        change: "City center area",
        trend: Trend::Down,
        tint: Tint::Amber,
    },
    HeadlineStat {
        title: "Vehicle Count",
        value: "1,248",
        change: "Currently in system",
        trend: Trend::Up,
        tint: Tint::Blue,
    },
];

pub const TWIN_ALERT: &str =
    "Traffic congestion detected at Main Street & 5th Avenue. Rerouting recommendations activated.";

/// Chart palette cycled by index.
pub const CHART_COLORS: &[[u8; 3]] = &[
    [0x00, 0x88, 0xfe],
    [0x00, 0xc4, 0x9f],
    [0xff, 0xbb, 0x28],
    [0xff, 0x80, 0x42],
    [0x88, 0x84, 0xd8],
    [0x0e, 0xa5, 0xe9],
    [0xf5, 0x9e, 0x0b],
];

pub fn chart_color(index: usize) -> [u8; 3] {
    CHART_COLORS[index % CHART_COLORS.len()]
}
