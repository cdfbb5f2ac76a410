//! Congestion points and alternative routes for the routing map.

use super::incidents::Severity;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

const fn geo(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint { lat, lng }
}

/// A decorative congestion marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CongestionPoint {
    pub id: u32,
    pub at: GeoPoint,
    pub severity: Severity,
    pub name: &'static str,
}

pub const CONGESTION_POINTS: &[CongestionPoint] = &[
    CongestionPoint { id: 1, at: geo(40.712, -74.006), severity: Severity::High, name: "Main St & 5th Ave" },
    CongestionPoint { id: 2, at: geo(40.713, -74.012), severity: Severity::Medium, name: "Broadway & 34th St" },
    CongestionPoint { id: 3, at: geo(40.708, -73.998), severity: Severity::Low, name: "East Residential Area" },
    CongestionPoint { id: 4, at: geo(40.718, -74.009), severity: Severity::High, name: "Highway 101 North" },
];

/// A suggested detour around a congestion point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlternativeRoute {
    pub id: u32,
    pub origin: &'static str,
    pub destination: &'static str,
    pub waypoints: &'static [GeoPoint],
    pub minutes_saved: u32,
    pub distance: &'static str,
}

impl AlternativeRoute {
    pub fn button_label(&self) -> String {
        format!("Route {} (-{} mins)", self.id, self.minutes_saved)
    }

    pub fn summary(&self) -> String {
        format!(
            "This route saves approximately {} minutes of travel time by avoiding congestion at {}.",
            self.minutes_saved, self.origin
        )
    }
}

pub const ALTERNATIVE_ROUTES: &[AlternativeRoute] = &[
    AlternativeRoute {
        id: 1,
        origin: "Main St & 5th Ave",
        destination: "Downtown",
        waypoints: &[
            geo(40.712, -74.006),
            geo(40.710, -74.003),
            geo(40.708, -74.000),
            geo(40.705, -73.998),
        ],
        minutes_saved: 8,
        distance: "1.2 miles",
    },
    AlternativeRoute {
        id: 2,
        origin: "Broadway & 34th St",
        destination: "Midtown",
        waypoints: &[
            geo(40.713, -74.012),
            geo(40.715, -74.015),
            geo(40.718, -74.018),
            geo(40.720, -74.020),
        ],
        minutes_saved: 5,
        distance: "0.8 miles",
    },
];

/// Bounding box used to project geographic points onto the map canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl MapBounds {
    /// Smallest box containing every congestion point and route waypoint,
    /// padded by `margin` of its size on each side.
    pub fn covering_fixtures(margin: f64) -> Self {
        let points = CONGESTION_POINTS
            .iter()
            .map(|p| p.at)
            .chain(ALTERNATIVE_ROUTES.iter().flat_map(|r| r.waypoints.iter().copied()));
        let mut min = geo(f64::INFINITY, f64::INFINITY);
        let mut max = geo(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min.lat = min.lat.min(p.lat);
            min.lng = min.lng.min(p.lng);
            max.lat = max.lat.max(p.lat);
            max.lng = max.lng.max(p.lng);
        }
        let pad_lat = (max.lat - min.lat) * margin;
        let pad_lng = (max.lng - min.lng) * margin;
        Self {
            min: geo(min.lat - pad_lat, min.lng - pad_lng),
            max: geo(max.lat + pad_lat, max.lng + pad_lng),
        }
    }

    /// Normalized canvas position in `[0, 1]²`: u grows east, v grows south.
    pub fn project(&self, p: GeoPoint) -> (f32, f32) {
        let span_lng = (self.max.lng - self.min.lng).max(f64::EPSILON);
        let span_lat = (self.max.lat - self.min.lat).max(f64::EPSILON);
        let u = (p.lng - self.min.lng) / span_lng;
        let v = (self.max.lat - p.lat) / span_lat;
        (u.clamp(0.0, 1.0) as f32, v.clamp(0.0, 1.0) as f32)
    }
}
