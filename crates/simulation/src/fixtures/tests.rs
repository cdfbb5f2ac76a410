//! Content checks on the fixture tables and the derived analytics.

use super::analytics::*;
use super::detections::*;
use super::incidents::*;
use super::landing::*;
use super::routing::*;
use super::*;

// ====================================================================
// Table consistency
// ====================================================================

#[test]
fn test_vehicle_shares_sum_to_100() {
    let total: u32 = VEHICLE_SHARES.iter().map(|s| s.percent).sum();
    assert_eq!(total, 100);
}

#[test]
fn test_sign_compliance_rows_sum_to_100() {
    for row in SIGN_COMPLIANCE {
        assert_eq!(row.compliance + row.violations, 100, "{}", row.sign);
    }
}

#[test]
fn test_congestion_percentages_in_range() {
    assert!(DAILY_TRAFFIC.iter().all(|s| s.congestion <= 100));
    assert!(ANALYTICS_SERIES.iter().all(|s| s.congestion <= 100));
    assert!(HOURLY_CONGESTION.iter().all(|s| s.level <= 100));
    assert!(AREA_DENSITY.iter().all(|a| a.density <= 100));
}

#[test]
fn test_incident_timelines_are_chronological() {
    for incident in INCIDENTS {
        assert!(!incident.updates.is_empty());
        for pair in incident.updates.windows(2) {
            assert!(pair[0].time <= pair[1].time, "incident {}", incident.id);
        }
    }
}

#[test]
fn test_incident_ids_unique() {
    let mut ids: Vec<u32> = INCIDENTS.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), INCIDENTS.len());
}

#[test]
fn test_live_incidents_subset() {
    assert_eq!(live_incidents().len(), 3);
    assert_eq!(live_incidents()[0].kind, IncidentKind::Accident);
    assert_eq!(severity_breakdown(INCIDENTS), (1, 2, 1));
}

#[test]
fn test_incident_clock_time() {
    assert_eq!(INCIDENTS[0].clock_time(), "10:30");
    assert_eq!(INCIDENTS[2].clock_time(), "11:00");
}

#[test]
fn test_routes_have_waypoints() {
    for route in ALTERNATIVE_ROUTES {
        assert!(route.waypoints.len() >= 2);
        assert!(route.button_label().contains(&route.minutes_saved.to_string()));
        assert!(route.summary().contains(route.origin));
    }
}

#[test]
fn test_detection_confidences_in_unit_range() {
    for d in ANALYSIS_RESULTS.iter().chain(FEED_DETECTIONS) {
        assert!((0.0..=1.0).contains(&d.confidence));
        assert!(d.width > 0.0 && d.height > 0.0);
    }
}

#[test]
fn test_analysis_boxes_fit_canvas() {
    for d in ANALYSIS_RESULTS {
        assert!(d.x + d.width <= ANALYSIS_CANVAS[0]);
        assert!(d.y + d.height <= ANALYSIS_CANVAS[1]);
    }
}

#[test]
fn test_one_camera_in_maintenance() {
    let down = CAMERA_SOURCES
        .iter()
        .filter(|c| c.status == CameraStatus::Maintenance)
        .count();
    assert_eq!(down, 1);
}

#[test]
fn test_landing_copy_present() {
    assert_eq!(FEATURES.len(), 9);
    assert_eq!(HERO_HIGHLIGHTS.len(), 3);
    assert_eq!(FOOTER_COLUMNS.len(), 3);
    assert_eq!(
        copyright_line(2026),
        "© 2026 Smart Traffic Management System. All rights reserved."
    );
}

// ====================================================================
// Derived analytics
// ====================================================================

#[test]
fn test_peak_hour_is_evening_rush() {
    assert_eq!(peak_hour(ANALYTICS_SERIES), Some("18:00"));
    assert_eq!(peak_hour(&[]), None);
}

#[test]
fn test_peak_hour_ties_pick_earliest() {
    let samples = [
        AnalyticsSample { time: "a", vehicles: 0, incidents: 0, congestion: 50, speed: 0 },
        AnalyticsSample { time: "b", vehicles: 0, incidents: 0, congestion: 50, speed: 0 },
    ];
    assert_eq!(peak_hour(&samples), Some("a"));
}

#[test]
fn test_peak_trends() {
    let trends = peak_trends(ANALYTICS_SERIES).unwrap();
    // Morning (35 + 78) / 2 = 56.5, evening (75 + 90) / 2 = 82.5.
    assert_eq!(trends.morning, 57);
    assert_eq!(trends.evening, 83);
    assert_eq!(trends.difference, 26);
    assert!(trends.evening_worse);
}

#[test]
fn test_peak_trends_needs_full_series() {
    assert!(peak_trends(&ANALYTICS_SERIES[..4]).is_none());
}

#[test]
fn test_share_fraction() {
    assert!((share_fraction(VEHICLE_SHARES, 0) - 0.68).abs() < 1e-6);
    assert_eq!(share_fraction(VEHICLE_SHARES, 99), 0.0);
    let total: f32 = (0..VEHICLE_SHARES.len())
        .map(|i| share_fraction(VEHICLE_SHARES, i))
        .sum();
    assert!((total - 1.0).abs() < 1e-5);
}

#[test]
fn test_map_projection_stays_in_canvas() {
    let bounds = MapBounds::covering_fixtures(0.1);
    for p in CONGESTION_POINTS {
        let (u, v) = bounds.project(p.at);
        assert!(u > 0.0 && u < 1.0 && v > 0.0 && v < 1.0, "{}", p.name);
    }
    // East is right, north is up.
    let east = bounds.project(GeoPoint { lat: 40.712, lng: -73.998 });
    let west = bounds.project(GeoPoint { lat: 40.712, lng: -74.012 });
    assert!(east.0 > west.0);
    let north = bounds.project(GeoPoint { lat: 40.718, lng: -74.0 });
    let south = bounds.project(GeoPoint { lat: 40.708, lng: -74.0 });
    assert!(north.1 < south.1);
}

#[test]
fn test_chart_color_cycles() {
    assert_eq!(chart_color(0), chart_color(CHART_COLORS.len()));
}
