//! Integration tests for the digital-twin lifecycle and scene loop.
//!
//! Run: cargo test -p simulation --test scene_loop

use simulation::app_state::{AppState, TwinView};
use simulation::config::DEFAULT_PHASE_LENGTH;
use simulation::layout::VEHICLE_SPAWNS;
use simulation::live_feed::LiveFeed;
use simulation::settings::ShowcaseSettings;
use simulation::signal::Axis;
use simulation::test_harness::TestScene;
use simulation::vehicles::Heading;

// ---------------------------------------------------------------------------
// Mount / unmount
// ---------------------------------------------------------------------------

#[test]
fn test_starts_on_landing_without_scene() {
    let mut scene = TestScene::new();
    assert_eq!(scene.page(), AppState::Landing);
    assert_eq!(scene.twin_view(), None);
    scene.assert_scene_released();
}

#[test]
fn test_dashboard_starts_with_twin_hidden() {
    let mut scene = TestScene::new();
    scene.navigate(AppState::Dashboard);
    assert_eq!(scene.twin_view(), Some(TwinView::Hidden));
    assert_eq!(scene.vehicle_count(), 0);
}

#[test]
fn test_live_twin_mounts_full_scene() {
    let mut scene = TestScene::new().with_live_twin();
    assert_eq!(scene.twin_view(), Some(TwinView::Live));
    scene.assert_scene_mounted();
    assert_eq!(scene.phase().counter, 0);
}

#[test]
fn test_hiding_twin_releases_scene() {
    let mut scene = TestScene::new().with_live_twin();
    scene.tick(10);
    scene.set_twin_view(TwinView::Hidden);
    scene.assert_scene_released();
}

#[test]
fn test_leaving_dashboard_releases_scene() {
    let mut scene = TestScene::new().with_live_twin();
    scene.tick(10);
    scene.navigate(AppState::Detection);
    assert_eq!(scene.twin_view(), None);
    scene.assert_scene_released();
}

#[test]
fn test_remount_starts_fresh() {
    let mut scene = TestScene::new().with_live_twin();
    scene.tick(37);
    scene.navigate(AppState::Landing);
    scene.navigate(AppState::Dashboard);
    scene.set_twin_view(TwinView::Live);
    scene.assert_scene_mounted();
    assert_eq!(scene.phase().counter, 0);
    let vehicles = scene.vehicles();
    for spawn in VEHICLE_SPAWNS {
        assert!(
            vehicles
                .iter()
                .any(|(_, pos)| pos.x == spawn.x && pos.z == spawn.z),
            "no vehicle back at spawn ({}, {})",
            spawn.x,
            spawn.z
        );
    }
}

#[test]
fn test_start_route_from_settings() {
    let scene = TestScene::with_settings(ShowcaseSettings {
        start_route: "/detection".to_string(),
        ..Default::default()
    });
    assert_eq!(scene.page(), AppState::Detection);
}

// ---------------------------------------------------------------------------
// Scene loop
// ---------------------------------------------------------------------------

#[test]
fn test_hidden_twin_does_not_tick() {
    let mut scene = TestScene::new();
    scene.navigate(AppState::Dashboard);
    scene.tick(50);
    assert_eq!(scene.phase().counter, 0);
}

#[test]
fn test_phase_flag_restored_after_full_cycle() {
    let mut scene = TestScene::new().with_live_twin();
    let initial = scene.phase().north_south_green();
    scene.tick(2 * DEFAULT_PHASE_LENGTH);
    assert_eq!(scene.phase().north_south_green(), initial);
    assert_eq!(scene.phase().counter, 0);
}

#[test]
fn test_lamps_follow_phase() {
    let mut scene = TestScene::new().with_live_twin();
    scene.assert_axis_green(Axis::NorthSouth);
    scene.assert_axis_red(Axis::EastWest);

    scene.tick(DEFAULT_PHASE_LENGTH);
    scene.assert_axis_green(Axis::EastWest);
    scene.assert_axis_red(Axis::NorthSouth);
}

#[test]
fn test_vehicle_held_at_red_then_released() {
    let mut scene = TestScene::new().with_live_twin();
    let find = |scene: &mut TestScene| {
        scene
            .vehicles()
            .into_iter()
            .find(|(prop, _)| prop.heading == Heading::North && prop.color == [0xff, 0xff, 0x00])
            .expect("yellow north-bound vehicle")
    };

    // 99 green ticks carry it from z = -10 into the (-35, -25) band.
    scene.tick(DEFAULT_PHASE_LENGTH - 1);
    let (_, before) = find(&mut scene);
    assert_eq!(before.z, -34.75);

    // North-south turns red and the vehicle waits.
    scene.tick(50);
    let (prop, held) = find(&mut scene);
    assert!(prop.is_stopped());
    assert_eq!(held.z, before.z);

    // Green again at the start of the next cycle.
    scene.tick(DEFAULT_PHASE_LENGTH / 2 + 1);
    let (prop, moved) = find(&mut scene);
    assert!(!prop.is_stopped());
    assert!(moved.z < held.z);
}

#[test]
fn test_free_vehicles_move_at_cruise_speed() {
    let mut scene = TestScene::new().with_live_twin();
    let before = scene.vehicles();
    scene.tick(1);
    let after = scene.vehicles();
    for ((prop, a), (_, b)) in before.iter().zip(&after) {
        let moved = a.distance(*b);
        assert!(
            (moved - prop.cruise_speed).abs() < 1e-4,
            "{:?} moved {moved}, cruise {}",
            prop.heading,
            prop.cruise_speed
        );
    }
}

#[test]
fn test_custom_phase_length() {
    let mut scene = TestScene::with_settings(ShowcaseSettings {
        phase_length: 40,
        ..Default::default()
    })
    .with_live_twin();
    scene.tick(40);
    assert!(!scene.phase().north_south_green());
    scene.tick(40);
    assert!(scene.phase().north_south_green());
}

// ---------------------------------------------------------------------------
// Live feed
// ---------------------------------------------------------------------------

#[test]
fn test_leaving_dashboard_hides_live_feed() {
    let mut scene = TestScene::new();
    scene.navigate(AppState::Dashboard);
    scene.world_mut().resource_mut::<LiveFeed>().on_screen = true;
    scene.navigate(AppState::Landing);
    assert!(!scene.resource::<LiveFeed>().on_screen);
}
