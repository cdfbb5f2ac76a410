//! Live camera feed state for the dashboard.
//!
//! The feed is a mock: while detection is on, the fixture boxes drift by a
//! small random offset every [`FEED_JITTER_INTERVAL_SECS`] and the object
//! counters occasionally tick up or down. Nothing moves while the feed panel
//! is off screen; the dashboard reports visibility through
//! [`LiveFeed::on_screen`].

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use crate::app_state::AppState;
use crate::config::{
    FEED_COUNT_CHANGE_CHANCE, FEED_JITTER_INTERVAL_SECS, FEED_JITTER_X, FEED_JITTER_Y,
};
use crate::fixtures::detections::{DetectionBox, CAMERA_SOURCES, FEED_DETECTIONS};
use crate::sim_rng::SimRng;

/// Running object counters shown next to the expanded feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectCounts {
    pub cars: u32,
    pub trucks: u32,
    pub buses: u32,
    pub pedestrians: u32,
}

impl Default for ObjectCounts {
    fn default() -> Self {
        Self {
            cars: 15,
            trucks: 3,
            buses: 1,
            pedestrians: 5,
        }
    }
}

impl ObjectCounts {
    /// Nudge each counter by -1, 0 or +1, never below zero.
    pub fn perturb(&mut self, rng: &mut impl Rng) {
        for count in [
            &mut self.cars,
            &mut self.trucks,
            &mut self.buses,
            &mut self.pedestrians,
        ] {
            let delta: i32 = rng.gen_range(-1..=1);
            *count = count.saturating_add_signed(delta);
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct LiveFeed {
    /// Index into [`CAMERA_SOURCES`].
    pub camera: usize,
    pub playing: bool,
    pub detecting: bool,
    pub boxes: Vec<DetectionBox>,
    pub counts: ObjectCounts,
    /// Set by the dashboard each frame the feed panel is drawn.
    pub on_screen: bool,
    jitter_timer: Timer,
}

impl Default for LiveFeed {
    fn default() -> Self {
        Self {
            camera: 0,
            playing: true,
            detecting: true,
            boxes: FEED_DETECTIONS.to_vec(),
            counts: ObjectCounts::default(),
            on_screen: false,
            jitter_timer: Timer::from_seconds(FEED_JITTER_INTERVAL_SECS, TimerMode::Repeating),
        }
    }
}

impl LiveFeed {
    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Turning detection on restores the fixture boxes; turning it off
    /// clears them.
    pub fn set_detecting(&mut self, on: bool) {
        self.detecting = on;
        if on {
            self.boxes = FEED_DETECTIONS.to_vec();
        } else {
            self.boxes.clear();
        }
        self.jitter_timer.reset();
    }

    pub fn toggle_detecting(&mut self) {
        self.set_detecting(!self.detecting);
    }

    /// Select a camera by index. Out-of-range indices are ignored.
    pub fn select_camera(&mut self, index: usize) {
        if index < CAMERA_SOURCES.len() {
            self.camera = index;
        }
    }

    /// Apply one jitter step to every box and maybe perturb the counts.
    pub fn jitter(&mut self, rng: &mut impl Rng) {
        for b in &mut self.boxes {
            b.x += rng.gen_range(-FEED_JITTER_X..FEED_JITTER_X);
            b.y += rng.gen_range(-FEED_JITTER_Y..FEED_JITTER_Y);
        }
        if rng.gen_bool(FEED_COUNT_CHANGE_CHANCE) {
            self.counts.perturb(rng);
        }
    }
}

impl LiveFeed {
    /// Advance the jitter interval by `delta`. Only a visible feed with
    /// detection on runs; returns the number of jitter steps applied.
    pub fn advance(&mut self, delta: Duration, rng: &mut impl Rng) -> u32 {
        if !(self.detecting && self.on_screen) {
            return 0;
        }
        self.jitter_timer.tick(delta);
        let steps = self.jitter_timer.times_finished_this_tick();
        for _ in 0..steps {
            self.jitter(rng);
        }
        steps
    }
}

/// System: run the jitter on its fixed interval.
pub fn tick_live_feed(time: Res<Time>, mut feed: ResMut<LiveFeed>, mut rng: ResMut<SimRng>) {
    feed.advance(time.delta(), &mut rng.0);
}

/// The feed panel is gone once the dashboard closes.
pub fn hide_live_feed(mut feed: ResMut<LiveFeed>) {
    feed.on_screen = false;
}

pub struct LiveFeedPlugin;

impl Plugin for LiveFeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LiveFeed>()
            .add_systems(
                Update,
                tick_live_feed.run_if(in_state(AppState::Dashboard)),
            )
            .add_systems(OnExit(AppState::Dashboard), hide_live_feed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_feed_shows_fixture_boxes() {
        let feed = LiveFeed::default();
        assert!(feed.playing && feed.detecting);
        assert_eq!(feed.boxes.len(), 5);
        assert_eq!(feed.counts.cars, 15);
    }

    #[test]
    fn test_detect_toggle_clears_and_restores() {
        let mut feed = LiveFeed::default();
        feed.toggle_detecting();
        assert!(feed.boxes.is_empty());
        feed.toggle_detecting();
        assert_eq!(feed.boxes, FEED_DETECTIONS.to_vec());
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut feed = LiveFeed::default();
        feed.jitter(&mut rng);
        for (moved, orig) in feed.boxes.iter().zip(FEED_DETECTIONS) {
            assert!((moved.x - orig.x).abs() <= FEED_JITTER_X);
            assert!((moved.y - orig.y).abs() <= FEED_JITTER_Y);
            assert_eq!(moved.width, orig.width);
            assert_eq!(moved.class, orig.class);
        }
    }

    #[test]
    fn test_counts_never_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut counts = ObjectCounts {
            cars: 0,
            trucks: 0,
            buses: 0,
            pedestrians: 0,
        };
        for _ in 0..200 {
            counts.perturb(&mut rng);
        }
        // Underflow would have wrapped to a huge value.
        assert!(counts.cars < 1000 && counts.buses < 1000);
    }

    #[test]
    fn test_select_camera_ignores_out_of_range() {
        let mut feed = LiveFeed::default();
        feed.select_camera(3);
        assert_eq!(feed.camera, 3);
        feed.select_camera(CAMERA_SOURCES.len());
        assert_eq!(feed.camera, 3);
    }

    #[test]
    fn test_hidden_feed_does_not_jitter() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut feed = LiveFeed::default();
        assert!(!feed.on_screen);
        assert_eq!(feed.advance(Duration::from_secs(3), &mut rng), 0);
        assert_eq!(feed.boxes, FEED_DETECTIONS.to_vec());
    }

    #[test]
    fn test_visible_feed_jitters_once_per_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut feed = LiveFeed {
            on_screen: true,
            ..default()
        };
        assert_eq!(feed.advance(Duration::from_millis(500), &mut rng), 0);
        assert_eq!(feed.advance(Duration::from_millis(600), &mut rng), 1);
        assert_ne!(feed.boxes, FEED_DETECTIONS.to_vec());
    }

    #[test]
    fn test_visible_feed_with_detection_off_stays_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut feed = LiveFeed {
            on_screen: true,
            ..default()
        };
        feed.set_detecting(false);
        assert_eq!(feed.advance(Duration::from_secs(2), &mut rng), 0);
        assert!(feed.boxes.is_empty());
    }

    #[test]
    fn test_same_seed_same_jitter() {
        let mut a = LiveFeed::default();
        let mut b = LiveFeed::default();
        let mut rng_a = ChaCha8Rng::seed_from_u64(5);
        let mut rng_b = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..10 {
            a.jitter(&mut rng_a);
            b.jitter(&mut rng_b);
        }
        assert_eq!(a.boxes, b.boxes);
        assert_eq!(a.counts, b.counts);
    }
}
