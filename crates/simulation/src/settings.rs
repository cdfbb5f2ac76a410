//! Runtime settings for the showcase.
//!
//! Settings come from an optional JSON file named by `SMART_TRAFFIC_CONFIG`;
//! `SMART_TRAFFIC_ROUTE` overrides the start page. Every field is optional in
//! the file and falls back to the compile-time defaults in [`crate::config`].

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::config::{
    DEFAULT_PHASE_LENGTH, DEFAULT_TICK_HZ, MAX_PHASE_LENGTH, MAX_TICK_HZ, READY_WINDOW,
};

pub const CONFIG_PATH_ENV: &str = "SMART_TRAFFIC_CONFIG";
pub const ROUTE_ENV: &str = "SMART_TRAFFIC_ROUTE";

/// Showcase configuration, inserted as a resource before the plugins build.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    /// Route of the page shown at launch, e.g. `"/dashboard"`.
    pub start_route: String,
    /// Ticks per signal phase.
    pub phase_length: u32,
    /// Scene loop rate in Hz.
    pub tick_hz: f64,
    pub window_width: f32,
    pub window_height: f32,
    /// Seed for live-feed jitter.
    pub rng_seed: u64,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            start_route: "/".to_string(),
            phase_length: DEFAULT_PHASE_LENGTH,
            tick_hz: DEFAULT_TICK_HZ,
            window_width: 1280.0,
            window_height: 800.0,
            rng_seed: 42,
        }
    }
}

impl ShowcaseSettings {
    /// Parse settings from JSON text and validate them.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: ShowcaseSettings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build settings from the process environment.
    ///
    /// A missing config variable yields defaults. A config file that cannot be
    /// read or parsed is logged and replaced by defaults.
    pub fn from_env() -> Self {
        let mut settings = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                let path = Path::new(&path);
                match Self::from_file(path) {
                    Ok(s) => {
                        info!("Loaded settings from {}", path.display());
                        s
                    }
                    Err(e) => {
                        warn!(
                            "Ignoring settings file {}: {}, using defaults",
                            path.display(),
                            e
                        );
                        Self::default()
                    }
                }
            }
            None => Self::default(),
        };
        if let Ok(route) = std::env::var(ROUTE_ENV) {
            settings.start_route = route;
        }
        settings
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.phase_length <= READY_WINDOW {
            return Err(SettingsError::Invalid(format!(
                "phase_length must exceed the {READY_WINDOW}-tick ready window, got {}",
                self.phase_length
            )));
        }
        if self.phase_length > MAX_PHASE_LENGTH {
            return Err(SettingsError::Invalid(format!(
                "phase_length must be at most {MAX_PHASE_LENGTH}, got {}",
                self.phase_length
            )));
        }
        if !(self.tick_hz.is_finite() && self.tick_hz > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "tick_hz must be positive, got {}",
                self.tick_hz
            )));
        }
        if self.tick_hz > MAX_TICK_HZ {
            return Err(SettingsError::Invalid(format!(
                "tick_hz must be at most {MAX_TICK_HZ}, got {}",
                self.tick_hz
            )));
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// The page to open at launch.
    pub fn start_state(&self) -> AppState {
        AppState::from_route_or_landing(&self.start_route)
    }
}

/// Errors that can occur while loading [`ShowcaseSettings`].
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io(std::io::Error),
    /// The file is not valid settings JSON.
    Parse(serde_json::Error),
    /// The file parsed but a value is out of range.
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {e}"),
            SettingsError::Parse(e) => write!(f, "Parse error: {e}"),
            SettingsError::Invalid(msg) => write!(f, "Invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ShowcaseSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.start_state(), AppState::Landing);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            ShowcaseSettings::from_json(r#"{ "start_route": "/dashboard", "phase_length": 50 }"#)
                .unwrap();
        assert_eq!(settings.start_state(), AppState::Dashboard);
        assert_eq!(settings.phase_length, 50);
        assert_eq!(settings.tick_hz, DEFAULT_TICK_HZ);
        assert_eq!(settings.rng_seed, 42);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ShowcaseSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_short_phase_rejected() {
        let err = ShowcaseSettings::from_json(r#"{ "phase_length": 20 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(err.to_string().contains("phase_length"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = ShowcaseSettings::from_json(r#"{ "tick_hz": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_phase_too_long_for_cycle_rejected() {
        let err = ShowcaseSettings::from_json(r#"{ "phase_length": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(err.to_string().contains("phase_length"));

        let longest = ShowcaseSettings {
            phase_length: MAX_PHASE_LENGTH,
            ..Default::default()
        };
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn test_excessive_tick_rate_rejected() {
        let err = ShowcaseSettings::from_json(r#"{ "tick_hz": 1e12 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(err.to_string().contains("tick_hz"));

        let fastest = ShowcaseSettings {
            tick_hz: MAX_TICK_HZ,
            ..Default::default()
        };
        assert!(fastest.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err =
            ShowcaseSettings::from_file(Path::new("/nonexistent/smart-traffic.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
