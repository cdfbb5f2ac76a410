//! Top-level page state and the digital-twin view state.
//!
//! [`AppState`] plays the role of the page router: each variant is one page
//! with a stable route string. [`TwinView`] is a sub-state of the dashboard
//! page; the 3D scene exists only while it is [`TwinView::Live`], so leaving
//! the dashboard tears the scene down without any extra bookkeeping.
//!
//! Both live in the `simulation` crate so `rendering` and `ui` can gate
//! systems on them without circular dependencies.

use bevy::prelude::*;

/// Which page is on screen.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Marketing landing page.
    #[default]
    Landing,
    /// Analytics dashboard with the digital twin.
    Dashboard,
    /// Mock object-detection tool.
    Detection,
}

impl AppState {
    pub const ALL: [AppState; 3] = [AppState::Landing, AppState::Dashboard, AppState::Detection];

    /// Route string for this page.
    pub fn route(self) -> &'static str {
        match self {
            AppState::Landing => "/",
            AppState::Dashboard => "/dashboard",
            AppState::Detection => "/detection",
        }
    }

    /// Label used in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            AppState::Landing => "Home",
            AppState::Dashboard => "Dashboard",
            AppState::Detection => "Detection",
        }
    }

    /// Parse a route string. A trailing slash and surrounding whitespace are
    /// ignored; unknown routes return `None`.
    pub fn from_route(route: &str) -> Option<Self> {
        let trimmed = route.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL.into_iter().find(|s| s.route() == normalized)
    }

    /// Like [`AppState::from_route`] but falls back to the landing page,
    /// logging the unknown route.
    pub fn from_route_or_landing(route: &str) -> Self {
        Self::from_route(route).unwrap_or_else(|| {
            warn!("Unknown route '{}', showing the landing page", route);
            AppState::Landing
        })
    }
}

/// Whether the dashboard's 3D digital twin is mounted.
///
/// Exists only while [`AppState::Dashboard`] is active.
#[derive(SubStates, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[source(AppState = AppState::Dashboard)]
pub enum TwinView {
    #[default]
    Hidden,
    Live,
}
