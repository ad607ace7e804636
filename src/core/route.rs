//! # Routing
//!
//! The navigation collaborator. Tiles hand it an opaque path; it resolves the
//! path to a [`View`] and queues the resulting [`Action`]. Unknown paths are
//! reported as `Action::NavigationFailed`, never back to the tile.

use std::fmt;

use crate::core::action::Action;
use crate::core::navigation::{NavigationTarget, Navigator};

/// Top-level screens of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Overview,
    Coaches,
    Quiz,
    Usage,
    Notifications,
    Profile,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Overview,
        View::Coaches,
        View::Quiz,
        View::Usage,
        View::Notifications,
        View::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            View::Overview => "/admin",
            View::Coaches => "/admin/coaches",
            View::Quiz => "/admin/quiz",
            View::Usage => "/admin/usage",
            View::Notifications => "/notifications",
            View::Profile => "/profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Coaches => "Coaches",
            View::Quiz => "Quiz",
            View::Usage => "Usage",
            View::Notifications => "Notifications",
            View::Profile => "Profile",
        }
    }

    /// Resolves a path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Result<View, RouteError> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        View::ALL
            .into_iter()
            .find(|view| view.path() == normalized)
            .ok_or_else(|| RouteError::UnknownPath(path.to_string()))
    }

    pub fn index(self) -> usize {
        View::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownPath(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownPath(path) => write!(f, "no view at '{path}'"),
        }
    }
}

impl std::error::Error for RouteError {}

/// Resolves navigation requests into actions for the update loop.
#[derive(Debug, Default)]
pub struct Router {
    outbox: Vec<Action>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the actions queued since the last drain, in request order.
    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.outbox)
    }
}

impl Navigator for Router {
    fn navigate(&mut self, target: &NavigationTarget) {
        let action = match View::from_path(target.as_str()) {
            Ok(view) => Action::Navigate(view),
            Err(e) => Action::NavigationFailed {
                target: target.clone(),
                reason: e.to_string(),
            },
        };
        self.outbox.push(action);
    }
}
