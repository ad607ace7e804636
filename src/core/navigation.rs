//! # Navigation Tiles
//!
//! A tile pairs a display metric with a destination. Activating it hands the
//! destination to whatever implements [`Navigator`]; whether that path
//! resolves is the navigator's business.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::format::DisplayMetric;

/// Opaque destination path, e.g. `/admin/coaches`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationTarget(String);

impl NavigationTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// The view-transition collaborator.
pub trait Navigator {
    fn navigate(&mut self, target: &NavigationTarget);
}

/// A KPI tile that routes on activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavTile {
    pub label: String,
    pub metric: DisplayMetric,
    pub target: NavigationTarget,
}

impl NavTile {
    pub fn new(
        label: impl Into<String>,
        metric: DisplayMetric,
        target: impl Into<NavigationTarget>,
    ) -> Self {
        Self {
            label: label.into(),
            metric,
            target: target.into(),
        }
    }

    /// Requests navigation to this tile's target. Holds no state, so every
    /// call forwards one request.
    pub fn activate<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(&self.target);
    }
}
