//! # Dashboard Data
//!
//! Everything the widgets display, as supplied by the backend. This crate
//! never computes these numbers; it loads them from a JSON document and
//! hands them to the views.
//!
//! ```text
//! DashboardData
//! ├── summary: KpiSummary            // headline numbers
//! ├── tiles: Vec<NavTile>            // KPI strip, each with a route
//! ├── coaches: Vec<Coach>            // coaching cards
//! ├── quiz: Vec<QuizQuestion>        // question renderer
//! ├── usage: UsageOverview           // tool request totals
//! ├── notifications: Vec<Notification>
//! └── profile: Profile               // preference form seed
//! ```

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::navigation::NavTile;
use crate::core::preferences::ProfilePreferences;
use crate::core::selection::SelectableOption;

const DEMO_DATA: &str = include_str!("../../data/demo.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_learners: u64,
    pub active_learners: u64,
    pub completion_rate: f64,
    pub average_score: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub rating: f64,
    pub sessions_completed: u64,
    pub active_learners: u64,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<SelectableOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequests {
    pub tool: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageOverview {
    pub total_requests: u64,
    #[serde(default)]
    pub tools: Vec<ToolRequests>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Mention,
    Grade,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub preferences: ProfilePreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: KpiSummary,
    #[serde(default)]
    pub tiles: Vec<NavTile>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    #[serde(default)]
    pub usage: UsageOverview,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    pub profile: Profile,
}

// ============================================================================
// Notification tabs
// ============================================================================

pub const TAB_ALL: &str = "all";
pub const TAB_UNREAD: &str = "unread";
pub const TAB_MENTIONS: &str = "mentions";

/// The fixed tab list of the notification panel.
pub fn notification_tabs() -> Vec<SelectableOption> {
    vec![
        SelectableOption::new(TAB_ALL, "All"),
        SelectableOption::new(TAB_UNREAD, "Unread"),
        SelectableOption::new(TAB_MENTIONS, "Mentions"),
    ]
}

/// Notifications visible under a tab. An unrecognized tab shows everything.
pub fn filter_notifications<'a>(
    notifications: &'a [Notification],
    tab: &str,
) -> Vec<&'a Notification> {
    notifications
        .iter()
        .filter(|n| match tab {
            TAB_UNREAD => !n.read,
            TAB_MENTIONS => n.kind == NotificationKind::Mention,
            _ => true,
        })
        .collect()
}

// ============================================================================
// Loading
// ============================================================================

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "data I/O error: {e}"),
            DataError::Parse(e) => write!(f, "data parse error: {e}"),
        }
    }
}

impl std::error::Error for DataError {}

impl DashboardData {
    /// The bundled demo dataset.
    pub fn demo() -> Result<Self, DataError> {
        serde_json::from_str(DEMO_DATA).map_err(DataError::Parse)
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        serde_json::from_str(json).map_err(DataError::Parse)
    }

    /// Loads from `path`, or the demo dataset when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, DataError> {
        let Some(path) = path else {
            info!("No data file configured, using bundled demo data");
            return Self::demo();
        };
        let contents = fs::read_to_string(path).map_err(DataError::Io)?;
        let data = Self::from_json(&contents)?;
        info!("Loaded dashboard data from {}", path.display());
        Ok(data)
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_demo_data_parses() {
        let data = DashboardData::demo().unwrap();
        assert!(!data.tiles.is_empty());
        assert!(!data.coaches.is_empty());
        assert!(data.quiz.iter().all(|q| !q.options.is_empty()));
        assert_eq!(data.usage.total_requests, 12450);
    }

    #[test]
    fn test_filter_notifications() {
        let data = DashboardData::demo().unwrap();
        let all = filter_notifications(&data.notifications, TAB_ALL);
        let unread = filter_notifications(&data.notifications, TAB_UNREAD);
        let mentions = filter_notifications(&data.notifications, TAB_MENTIONS);

        assert_eq!(all.len(), data.notifications.len());
        assert_eq!(unread.len(), data.unread_count());
        assert!(unread.iter().all(|n| !n.read));
        assert!(mentions.iter().all(|n| n.kind == NotificationKind::Mention));
        assert_eq!(filter_notifications(&data.notifications, "bogus").len(), all.len());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../data/demo.json").as_bytes())
            .unwrap();
        let data = DashboardData::load(Some(file.path())).unwrap();
        assert_eq!(data, DashboardData::demo().unwrap());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = DashboardData::load(Some(&dir.path().join("missing.json")));
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = DashboardData::from_json("{ not json");
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn test_sparse_document_defaults_lists() {
        let json = r#"{
            "summary": {"total_learners": 1, "active_learners": 1, "completion_rate": 0.0, "average_score": 0.0, "revenue": 0.0},
            "profile": {"display_name": "A", "email": "a@example.com"}
        }"#;
        let data = DashboardData::from_json(json).unwrap();
        assert!(data.coaches.is_empty());
        assert!(data.usage.tools.is_empty());
        assert_eq!(data.profile.preferences, ProfilePreferences::default());
    }
}
