//! # Application State
//!
//! What the consuming application keeps from the messages its widgets emit.
//! Widget-local state (cursors, staged fields) lives in the `tui` module;
//! this is the record the widgets report into.
//!
//! ```text
//! App
//! ├── data: DashboardData           // supplied by the data collaborator
//! ├── view: View                    // current screen
//! ├── history: Vec<View>            // back stack
//! ├── status_message: String        // status bar text
//! ├── quiz_answers: HashMap         // question id → chosen option id
//! ├── exports: Vec<ExportConfiguration>  // confirmed export requests
//! ├── notification_tab: String      // selected notification tab id
//! ├── preferences: ProfilePreferences    // last saved profile settings
//! ├── currency_symbol: String       // display setting
//! └── bar_width: u16                // display setting
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashMap;

use crate::core::config::{DEFAULT_BAR_WIDTH, ResolvedConfig};
use crate::core::data::{DashboardData, TAB_ALL};
use crate::core::export::ExportConfiguration;
use crate::core::format::DEFAULT_CURRENCY_SYMBOL;
use crate::core::preferences::ProfilePreferences;
use crate::core::route::View;

pub struct App {
    pub data: DashboardData,
    pub view: View,
    pub history: Vec<View>,
    pub status_message: String,
    pub quiz_answers: HashMap<String, String>,
    pub exports: Vec<ExportConfiguration>,
    pub notification_tab: String,
    pub preferences: ProfilePreferences,
    pub currency_symbol: String,
    pub bar_width: u16,
}

impl App {
    pub fn new(data: DashboardData) -> Self {
        let preferences = data.profile.preferences.clone();
        Self {
            data,
            view: View::default(),
            history: Vec::new(),
            status_message: String::from("Welcome back!"),
            quiz_answers: HashMap::new(),
            exports: Vec::new(),
            notification_tab: TAB_ALL.to_string(),
            preferences,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn from_config(data: DashboardData, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(data);
        app.view = config.start_view;
        app.currency_symbol = config.currency_symbol.clone();
        app.bar_width = config.bar_width;
        app
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.quiz_answers.get(question_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::demo_app;

    #[test]
    fn test_app_new_defaults() {
        let app = demo_app();
        assert_eq!(app.view, View::Overview);
        assert!(app.history.is_empty());
        assert!(app.exports.is_empty());
        assert_eq!(app.notification_tab, TAB_ALL);
        assert_eq!(app.preferences, app.data.profile.preferences);
    }

    #[test]
    fn test_from_config_applies_display_settings() {
        let config = ResolvedConfig {
            data_file: None,
            start_view: View::Quiz,
            tick_rate_ms: 100,
            currency_symbol: "€".to_string(),
            bar_width: 12,
        };
        let app = App::from_config(demo_app().data, &config);
        assert_eq!(app.view, View::Quiz);
        assert_eq!(app.currency_symbol, "€");
        assert_eq!(app.bar_width, 12);
    }
}
