//! # Actions
//!
//! Everything a widget reports becomes an `Action`.
//! User picks a quiz option? That's `Action::AnswerSelected`.
//! User confirms the export bar? That's `Action::ExportRequested(config)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` for the adapter to carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Actions are applied one at a time, in the order they were dispatched.

use log::{debug, info, warn};

use crate::core::export::ExportConfiguration;
use crate::core::navigation::NavigationTarget;
use crate::core::preferences::{ProfilePreferences, language_label};
use crate::core::route::View;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The router resolved a target to a view.
    Navigate(View),
    /// The router could not resolve a target.
    NavigationFailed {
        target: NavigationTarget,
        reason: String,
    },
    /// Return to the previous view.
    Back,
    AnswerSelected {
        question_id: String,
        option_id: String,
    },
    TabSelected(String),
    ExportRequested(ExportConfiguration),
    PreferencesSaved(ProfilePreferences),
    Quit,
}

/// Side effects the adapter must perform after `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(view) => {
            if view != app.view {
                app.history.push(app.view);
                app.view = view;
            }
            app.status_message = String::new();
            Effect::None
        }
        Action::NavigationFailed { target, reason } => {
            warn!("Navigation to {} failed: {}", target, reason);
            app.status_message = format!("Can't open {target}: {reason}");
            Effect::None
        }
        Action::Back => {
            if let Some(previous) = app.history.pop() {
                app.view = previous;
                app.status_message = String::new();
            }
            Effect::None
        }
        Action::AnswerSelected {
            question_id,
            option_id,
        } => {
            app.status_message = format!("Answer recorded: {option_id}");
            app.quiz_answers.insert(question_id, option_id);
            Effect::None
        }
        Action::TabSelected(tab) => {
            app.notification_tab = tab;
            Effect::None
        }
        Action::ExportRequested(config) => {
            info!("Export requested: {}", config);
            app.status_message = format!("Export requested: {config}");
            app.exports.push(config);
            Effect::None
        }
        Action::PreferencesSaved(preferences) => {
            info!("Preferences saved: {:?}", preferences);
            let language = language_label(&preferences.language).unwrap_or("?");
            app.status_message = format!("Preferences saved ({language})");
            app.preferences = preferences;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
