//! # Profile Preferences
//!
//! The profile form is a confirm-buffered widget like the export toolbar:
//! edits are staged and leave the form only on `save()`. The language field
//! is a single-choice selector over a static label list.

use serde::{Deserialize, Serialize};

use crate::core::selection::{SelectableOption, SingleChoice};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Display languages offered by the form. Labels only; nothing is translated.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("pt", "Português"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePreferences {
    pub language: String,
    pub email_notifications: bool,
    pub weekly_digest: bool,
}

impl Default for ProfilePreferences {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            email_notifications: true,
            weekly_digest: false,
        }
    }
}

pub fn language_options() -> Vec<SelectableOption> {
    LANGUAGES
        .iter()
        .map(|(id, label)| SelectableOption::new(*id, *label))
        .collect()
}

/// Label for a language id, if it is one of [`LANGUAGES`].
pub fn language_label(id: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, label)| *label)
}

/// Staged edits over the last saved preferences.
#[derive(Debug, Clone)]
pub struct PreferencesForm {
    saved: ProfilePreferences,
    staged: ProfilePreferences,
    language: SingleChoice,
}

impl PreferencesForm {
    /// A saved language outside [`LANGUAGES`] is replaced by
    /// [`DEFAULT_LANGUAGE`].
    pub fn new(saved: ProfilePreferences) -> Self {
        let mut saved = saved;
        if language_label(&saved.language).is_none() {
            saved.language = DEFAULT_LANGUAGE.to_string();
        }
        let language = SingleChoice::with_selected(language_options(), Some(&saved.language));
        Self {
            staged: saved.clone(),
            saved,
            language,
        }
    }

    pub fn saved(&self) -> &ProfilePreferences {
        &self.saved
    }

    pub fn staged(&self) -> &ProfilePreferences {
        &self.staged
    }

    pub fn language(&self) -> &SingleChoice {
        &self.language
    }

    pub fn is_dirty(&self) -> bool {
        self.saved != self.staged
    }

    /// Stages a language. Returns false for an id outside the list.
    pub fn select_language(&mut self, id: &str) -> bool {
        match self.language.select(id) {
            Some(_) => {
                self.staged.language = id.to_string();
                true
            }
            None => false,
        }
    }

    pub fn toggle_email_notifications(&mut self) {
        self.staged.email_notifications = !self.staged.email_notifications;
    }

    pub fn toggle_weekly_digest(&mut self) {
        self.staged.weekly_digest = !self.staged.weekly_digest;
    }

    /// Commits the staged values and returns them for delivery.
    pub fn save(&mut self) -> ProfilePreferences {
        self.saved = self.staged.clone();
        self.saved.clone()
    }

    /// Drops staged edits.
    pub fn revert(&mut self) {
        self.staged = self.saved.clone();
        self.language.select(&self.saved.language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = ProfilePreferences::default();
        assert_eq!(prefs.language, "en");
        assert!(prefs.email_notifications);
        assert!(!prefs.weekly_digest);
    }

    #[test]
    fn test_edits_are_staged_until_save() {
        let mut form = PreferencesForm::new(ProfilePreferences::default());
        assert!(form.select_language("fr"));
        form.toggle_weekly_digest();

        assert!(form.is_dirty());
        assert_eq!(form.saved().language, "en");
        assert_eq!(form.staged().language, "fr");

        let saved = form.save();
        assert_eq!(saved.language, "fr");
        assert!(saved.weekly_digest);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_revert_restores_saved() {
        let mut form = PreferencesForm::new(ProfilePreferences::default());
        form.select_language("de");
        form.toggle_email_notifications();
        form.revert();

        assert!(!form.is_dirty());
        assert_eq!(form.language().selected(), Some("en"));
        assert!(form.staged().email_notifications);
    }

    #[test]
    fn test_unknown_language_rejected() {
        let mut form = PreferencesForm::new(ProfilePreferences::default());
        assert!(!form.select_language("xx"));
        assert_eq!(form.staged().language, "en");
    }

    #[test]
    fn test_unknown_saved_language_falls_back() {
        let form = PreferencesForm::new(ProfilePreferences {
            language: "tlh".to_string(),
            ..Default::default()
        });
        assert_eq!(form.saved().language, DEFAULT_LANGUAGE);
        assert_eq!(form.language().selected(), Some(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_language_label() {
        assert_eq!(language_label("es"), Some("Español"));
        assert_eq!(language_label("xx"), None);
    }
}
