//! # Single-choice Selection
//!
//! The shared contract behind the quiz option picker, the notification tabs
//! and the view switcher: a closed, ordered list of options and at most one
//! selected id.
//!
//! ```text
//! select(id) ──► id in options? ──yes──► selected = id, emit Selected(id)
//!                      │
//!                      no ──► unchanged, nothing emitted
//! ```
//!
//! Every accepted `select` emits, including re-selecting the option that is
//! already selected. The caller decides what a repeated selection means.

use serde::{Deserialize, Serialize};

/// One entry in a closed list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableOption {
    pub id: String,
    pub label: String,
    #[serde(default, rename = "helperText", alias = "helper_text")]
    pub helper_text: Option<String>,
}

impl SelectableOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            helper_text: None,
        }
    }

    pub fn with_helper(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }
}

/// Message emitted when the user picks an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected(pub String);

/// Option list plus the current selection.
///
/// The selection always names an id present in `options`, or is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleChoice {
    options: Vec<SelectableOption>,
    selected: Option<String>,
}

impl SingleChoice {
    pub fn new(options: Vec<SelectableOption>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// Builds a selector with an initial selection supplied by the caller.
    /// An initial id that is not in `options` is dropped.
    pub fn with_selected(options: Vec<SelectableOption>, selected: Option<&str>) -> Self {
        let mut choice = Self::new(options);
        choice.selected = selected
            .filter(|id| choice.contains(id))
            .map(str::to_string);
        choice
    }

    pub fn options(&self) -> &[SelectableOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_option(&self) -> Option<&SelectableOption> {
        let id = self.selected.as_deref()?;
        self.options.iter().find(|o| o.id == id)
    }

    /// Position of the selected option in the list.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected.as_deref()?;
        self.position(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Selects `id` and returns the message to deliver.
    ///
    /// Returns `None` for an id outside the option list; the selection is
    /// left untouched in that case.
    pub fn select(&mut self, id: &str) -> Option<Selected> {
        if !self.contains(id) {
            return None;
        }
        self.selected = Some(id.to_string());
        Some(Selected(id.to_string()))
    }

    /// Selects the option at `index`.
    pub fn select_index(&mut self, index: usize) -> Option<Selected> {
        let id = self.options.get(index)?.id.clone();
        self.select(&id)
    }

    /// Replaces the option list. A selection whose id no longer exists is
    /// cleared.
    pub fn set_options(&mut self, options: Vec<SelectableOption>) {
        self.options = options;
        if let Some(id) = self.selected.as_deref()
            && !self.contains(id)
        {
            self.selected = None;
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
