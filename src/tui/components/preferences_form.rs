//! # PreferencesForm Component
//!
//! Profile card plus the editable preferences. Edits are staged in
//! [`PreferencesForm`]; nothing leaves the widget until `s` saves.
//!
//! ## Keys
//!
//! - ↑/↓: move between fields
//! - ←/→: cycle the language (language field only)
//! - Enter/Space: toggle the focused checkbox
//! - `s`: save and emit `PreferencesEvent::Saved`
//! - `r`: drop staged edits

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::data::Profile;
use crate::core::preferences::{PreferencesForm, ProfilePreferences, language_label};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesEvent {
    Saved(ProfilePreferences),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferenceField {
    #[default]
    Language,
    EmailNotifications,
    WeeklyDigest,
}

impl PreferenceField {
    const ORDER: [PreferenceField; 3] = [
        PreferenceField::Language,
        PreferenceField::EmailNotifications,
        PreferenceField::WeeklyDigest,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn up(self) -> Self {
        Self::ORDER[self.position().saturating_sub(1)]
    }

    fn down(self) -> Self {
        Self::ORDER[(self.position() + 1).min(Self::ORDER.len() - 1)]
    }
}

pub struct PreferencesFormState {
    pub form: PreferencesForm,
    pub field: PreferenceField,
}

impl PreferencesFormState {
    pub fn new(saved: ProfilePreferences) -> Self {
        Self {
            form: PreferencesForm::new(saved),
            field: PreferenceField::default(),
        }
    }

    fn cycle_language(&mut self, forward: bool) {
        let choice = self.form.language();
        let len = choice.len();
        if len == 0 {
            return;
        }
        let current = choice.selected_index().unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        if let Some(id) = choice.options().get(next).map(|o| o.id.clone()) {
            self.form.select_language(&id);
        }
    }
}

impl EventHandler for PreferencesFormState {
    type Event = PreferencesEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PreferencesEvent> {
        match event {
            TuiEvent::CursorUp => self.field = self.field.up(),
            TuiEvent::CursorDown => self.field = self.field.down(),
            TuiEvent::CursorLeft | TuiEvent::CursorRight
                if self.field == PreferenceField::Language =>
            {
                self.cycle_language(*event == TuiEvent::CursorRight);
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => match self.field {
                PreferenceField::EmailNotifications => self.form.toggle_email_notifications(),
                PreferenceField::WeeklyDigest => self.form.toggle_weekly_digest(),
                PreferenceField::Language => {}
            },
            TuiEvent::InputChar('s') => {
                return Some(PreferencesEvent::Saved(self.form.save()));
            }
            TuiEvent::InputChar('r') => self.form.revert(),
            _ => {}
        }
        None
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub struct PreferencesView<'a> {
    state: &'a PreferencesFormState,
    profile: &'a Profile,
}

impl<'a> PreferencesView<'a> {
    pub fn new(state: &'a PreferencesFormState, profile: &'a Profile) -> Self {
        Self { state, profile }
    }

    fn field_line(&self, field: PreferenceField, label: &str, value: String) -> Line<'static> {
        let focused = self.state.field == field;
        let marker = if focused { "› " } else { "  " };
        let value_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{label:<22}"), Style::default().fg(Color::Gray)),
            Span::styled(value, value_style),
        ])
    }
}

impl Component for PreferencesView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [profile_area, form_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let profile = Paragraph::new(vec![
            Line::from(Span::styled(
                self.profile.display_name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile.email.clone(),
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(
            Block::bordered()
                .title(" Profile ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(profile, profile_area);

        let staged = self.state.form.staged();
        let language = language_label(&staged.language).unwrap_or("?");
        let mut lines = vec![
            self.field_line(
                PreferenceField::Language,
                "Language",
                format!("< {language} >"),
            ),
            self.field_line(
                PreferenceField::EmailNotifications,
                "Email notifications",
                checkbox(staged.email_notifications).to_string(),
            ),
            self.field_line(
                PreferenceField::WeeklyDigest,
                "Weekly digest",
                checkbox(staged.weekly_digest).to_string(),
            ),
        ];
        if self.state.form.is_dirty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "(unsaved changes)",
                Style::default().fg(Color::Yellow),
            )));
        }

        let block = Block::bordered()
            .title(" Preferences ")
            .title_bottom(
                Line::from(" ↑↓ Field  ←→ Language  Space Toggle  s Save  r Revert ").centered(),
            )
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(lines).block(block), form_area);
    }
}
