//! # QuizQuestion Component
//!
//! Renders one multiple-choice question on top of [`SingleChoice`].
//!
//! ## State
//!
//! - `choice`: the option list and the selected id (core contract)
//! - `cursor`: which option the keyboard highlight is on
//!
//! The cursor is not the selection. ↑/↓ only move the highlight; Enter or
//! Space selects the highlighted option and emits `QuizEvent::Selected`,
//! every time, even when it is already the selected one.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::data::QuizQuestion;
use crate::core::selection::{SelectableOption, Selected, SingleChoice};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Selected {
        question_id: String,
        option_id: String,
    },
}

pub struct QuizQuestionState {
    pub question_id: String,
    pub prompt: String,
    pub choice: SingleChoice,
    pub cursor: usize,
    /// Position label, e.g. "1/2"
    pub progress: String,
}

impl QuizQuestionState {
    /// Seeds the selector with a previously recorded answer, if any.
    pub fn new(question: &QuizQuestion, answer: Option<&str>) -> Self {
        let choice = SingleChoice::with_selected(question.options.clone(), answer);
        let cursor = choice.selected_index().unwrap_or(0);
        Self {
            question_id: question.id.clone(),
            prompt: question.prompt.clone(),
            choice,
            cursor,
            progress: String::new(),
        }
    }

    pub fn with_progress(mut self, index: usize, total: usize) -> Self {
        self.progress = format!("{}/{}", index + 1, total);
        self
    }

    /// Replaces the option list; the cursor is clamped and a selection that
    /// no longer exists is dropped.
    pub fn set_options(&mut self, options: Vec<SelectableOption>) {
        self.choice.set_options(options);
        self.cursor = self.cursor.min(self.choice.len().saturating_sub(1));
    }

    /// Selects an option by id, as a click would.
    pub fn select(&mut self, option_id: &str) -> Option<QuizEvent> {
        let Selected(id) = self.choice.select(option_id)?;
        if let Some(index) = self.choice.position(&id) {
            self.cursor = index;
        }
        Some(QuizEvent::Selected {
            question_id: self.question_id.clone(),
            option_id: id,
        })
    }
}

impl EventHandler for QuizQuestionState {
    type Event = QuizEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<QuizEvent> {
        if self.choice.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.cursor = (self.cursor + 1).min(self.choice.len() - 1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                let id = self.choice.options().get(self.cursor)?.id.clone();
                self.select(&id)
            }
            _ => None,
        }
    }
}

/// Style for one option row.
fn option_style(selected: bool, highlighted: bool) -> Style {
    let style = if selected {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    if highlighted {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub struct QuizQuestionView<'a> {
    state: &'a QuizQuestionState,
}

impl<'a> QuizQuestionView<'a> {
    pub fn new(state: &'a QuizQuestionState) -> Self {
        Self { state }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                self.state.prompt.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        if self.state.choice.is_empty() {
            lines.push(Line::from(Span::styled(
                "This question has no options.",
                Style::default().fg(Color::DarkGray),
            )));
            return lines;
        }

        for (i, option) in self.state.choice.options().iter().enumerate() {
            let selected = self.state.choice.is_selected(&option.id);
            let marker = if selected { "(•)" } else { "( )" };
            lines.push(Line::from(Span::styled(
                format!("{marker} {}", option.label),
                option_style(selected, i == self.state.cursor),
            )));
        }

        // Helper text of the highlighted option, wrapped under the list
        let helper = self
            .state
            .choice
            .options()
            .get(self.state.cursor)
            .and_then(|o| o.helper_text.as_deref());
        if let Some(helper) = helper {
            lines.push(Line::default());
            let wrap_width = usize::from(width.saturating_sub(2)).max(1);
            for row in textwrap::wrap(helper, wrap_width) {
                lines.push(Line::from(Span::styled(
                    row.into_owned(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
        lines
    }
}

impl Component for QuizQuestionView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.state.progress.is_empty() {
            " Question ".to_string()
        } else {
            format!(" Question {} ", self.state.progress)
        };
        let block = Block::bordered()
            .title(title)
            .title_bottom(Line::from(" ↑↓ Move  Enter Select  [ ] Prev/Next ").centered())
            .border_style(Style::default().fg(Color::DarkGray));

        let inner_width = area.width.saturating_sub(2);
        let paragraph = Paragraph::new(self.lines(inner_width))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MessageLog, buffer_text, demo_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn question() -> QuizQuestion {
        demo_app().data.quiz[0].clone()
    }

    fn render(state: &QuizQuestionState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 14)).unwrap();
        terminal
            .draw(|f| QuizQuestionView::new(state).render(f, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_enter_selects_highlighted_option() {
        let mut state = QuizQuestionState::new(&question(), None);
        state.handle_event(&TuiEvent::CursorDown);
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(
            event,
            Some(QuizEvent::Selected {
                question_id: "q1".to_string(),
                option_id: "b".to_string(),
            })
        );
        assert_eq!(state.choice.selected(), Some("b"));
    }

    #[test]
    fn test_cursor_movement_does_not_emit() {
        let mut state = QuizQuestionState::new(&question(), None);
        let mut log = MessageLog::default();
        for event in [TuiEvent::CursorDown, TuiEvent::CursorDown, TuiEvent::CursorUp] {
            log.record(state.handle_event(&event));
        }
        assert!(log.messages.is_empty());
        assert_eq!(state.choice.selected(), None);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_each_selection_emits_once() {
        let mut state = QuizQuestionState::new(&question(), None);
        let mut log = MessageLog::default();
        log.record(state.handle_event(&TuiEvent::Submit));
        log.record(state.handle_event(&TuiEvent::InputChar(' ')));
        assert_eq!(log.messages.len(), 2);
        assert_eq!(log.messages[0], log.messages[1]);
    }

    #[test]
    fn test_recorded_answer_seeds_selection_and_cursor() {
        let state = QuizQuestionState::new(&question(), Some("c"));
        assert_eq!(state.choice.selected(), Some("c"));
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_render_marks_exactly_the_selected_option() {
        let mut state = QuizQuestionState::new(&question(), None);
        state.select("c");
        let text = render(&state);

        assert_eq!(text.matches("(•)").count(), 1);
        assert!(text.contains("(•) 204 No Content"));
        assert!(text.contains("( ) 200 OK"));
        assert!(text.contains("( ) 201 Created"));
    }

    #[test]
    fn test_helper_text_follows_cursor() {
        let mut state = QuizQuestionState::new(&question(), None);
        assert!(!render(&state).contains("successful POST"));
        state.handle_event(&TuiEvent::CursorDown);
        assert!(render(&state).contains("successful POST"));
    }

    #[test]
    fn test_options_change_drops_dangling_selection() {
        let mut state = QuizQuestionState::new(&question(), Some("d"));
        state.set_options(vec![
            SelectableOption::new("a", "200 OK"),
            SelectableOption::new("b", "201 Created"),
        ]);
        assert_eq!(state.choice.selected(), None);
        assert_eq!(state.cursor, 1);
        assert_eq!(render(&state).matches("(•)").count(), 0);
    }

    #[test]
    fn test_unknown_option_id_is_ignored() {
        let mut state = QuizQuestionState::new(&question(), None);
        assert_eq!(state.select("z"), None);
    }
}
