//! # CoachCards Component
//!
//! One bordered card per coach, stacked in a scroll view.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CoachCardsState` lives in `TuiState` (scroll offset)
//! - `CoachCards` is created each frame with borrowed state and props

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::data::Coach;
use crate::core::format::{format_one_decimal, format_thousands};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows per card: border, name line, stats line, border.
pub const CARD_HEIGHT: u16 = 4;

#[derive(Default)]
pub struct CoachCardsState {
    pub scroll_state: ScrollViewState,
}

impl CoachCardsState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for CoachCardsState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            _ => {}
        }
        None
    }
}

/// `"just now"`, `"45m ago"`, `"5h ago"`, `"3d ago"`.
pub fn relative_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

fn rating_color(rating: f64) -> Color {
    if rating >= 4.5 {
        Color::Green
    } else if rating >= 3.5 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub struct CoachCards<'a> {
    state: &'a mut CoachCardsState,
    coaches: &'a [Coach],
    now: DateTime<Utc>,
}

impl<'a> CoachCards<'a> {
    pub fn new(state: &'a mut CoachCardsState, coaches: &'a [Coach], now: DateTime<Utc>) -> Self {
        Self {
            state,
            coaches,
            now,
        }
    }

    fn card(&self, coach: &Coach) -> Paragraph<'static> {
        let name_line = Line::from(vec![
            Span::styled(
                coach.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", coach.specialty),
                Style::default().fg(Color::Gray),
            ),
        ]);
        let stats_line = Line::from(vec![
            Span::styled(
                format!("{} ★", format_one_decimal(coach.rating)),
                Style::default().fg(rating_color(coach.rating)),
            ),
            Span::raw(format!(
                "   {} sessions   {} learners",
                format_thousands(coach.sessions_completed),
                format_thousands(coach.active_learners)
            )),
            Span::styled(
                format!("   active {}", relative_time(self.now, coach.last_active)),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        Paragraph::new(vec![name_line, stats_line]).block(
            Block::bordered().border_style(Style::default().fg(Color::DarkGray)),
        )
    }
}

impl Component for CoachCards<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.coaches.is_empty() {
            frame.render_widget(
                Paragraph::new("No coaches yet.")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                area,
            );
            return;
        }

        let content_width = area.width.saturating_sub(1);
        // The scroll canvas is u16 tall; cards past its end are not drawn
        let total_height = u16::try_from(self.coaches.len())
            .ok()
            .and_then(|n| n.checked_mul(CARD_HEIGHT))
            .unwrap_or(u16::MAX);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, coach) in self.coaches.iter().enumerate() {
            let y = u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT);
            if y.saturating_add(CARD_HEIGHT) > total_height {
                break;
            }
            let rect = Rect::new(0, y, content_width, CARD_HEIGHT);
            scroll_view.render_widget(self.card(coach), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, demo_app};
    use chrono::TimeZone;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, day, hour, min, 0).unwrap()
    }

    #[test]
    fn test_relative_time() {
        let now = at(17, 12, 0);
        assert_eq!(relative_time(now, at(17, 11, 59)), "1m ago");
        assert_eq!(relative_time(now, at(17, 12, 0)), "just now");
        assert_eq!(relative_time(now, at(17, 9, 0)), "3h ago");
        assert_eq!(relative_time(now, at(14, 12, 0)), "3d ago");
        // Clock skew: future timestamps read as now
        assert_eq!(relative_time(now, at(18, 0, 0)), "just now");
    }

    #[test]
    fn test_cards_render_one_decimal_rating() {
        let app = demo_app();
        let mut state = CoachCardsState::new();
        let mut terminal = Terminal::new(TestBackend::new(90, 14)).unwrap();
        terminal
            .draw(|f| {
                CoachCards::new(&mut state, &app.data.coaches, at(17, 12, 0)).render(f, f.area())
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Amara Okafor"));
        assert!(text.contains("4.8 ★"));
        assert!(text.contains("4.0 ★"));
        assert!(text.contains("312 sessions"));
        assert!(text.contains("active 5d ago"));
    }

    #[test]
    fn test_more_cards_than_canvas_rows() {
        let coach = demo_app().data.coaches[0].clone();
        let coaches = vec![coach; 16_384];
        let mut state = CoachCardsState::new();
        // Narrow, to keep the full-height scroll canvas small
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal
            .draw(|f| CoachCards::new(&mut state, &coaches, at(17, 12, 0)).render(f, f.area()))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("Amara Okafor"));

        for _ in 0..100 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        terminal
            .draw(|f| CoachCards::new(&mut state, &coaches, at(17, 12, 0)).render(f, f.area()))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("Amara Okafor"));
    }

    #[test]
    fn test_empty_list_placeholder() {
        let mut state = CoachCardsState::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|f| CoachCards::new(&mut state, &[], at(17, 12, 0)).render(f, f.area()))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("No coaches yet."));
    }
}
