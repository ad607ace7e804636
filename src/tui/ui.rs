use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::route::View;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CoachCards, KpiStrip, KpiSummaryView, NotificationPanel, PreferencesView, QuizQuestionView,
    TitleBar, UsageOverviewView, ViewTabs,
};

const HELP_TEXT: &str = " 1-6 Views  Esc Back  q Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: DateTime<Utc>) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, tabs_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.view, app.status_message.clone()).render(frame, title_area);
    ViewTabs::new(app.view, app.data.unread_count()).render(frame, tabs_area);

    match app.view {
        View::Overview => draw_overview(frame, main_area, app, tui),
        View::Coaches => {
            CoachCards::new(&mut tui.coach_cards, &app.data.coaches, now).render(frame, main_area)
        }
        View::Quiz => draw_quiz(frame, main_area, tui),
        View::Usage => {
            UsageOverviewView::new(&app.data.usage, app.bar_width).render(frame, main_area)
        }
        View::Notifications => {
            NotificationPanel::new(&tui.notifications, &app.data.notifications, now)
                .render(frame, main_area)
        }
        View::Profile => {
            PreferencesView::new(&tui.preferences, &app.data.profile).render(frame, main_area)
        }
    }

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_overview(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [summary_area, strip_area, export_area, _] =
        Layout::vertical([Length(4), Length(5), Length(3), Min(0)]).areas(area);

    KpiSummaryView::new(&app.data.summary, &app.currency_symbol).render(frame, summary_area);
    KpiStrip::new(&tui.kpi_strip, &app.data.tiles, &app.currency_symbol).render(frame, strip_area);
    tui.export_bar.render(frame, export_area);
}

fn draw_quiz(frame: &mut Frame, area: Rect, tui: &TuiState) {
    match &tui.quiz {
        Some(quiz) => QuizQuestionView::new(quiz).render(frame, area),
        None => frame.render_widget(
            Paragraph::new("No quiz questions.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray))),
            area,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::data::DashboardData;
    use crate::test_support::{buffer_text, demo_app};
    use chrono::TimeZone;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, now)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn show(view: View) -> (App, TuiState) {
        let mut app = demo_app();
        update(&mut app, Action::Navigate(view));
        let tui = TuiState::new(&app);
        (app, tui)
    }

    #[test]
    fn test_overview_shows_summary_tiles_and_export_bar() {
        let (app, mut tui) = show(View::Overview);
        let text = draw(&app, &mut tui);
        assert!(text.contains("12,450"));
        assert!(text.contains("Coaching sessions"));
        assert!(text.contains("18.4K"));
        assert!(text.contains("Export"));
        assert!(text.contains("1-6 Views"));
    }

    #[test]
    fn test_each_view_renders_its_content() {
        let cases = [
            (View::Coaches, "Amara Okafor"),
            (View::Quiz, "201 Created"),
            (View::Usage, "quiz-generator"),
            (View::Notifications, "Grades published"),
            (View::Profile, "Jordan Reyes"),
        ];
        for (view, needle) in cases {
            let (app, mut tui) = show(view);
            let text = draw(&app, &mut tui);
            assert!(text.contains(needle), "{view:?} missing {needle:?}");
            assert!(text.contains(view.label()));
        }
    }

    #[test]
    fn test_empty_quiz_placeholder() {
        let mut data = DashboardData::demo().unwrap();
        data.quiz.clear();
        let mut app = App::new(data);
        update(&mut app, Action::Navigate(View::Quiz));
        let mut tui = TuiState::new(&app);
        assert!(draw(&app, &mut tui).contains("No quiz questions."));
    }
}
