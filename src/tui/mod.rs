//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! TuiEvent → global keys (quit, back, 1-6)
//!          → component of the current view → component event
//!          → Action (directly, or via the Router for navigation)
//!          → update()
//! ```
//!
//! `handle_event` is the whole dispatcher and does no terminal I/O, so the
//! interaction rules can be tested without a terminal.
//!
//! ## Redraw Strategy
//!
//! The loop sleeps up to `tick_rate_ms` waiting for input and only redraws
//! after an event, or once a minute so relative timestamps stay current.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::data::DashboardData;
use crate::core::navigation::{NavigationTarget, Navigator};
use crate::core::route::{Router, View};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CoachCardsState, ExportBar, ExportBarEvent, KpiStripEvent, KpiStripState,
    NotificationTabsEvent, NotificationTabsState, PreferencesEvent, PreferencesFormState,
    QuizEvent, QuizQuestionState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub kpi_strip: KpiStripState,
    pub export_bar: ExportBar,
    pub coach_cards: CoachCardsState,
    pub quiz_index: usize,
    pub quiz: Option<QuizQuestionState>,
    pub notifications: NotificationTabsState,
    pub preferences: PreferencesFormState,
    // Resolves tile targets and view keys into actions
    pub router: Router,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            kpi_strip: KpiStripState::new(app.data.tiles.len()),
            export_bar: ExportBar::new(),
            coach_cards: CoachCardsState::new(),
            quiz_index: 0,
            quiz: quiz_state(app, 0),
            notifications: NotificationTabsState::new(&app.notification_tab),
            preferences: PreferencesFormState::new(app.preferences.clone()),
            router: Router::new(),
        }
    }
}

/// Widget state for question `index`, seeded with any recorded answer.
fn quiz_state(app: &App, index: usize) -> Option<QuizQuestionState> {
    let question = app.data.quiz.get(index)?;
    Some(
        QuizQuestionState::new(question, app.answer_for(&question.id))
            .with_progress(index, app.data.quiz.len()),
    )
}

/// Routes one terminal event, applies the resulting actions in order, and
/// returns `Effect::Quit` if any of them asked to quit.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let mut actions = Vec::new();

    match event {
        TuiEvent::Resize => {}
        TuiEvent::ForceQuit | TuiEvent::InputChar('q') => actions.push(Action::Quit),
        TuiEvent::Escape => actions.push(Action::Back),
        TuiEvent::InputChar(c @ '1'..='6') => {
            let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
            if let Some(view) = View::ALL.get(index) {
                tui.router.navigate(&NavigationTarget::new(view.path()));
            }
        }
        _ => dispatch_to_view(app, tui, &event, &mut actions),
    }
    actions.extend(tui.router.drain());

    let mut effect = Effect::None;
    for action in actions {
        if update(app, action) == Effect::Quit {
            effect = Effect::Quit;
        }
    }
    effect
}

/// Hands `event` to the components of the current view.
fn dispatch_to_view(app: &App, tui: &mut TuiState, event: &TuiEvent, actions: &mut Vec<Action>) {
    match app.view {
        View::Overview => {
            if let Some(KpiStripEvent::Activate(index)) = tui.kpi_strip.handle_event(event) {
                match app.data.tiles.get(index) {
                    Some(tile) => tile.activate(&mut tui.router),
                    None => warn!("Activated tile {} out of range", index),
                }
            } else if let Some(ExportBarEvent::Export(config)) = tui.export_bar.handle_event(event)
            {
                actions.push(Action::ExportRequested(config));
            }
        }
        View::Coaches => {
            tui.coach_cards.handle_event(event);
        }
        View::Quiz => match event {
            TuiEvent::InputChar('[') if tui.quiz_index > 0 => {
                tui.quiz_index -= 1;
                tui.quiz = quiz_state(app, tui.quiz_index);
            }
            TuiEvent::InputChar(']') if tui.quiz_index + 1 < app.data.quiz.len() => {
                tui.quiz_index += 1;
                tui.quiz = quiz_state(app, tui.quiz_index);
            }
            _ => {
                if let Some(QuizEvent::Selected {
                    question_id,
                    option_id,
                }) = tui.quiz.as_mut().and_then(|q| q.handle_event(event))
                {
                    actions.push(Action::AnswerSelected {
                        question_id,
                        option_id,
                    });
                }
            }
        },
        View::Usage => {}
        View::Notifications => {
            if let Some(NotificationTabsEvent::TabSelected(tab)) =
                tui.notifications.handle_event(event)
            {
                actions.push(Action::TabSelected(tab));
            }
        }
        View::Profile => {
            if let Some(PreferencesEvent::Saved(preferences)) = tui.preferences.handle_event(event)
            {
                actions.push(Action::PreferencesSaved(preferences));
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets a bare Esc arrive without delay;
        // terminals that don't support it ignore the request
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

pub fn run(config: ResolvedConfig, data: DashboardData) -> std::io::Result<()> {
    let mut app = App::from_config(data, &config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard =
        TerminalModeGuard::new().inspect_err(|e| warn!("Terminal modes not enabled: {}", e));

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut last_draw = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if last_draw.elapsed() >= REFRESH_INTERVAL {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let now = Utc::now();
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            last_draw = Instant::now();
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(tick_rate);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            debug!("Dispatching {:?} in {:?}", event, app.view);
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!(
        "Shutting down ({} export requests this session)",
        app.exports.len()
    );
    ratatui::restore();
    Ok(())
}
