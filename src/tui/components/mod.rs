//! # TUI Components
//!
//! This module contains all UI components for the terminal dashboard.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top line with the current view and status message
//! - `ViewTabs`: the numbered view switcher
//! - `KpiSummaryView`: headline numbers
//! - `UsageOverviewView`: per-tool request bars
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it each
//! frame to render. The state side implements `EventHandler` and emits a
//! message when the user commits something:
//! - `KpiStripState` → `KpiStripEvent::Activate`
//! - `ExportBar` → `ExportBarEvent::Export`
//! - `QuizQuestionState` → `QuizEvent::Selected`
//! - `NotificationTabsState` → `NotificationTabsEvent::TabSelected`
//! - `PreferencesFormState` → `PreferencesEvent::Saved`
//! - `CoachCardsState` (scroll only, never emits)
//!
//! Cursor and focus movement never emits. Only the commit key does, and it
//! emits on every press.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor parameters),
//! not by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! KpiStrip::new(&tui.kpi_strip, &app.data.tiles, &app.currency_symbol).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! KpiStrip::render(frame, area); // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── title_bar.rs         (top status line)
//! ├── view_tabs.rs         (view switcher)
//! ├── kpi_summary.rs       (headline numbers)
//! ├── kpi_strip.rs         (navigation tiles)
//! ├── export_bar.rs        (export toolbar)
//! ├── coach_cards.rs       (scrollable coach list)
//! ├── quiz_question.rs     (single-choice question)
//! ├── usage_overview.rs    (tool usage bars)
//! ├── notification_tabs.rs (tabbed notification list)
//! └── preferences_form.rs  (profile preferences)
//! ```

mod title_bar;
pub use title_bar::TitleBar;
mod view_tabs;
pub use view_tabs::ViewTabs;
mod kpi_summary;
pub use kpi_summary::KpiSummaryView;
mod usage_overview;
pub use usage_overview::UsageOverviewView;

pub mod coach_cards;
pub mod export_bar;
pub mod kpi_strip;
pub mod notification_tabs;
pub mod preferences_form;
pub mod quiz_question;
pub use coach_cards::{CoachCards, CoachCardsState};
pub use export_bar::{ExportBar, ExportBarEvent};
pub use kpi_strip::{KpiStrip, KpiStripEvent, KpiStripState};
pub use notification_tabs::{NotificationPanel, NotificationTabsEvent, NotificationTabsState};
pub use preferences_form::{PreferencesEvent, PreferencesFormState, PreferencesView};
pub use quiz_question::{QuizEvent, QuizQuestionState, QuizQuestionView};
