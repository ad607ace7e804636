//! # Core Interaction Model
//!
//! The widget contracts and the application state they report into.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌──────────────────────────┐
//!                    │          CORE            │
//!                    │  (this module)           │
//!                    │                          │
//!                    │  • widget contracts      │
//!                    │  • State (app data)      │
//!                    │  • Action (messages)     │
//!                    │  • update() (reducer)    │
//!                    │                          │
//!                    │  No terminal. No UI.     │
//!                    └────────────┬─────────────┘
//!                                 │
//!                                 ▼
//!                          ┌────────────┐
//!                          │    TUI     │
//!                          │  Adapter   │
//!                          │ (ratatui)  │
//!                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`selection`]: single-choice selector (quiz options, tabs)
//! - [`export`]: confirm-buffered export toolbar
//! - [`navigation`]: navigation tiles and the `Navigator` seam
//! - [`format`]: display metric formatting and bar widths
//! - [`preferences`]: staged profile preference form
//! - [`route`]: path → view resolution (the navigator)
//! - [`data`]: the dashboard dataset and its loading
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file and override resolution

pub mod action;
pub mod config;
pub mod data;
pub mod export;
pub mod format;
pub mod navigation;
pub mod preferences;
pub mod route;
pub mod selection;
pub mod state;
