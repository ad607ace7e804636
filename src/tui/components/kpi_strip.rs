//! # KpiStrip Component
//!
//! A row of navigation tiles. ←/→ move the focus, Enter activates the
//! focused tile. The strip only reports *which* tile was activated; the
//! adapter forwards that tile's target to the navigator.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `KpiStripState` lives in `TuiState`
//! - `KpiStrip` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::navigation::NavTile;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KpiStripEvent {
    Activate(usize),
}

/// Focus cursor over the tiles.
#[derive(Debug, Default)]
pub struct KpiStripState {
    pub focused: usize,
    pub tile_count: usize,
}

impl KpiStripState {
    pub fn new(tile_count: usize) -> Self {
        Self {
            focused: 0,
            tile_count,
        }
    }
}

impl EventHandler for KpiStripState {
    type Event = KpiStripEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<KpiStripEvent> {
        if self.tile_count == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorLeft => {
                self.focused = self.focused.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.focused = (self.focused + 1).min(self.tile_count - 1);
                None
            }
            TuiEvent::Submit => Some(KpiStripEvent::Activate(self.focused)),
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct KpiStrip<'a> {
    state: &'a KpiStripState,
    tiles: &'a [NavTile],
    currency_symbol: &'a str,
}

impl<'a> KpiStrip<'a> {
    pub fn new(state: &'a KpiStripState, tiles: &'a [NavTile], currency_symbol: &'a str) -> Self {
        Self {
            state,
            tiles,
            currency_symbol,
        }
    }

    fn tile_style(&self, index: usize) -> Style {
        if index == self.state.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for KpiStrip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.tiles.is_empty() {
            frame.render_widget(
                Paragraph::new("No tiles configured.")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                area,
            );
            return;
        }

        let count = self.tiles.len() as u32;
        let constraints = vec![Constraint::Ratio(1, count); self.tiles.len()];
        let areas = Layout::horizontal(constraints).split(area);

        for (i, (tile, cell)) in self.tiles.iter().zip(areas.iter()).enumerate() {
            let focused = i == self.state.focused;
            let value_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let lines = vec![
                Line::from(Span::styled(tile.metric.render(self.currency_symbol), value_style)),
                Line::from(Span::styled(tile.label.clone(), Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    format!("→ {}", tile.target),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let block = Block::bordered().border_style(self.tile_style(i));
            let block = if focused {
                block.title(" Enter ")
            } else {
                block
            };
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center).block(block),
                *cell,
            );
        }
    }
}
