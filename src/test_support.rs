//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::data::DashboardData;
use crate::core::navigation::{NavigationTarget, Navigator};
use crate::core::state::App;

/// A navigator that only remembers where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<NavigationTarget>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: &NavigationTarget) {
        self.visited.push(target.clone());
    }
}

/// Captures messages emitted by a widget, in emission order.
#[derive(Debug)]
pub struct MessageLog<M> {
    pub messages: Vec<M>,
}

impl<M> Default for MessageLog<M> {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
        }
    }
}

impl<M> MessageLog<M> {
    /// Records `message` if the widget produced one.
    pub fn record(&mut self, message: Option<M>) {
        self.messages.extend(message);
    }
}

/// Creates a test App backed by the bundled demo data.
pub fn demo_app() -> App {
    App::new(DashboardData::demo().expect("bundled demo data parses"))
}

/// Flattens a test terminal buffer to one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Position `(x, y)` of the first cell where `needle` starts, searching row by row.
pub fn find_cell(buffer: &ratatui::buffer::Buffer, needle: &str) -> Option<(u16, u16)> {
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        if let Some(byte) = row.find(needle) {
            let x = row[..byte].chars().count() as u16;
            return Some((area.left() + x, y));
        }
    }
    None
}
