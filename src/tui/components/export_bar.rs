//! # ExportBar Component
//!
//! Keyboard front-end for [`ExportToolbar`]: `t` cycles the export type,
//! `f` cycles the format, `e` confirms. Only `e` produces a message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::export::{ExportConfiguration, ExportFormat, ExportToolbar, ExportType};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportBarEvent {
    Export(ExportConfiguration),
}

#[derive(Debug, Default)]
pub struct ExportBar {
    pub toolbar: ExportToolbar,
}

impl ExportBar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for ExportBar {
    type Event = ExportBarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ExportBarEvent> {
        match event {
            TuiEvent::InputChar('t') => {
                self.toolbar.cycle_type();
                None
            }
            TuiEvent::InputChar('f') => {
                self.toolbar.cycle_format();
                None
            }
            TuiEvent::InputChar('e') => Some(ExportBarEvent::Export(self.toolbar.confirm())),
            _ => None,
        }
    }
}

fn choice_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

impl Component for ExportBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw("Type ")];
        for export_type in ExportType::ALL {
            spans.push(Span::styled(
                format!(" {} ", export_type.label()),
                choice_style(export_type == self.toolbar.export_type()),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("  Format "));
        for format in ExportFormat::ALL {
            spans.push(Span::styled(
                format!(" {} ", format.label()),
                choice_style(format == self.toolbar.format()),
            ));
            spans.push(Span::raw(" "));
        }

        let block = Block::bordered()
            .title(" Export ")
            .title_bottom(Line::from(" t Type  f Format  e Export ").centered())
            .border_style(Style::default().fg(Color::DarkGray));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
