//! # ViewTabs Component
//!
//! The row of view names under the title bar. Stateless: the current view
//! is a prop. Switching happens through the router (number keys), so the
//! highlighted tab always reflects where navigation actually landed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::core::route::View;
use crate::tui::component::Component;

pub struct ViewTabs {
    pub current: View,
    pub unread: usize,
}

impl ViewTabs {
    pub fn new(current: View, unread: usize) -> Self {
        Self { current, unread }
    }

    fn title(&self, index: usize, view: View) -> Line<'static> {
        if view == View::Notifications && self.unread > 0 {
            Line::from(format!("{} {} ({})", index + 1, view.label(), self.unread))
        } else {
            Line::from(format!("{} {}", index + 1, view.label()))
        }
    }
}

impl Component for ViewTabs {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = View::ALL
            .iter()
            .enumerate()
            .map(|(i, view)| self.title(i, *view))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.current.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│");

        frame.render_widget(tabs, area);
    }
}
