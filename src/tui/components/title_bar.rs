//! # TitleBar Component
//!
//! Top line of the dashboard: application name, current view, and the
//! latest status message.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(View::Usage, "Export requested".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"coursedash · Usage | Export requested: all-fields as csv"`
//! 2. **Default**: `"coursedash · Usage"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::route::View;
use crate::tui::component::Component;

pub struct TitleBar {
    pub view: View,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(view: View, status_message: String) -> Self {
        Self {
            view,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "coursedash",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" · {}", self.view.label())),
        ];

        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(View::Usage, "Export requested".to_string());
        let text = render(&mut title_bar);
        assert!(text.contains("coursedash"));
        assert!(text.contains("Usage"));
        assert!(text.contains("| Export requested"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(View::Overview, String::new());
        let text = render(&mut title_bar);
        assert!(text.contains("Overview"));
        assert!(!text.contains('|'));
    }
}
