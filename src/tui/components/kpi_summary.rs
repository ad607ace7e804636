//! # KpiSummary Component
//!
//! Five headline numbers in bordered boxes. Pure display: every value is
//! precomputed upstream and only formatted here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::data::KpiSummary;
use crate::core::format::DisplayMetric;
use crate::tui::component::Component;

pub struct KpiSummaryView<'a> {
    pub summary: &'a KpiSummary,
    pub currency_symbol: &'a str,
}

impl<'a> KpiSummaryView<'a> {
    pub fn new(summary: &'a KpiSummary, currency_symbol: &'a str) -> Self {
        Self {
            summary,
            currency_symbol,
        }
    }

    /// Label and metric for each box, left to right.
    pub fn entries(&self) -> [(&'static str, DisplayMetric); 5] {
        [
            ("Total learners", DisplayMetric::Count(self.summary.total_learners)),
            ("Active learners", DisplayMetric::Count(self.summary.active_learners)),
            ("Completion", DisplayMetric::Percent(self.summary.completion_rate)),
            ("Avg. score", DisplayMetric::Rating(self.summary.average_score)),
            ("Revenue", DisplayMetric::Currency(self.summary.revenue)),
        ]
    }
}

impl Component for KpiSummaryView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let entries = self.entries();
        let areas = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);

        for ((label, metric), cell) in entries.iter().zip(areas.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    metric.render(self.currency_symbol),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, Style::default().fg(Color::DarkGray))),
            ];
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
            frame.render_widget(paragraph, *cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, demo_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_formatted_values() {
        let app = demo_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 4)).unwrap();
        let mut view = KpiSummaryView::new(&app.data.summary, "$");
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("12,450"));
        assert!(text.contains("8,321"));
        assert!(text.contains("87.3%"));
        assert!(text.contains("78.3"));
        assert!(text.contains("$48,210.50"));
        assert!(text.contains("Revenue"));
    }

    #[test]
    fn test_currency_symbol_is_a_prop() {
        let app = demo_app();
        let view = KpiSummaryView::new(&app.data.summary, "€");
        let (_, revenue) = &view.entries()[4];
        assert_eq!(revenue.render(view.currency_symbol), "€48,210.50");
    }
}
