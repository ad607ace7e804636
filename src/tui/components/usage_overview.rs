//! # UsageOverview Component
//!
//! Total request count plus one horizontal bar per tool. Bar length is the
//! tool's share of the busiest tool, so the busiest bar is always full.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::data::UsageOverview;
use crate::core::format::{bar_cells, format_compact, format_thousands, relative_widths};
use crate::tui::component::Component;

pub struct UsageOverviewView<'a> {
    pub usage: &'a UsageOverview,
    /// Max cells for a full-length bar.
    pub bar_width: u16,
}

impl<'a> UsageOverviewView<'a> {
    pub fn new(usage: &'a UsageOverview, bar_width: u16) -> Self {
        Self { usage, bar_width }
    }

    /// Bar percentage per tool, in list order.
    pub fn widths(&self) -> Vec<f64> {
        let counts: Vec<u64> = self.usage.tools.iter().map(|t| t.count).collect();
        relative_widths(&counts)
    }

    fn lines(&self, area_width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::raw("Total requests  "),
                Span::styled(
                    format_compact(self.usage.total_requests),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ];

        if self.usage.tools.is_empty() {
            lines.push(Line::from(Span::styled(
                "No tool usage recorded.",
                Style::default().fg(Color::DarkGray),
            )));
            return lines;
        }

        let label_width = self
            .usage
            .tools
            .iter()
            .map(|t| t.tool.width())
            .max()
            .unwrap_or(0);
        // Leave room for the label, gaps and the count column
        let room = usize::from(area_width).saturating_sub(label_width + 12);
        let bar_width = self.bar_width.min(u16::try_from(room).unwrap_or(u16::MAX));

        for (tool, percent) in self.usage.tools.iter().zip(self.widths()) {
            let cells = usize::from(bar_cells(percent, bar_width));
            let pad = label_width.saturating_sub(tool.tool.width());
            lines.push(Line::from(vec![
                Span::raw(format!("{}{}  ", tool.tool, " ".repeat(pad))),
                Span::styled("█".repeat(cells), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" {}", format_thousands(tool.count)),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
        lines
    }
}

impl Component for UsageOverviewView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Tool usage ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner_width = area.width.saturating_sub(2);
        frame.render_widget(
            Paragraph::new(self.lines(inner_width))
                .alignment(Alignment::Left)
                .block(block),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::ToolRequests;
    use crate::test_support::{buffer_text, find_cell};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn usage(tools: &[(&str, u64)], total: u64) -> UsageOverview {
        UsageOverview {
            total_requests: total,
            tools: tools
                .iter()
                .map(|(tool, count)| ToolRequests {
                    tool: tool.to_string(),
                    count: *count,
                })
                .collect(),
        }
    }

    fn render(usage: &UsageOverview, bar_width: u16) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|f| UsageOverviewView::new(usage, bar_width).render(f, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn bar_len(buffer: &ratatui::buffer::Buffer, label: &str) -> usize {
        let (_, y) = find_cell(buffer, label).unwrap();
        (0..buffer.area.width)
            .filter(|x| buffer[(*x, y)].symbol() == "█")
            .count()
    }

    #[test]
    fn test_widths_relative_to_max() {
        let usage = usage(&[("a", 50), ("b", 100)], 150);
        assert_eq!(UsageOverviewView::new(&usage, 40).widths(), vec![50.0, 100.0]);
    }

    #[test]
    fn test_single_zero_tool_has_empty_bar() {
        let usage = usage(&[("a", 0)], 0);
        assert_eq!(UsageOverviewView::new(&usage, 40).widths(), vec![0.0]);
        let buffer = render(&usage, 40);
        assert_eq!(bar_len(&buffer, "a  "), 0);
    }

    #[test]
    fn test_render_bars_and_compact_total() {
        let usage = usage(&[("alpha", 50), ("beta", 100)], 12450);
        let buffer = render(&usage, 40);

        assert!(buffer_text(&buffer).contains("12.5K"));
        assert_eq!(bar_len(&buffer, "alpha"), 20);
        assert_eq!(bar_len(&buffer, "beta"), 40);
    }

    #[test]
    fn test_bar_width_shrinks_to_fit() {
        let usage = usage(&[("alpha", 100)], 100);
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        terminal
            .draw(|f| UsageOverviewView::new(&usage, 40).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        // 28 inner cells - 5 label - 12 reserved
        assert_eq!(bar_len(buffer, "alpha"), 11);
    }

    #[test]
    fn test_empty_usage_placeholder() {
        let usage = usage(&[], 0);
        let text = buffer_text(&render(&usage, 40));
        assert!(text.contains("No tool usage recorded."));
        assert!(text.contains("Total requests  0"));
    }
}
