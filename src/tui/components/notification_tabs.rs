//! # NotificationTabs Component
//!
//! A tab switcher (`All`, `Unread`, `Mentions`) over the notification list.
//! Tab/→ and Shift-Tab/← move to the neighbouring tab and emit the new tab
//! id immediately; there is no separate confirm step. `a`, `u` and `m` pick
//! a tab directly and Enter re-selects the current one. Every pick emits,
//! including a pick of the tab already shown.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Tabs};

use crate::core::data::{
    Notification, NotificationKind, TAB_ALL, TAB_MENTIONS, TAB_UNREAD, filter_notifications,
    notification_tabs,
};
use crate::core::selection::{Selected, SingleChoice};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::coach_cards::relative_time;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationTabsEvent {
    TabSelected(String),
}

pub struct NotificationTabsState {
    pub tabs: SingleChoice,
}

impl NotificationTabsState {
    /// An unknown `selected` id falls back to the "all" tab.
    pub fn new(selected: &str) -> Self {
        let mut tabs = SingleChoice::with_selected(notification_tabs(), Some(selected));
        if tabs.selected().is_none() {
            tabs.select(TAB_ALL);
        }
        Self { tabs }
    }

    pub fn selected_tab(&self) -> &str {
        self.tabs.selected().unwrap_or(TAB_ALL)
    }

    /// Selects a tab by id. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> Option<NotificationTabsEvent> {
        let Selected(id) = self.tabs.select(id)?;
        Some(NotificationTabsEvent::TabSelected(id))
    }

    fn step(&mut self, forward: bool) -> Option<NotificationTabsEvent> {
        let len = self.tabs.len();
        if len == 0 {
            return None;
        }
        let current = self.tabs.selected_index().unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let Selected(id) = self.tabs.select_index(next)?;
        Some(NotificationTabsEvent::TabSelected(id))
    }
}

impl EventHandler for NotificationTabsState {
    type Event = NotificationTabsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NotificationTabsEvent> {
        match event {
            TuiEvent::NextTab | TuiEvent::CursorRight => self.step(true),
            TuiEvent::PrevTab | TuiEvent::CursorLeft => self.step(false),
            TuiEvent::InputChar('a') => self.select(TAB_ALL),
            TuiEvent::InputChar('u') => self.select(TAB_UNREAD),
            TuiEvent::InputChar('m') => self.select(TAB_MENTIONS),
            TuiEvent::Submit => {
                let current = self.selected_tab().to_string();
                self.select(&current)
            }
            _ => None,
        }
    }
}

fn kind_badge(kind: NotificationKind) -> Span<'static> {
    match kind {
        NotificationKind::Mention => Span::styled("@ ", Style::default().fg(Color::Magenta)),
        NotificationKind::Grade => Span::styled("✓ ", Style::default().fg(Color::Green)),
        NotificationKind::System => Span::styled("! ", Style::default().fg(Color::Yellow)),
    }
}

pub struct NotificationPanel<'a> {
    state: &'a NotificationTabsState,
    notifications: &'a [Notification],
    now: DateTime<Utc>,
}

impl<'a> NotificationPanel<'a> {
    pub fn new(
        state: &'a NotificationTabsState,
        notifications: &'a [Notification],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            state,
            notifications,
            now,
        }
    }

    fn item(&self, notification: &Notification) -> ListItem<'static> {
        let title_style = if notification.read {
            Style::default().fg(Color::Gray)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let header = Line::from(vec![
            kind_badge(notification.kind),
            Span::styled(notification.title.clone(), title_style),
            Span::styled(
                format!("  {}", relative_time(self.now, notification.received_at)),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let body = Line::from(Span::styled(
            format!("  {}", notification.body),
            Style::default().fg(Color::DarkGray),
        ));
        ListItem::new(vec![header, body])
    }
}

impl Component for NotificationPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let titles: Vec<Line> = self
            .state
            .tabs
            .options()
            .iter()
            .map(|o| Line::from(o.label.clone()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.state.tabs.selected_index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, tabs_area);

        let visible = filter_notifications(self.notifications, self.state.selected_tab());
        let block = Block::bordered()
            .title_bottom(Line::from(" Tab Next  Shift-Tab Prev  a/u/m Pick ").centered())
            .border_style(Style::default().fg(Color::DarkGray));

        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new("Nothing here.")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block),
                list_area,
            );
            return;
        }

        let items: Vec<ListItem> = visible.iter().map(|n| self.item(n)).collect();
        frame.render_widget(List::new(items).block(block), list_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MessageLog, buffer_text, demo_app};
    use chrono::TimeZone;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &NotificationTabsState, notifications: &[Notification]) -> String {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(90, 14)).unwrap();
        terminal
            .draw(|f| NotificationPanel::new(state, notifications, now).render(f, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_starts_on_requested_tab() {
        assert_eq!(NotificationTabsState::new(TAB_UNREAD).selected_tab(), TAB_UNREAD);
        assert_eq!(NotificationTabsState::new("bogus").selected_tab(), TAB_ALL);
    }

    #[test]
    fn test_tab_keys_emit_each_switch() {
        let mut state = NotificationTabsState::new(TAB_ALL);
        let mut log = MessageLog::default();
        log.record(state.handle_event(&TuiEvent::NextTab));
        log.record(state.handle_event(&TuiEvent::NextTab));
        log.record(state.handle_event(&TuiEvent::NextTab));
        log.record(state.handle_event(&TuiEvent::PrevTab));
        assert_eq!(
            log.messages,
            vec![
                NotificationTabsEvent::TabSelected(TAB_UNREAD.to_string()),
                NotificationTabsEvent::TabSelected(TAB_MENTIONS.to_string()),
                NotificationTabsEvent::TabSelected(TAB_ALL.to_string()),
                NotificationTabsEvent::TabSelected(TAB_MENTIONS.to_string()),
            ]
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = NotificationTabsState::new(TAB_ALL);
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(state.selected_tab(), TAB_ALL);
    }

    #[test]
    fn test_reselecting_current_tab_emits_each_time() {
        let mut state = NotificationTabsState::new(TAB_UNREAD);
        let mut log = MessageLog::default();
        log.record(state.handle_event(&TuiEvent::InputChar('u')));
        log.record(state.handle_event(&TuiEvent::Submit));
        let expected = NotificationTabsEvent::TabSelected(TAB_UNREAD.to_string());
        assert_eq!(log.messages, vec![expected.clone(), expected]);
        assert_eq!(state.selected_tab(), TAB_UNREAD);
    }

    #[test]
    fn test_letter_keys_pick_tabs_directly() {
        let mut state = NotificationTabsState::new(TAB_ALL);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('m')),
            Some(NotificationTabsEvent::TabSelected(TAB_MENTIONS.to_string()))
        );
        assert_eq!(state.selected_tab(), TAB_MENTIONS);
        assert_eq!(state.select("bogus"), None);
        assert_eq!(state.selected_tab(), TAB_MENTIONS);
    }

    #[test]
    fn test_mentions_tab_filters_list() {
        let app = demo_app();
        let state = NotificationTabsState::new(TAB_MENTIONS);
        let text = render(&state, &app.data.notifications);
        assert!(text.contains("Amara mentioned you"));
        assert!(text.contains("Lukas mentioned you"));
        assert!(!text.contains("Scheduled maintenance"));
    }

    #[test]
    fn test_unread_tab_hides_read_items() {
        let app = demo_app();
        let state = NotificationTabsState::new(TAB_UNREAD);
        let text = render(&state, &app.data.notifications);
        assert!(text.contains("Grades published"));
        assert!(!text.contains("Scheduled maintenance"));
    }

    #[test]
    fn test_empty_filter_placeholder() {
        let state = NotificationTabsState::new(TAB_ALL);
        assert!(render(&state, &[]).contains("Nothing here."));
    }
}
