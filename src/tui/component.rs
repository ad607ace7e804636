use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Render wrappers are built per frame from borrowed state and props
/// (`KpiStrip::new(&state, &tiles, symbol)`), rendered once, and dropped.
/// `render` takes `&mut self` because some wrappers hold `&mut` state that
/// the widget updates while drawing, such as the coach list scroll offset.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent widget state that reacts to keys.
///
/// Returns `Some` only when the user committed something the application
/// should hear about (a selection, a confirm, an activation). Focus and
/// cursor movement stay local and return `None`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
