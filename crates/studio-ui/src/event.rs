use studio_engine::coords::Vec2;
use studio_engine::input::Key;

/// Input events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed and released at roughly the same spot.
    Click { pos: Vec2 },
    /// Cursor position, sent every frame.
    Hover { pos: Vec2 },
    /// Cursor moved while the primary button is held; `start` is where the
    /// press happened.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a press at `start`, wherever the
    /// cursor is. Check `rect.contains(start)` to own the gesture.
    DragEnd { pos: Vec2, start: Vec2 },
    /// Key pressed this frame (auto-repeat included).
    KeyPress { key: Key },
}

impl UiEvent {
    /// Cursor position carried by the event, if any.
    pub fn pos(&self) -> Option<Vec2> {
        match self {
            UiEvent::Click { pos }
            | UiEvent::Hover { pos }
            | UiEvent::Drag { pos, .. }
            | UiEvent::DragEnd { pos, .. } => Some(*pos),
            UiEvent::KeyPress { .. } => None,
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; stop routing.
    Consumed,
    /// Not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
