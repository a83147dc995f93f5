use studio_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The trait every UI component implements.
///
/// Trees are rebuilt each frame from application state, so widgets hold no
/// state of their own beyond what they were built with; anything that must
/// survive a rebuild goes through [`Memory`](crate::memory::Memory).
pub trait Widget: 'static {
    /// Size this widget wants within `constraints`. Must be deterministic;
    /// parents call it again while painting and routing events.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draws into `painter` within `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Routes an input event. Return [`EventResult::Consumed`] to stop
    /// propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        EventResult::Ignored
    }

    /// Routes an event to content painted above the regular layer (open
    /// popovers, modal dialogs). Runs over the whole tree before
    /// [`on_event`](Self::on_event); a consumed event never reaches the
    /// regular pass. Containers forward to their children.
    fn on_overlay_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        EventResult::Ignored
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// Type-erased widget; the child type of every container.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }

    #[inline]
    pub fn on_overlay_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.0.on_overlay_event(event, rect, ctx)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
