use studio_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── AnchorVal ─────────────────────────────────────────────────────────────

/// A distance from a parent edge, used to anchor a [`Stack`] child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorVal {
    /// Fixed pixel distance from this edge.
    Px(f32),
    /// Fraction of the parent's dimension on this axis (0.0 = 0 %, 1.0 = 100 %).
    Pct(f32),
}

impl AnchorVal {
    #[inline]
    pub fn resolve(self, parent_dim: f32) -> f32 {
        match self {
            AnchorVal::Px(v) => v,
            AnchorVal::Pct(p) => parent_dim * p,
        }
    }
}

// ── SizeHint ──────────────────────────────────────────────────────────────

/// Controls how a [`Stack`] child's width or height is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SizeHint {
    /// Use the child's measured natural size (default).
    #[default]
    Natural,
    Px(f32),
    /// Fraction of the parent's dimension.
    Pct(f32),
    /// Equal to the parent's dimension.
    Fill,
}

impl SizeHint {
    #[inline]
    pub fn resolve(self, parent_dim: f32, natural: f32) -> f32 {
        match self {
            SizeHint::Natural => natural,
            SizeHint::Px(v) => v,
            SizeHint::Pct(p) => parent_dim * p,
            SizeHint::Fill => parent_dim,
        }
    }
}

// ── StackItem ─────────────────────────────────────────────────────────────

/// A child inside a [`Stack`] together with its anchor constraints.
///
/// | left  | right | outcome                                          |
/// |-------|-------|--------------------------------------------------|
/// | Some  | Some  | stretches between the edges                      |
/// | Some  | None  | pinned to left edge; width from `SizeHint`       |
/// | None  | Some  | pinned to right edge; width from `SizeHint`      |
/// | None  | None  | x = 0; width from `SizeHint`                     |
///
/// The same table applies vertically. `center_x` / `center_y` turn the
/// anchors into a band instead: the child keeps its `SizeHint` size and is
/// centered between the anchored edges.
pub struct StackItem {
    pub element: Element,
    pub left: Option<AnchorVal>,
    pub top: Option<AnchorVal>,
    pub right: Option<AnchorVal>,
    pub bottom: Option<AnchorVal>,
    pub width: SizeHint,
    pub height: SizeHint,
    pub center_x: bool,
    pub center_y: bool,
}

impl StackItem {
    pub fn new(element: impl Into<Element>) -> Self {
        Self {
            element: element.into(),
            left: None,
            top: None,
            right: None,
            bottom: None,
            width: SizeHint::Natural,
            height: SizeHint::Natural,
            center_x: false,
            center_y: false,
        }
    }

    pub fn left(mut self, v: AnchorVal) -> Self { self.left = Some(v); self }
    pub fn top(mut self, v: AnchorVal) -> Self { self.top = Some(v); self }
    pub fn right(mut self, v: AnchorVal) -> Self { self.right = Some(v); self }
    pub fn bottom(mut self, v: AnchorVal) -> Self { self.bottom = Some(v); self }
    pub fn width(mut self, v: SizeHint) -> Self { self.width = v; self }
    pub fn height(mut self, v: SizeHint) -> Self { self.height = v; self }
    pub fn center_x(mut self) -> Self { self.center_x = true; self }
    pub fn center_y(mut self) -> Self { self.center_y = true; self }

    /// Pins all four edges to the parent.
    pub fn fill(self) -> Self {
        self.left(AnchorVal::Px(0.0))
            .top(AnchorVal::Px(0.0))
            .right(AnchorVal::Px(0.0))
            .bottom(AnchorVal::Px(0.0))
    }

    /// Computes this item's rect within `parent`.
    pub fn compute_rect(&self, parent: Rect, ctx: &LayoutCtx) -> Rect {
        let natural_space = Vec2::new(
            band(parent.size.x, self.left, self.right).1,
            band(parent.size.y, self.top, self.bottom).1,
        );
        let natural = self.element.measure(Constraints::loose(natural_space), ctx);

        let (x, w) = place(parent.origin.x, parent.size.x, self.left, self.right, self.width, natural.x, self.center_x);
        let (y, h) = place(parent.origin.y, parent.size.y, self.top, self.bottom, self.height, natural.y, self.center_y);
        Rect::new(x, y, w, h)
    }
}

/// Offset and length of the space between two optional anchors.
fn band(dim: f32, start: Option<AnchorVal>, end: Option<AnchorVal>) -> (f32, f32) {
    let s = start.map_or(0.0, |a| a.resolve(dim));
    let e = end.map_or(0.0, |a| a.resolve(dim));
    (s, (dim - s - e).max(0.0))
}

/// Position and size along one axis.
fn place(
    origin: f32,
    dim: f32,
    start: Option<AnchorVal>,
    end: Option<AnchorVal>,
    hint: SizeHint,
    natural: f32,
    center: bool,
) -> (f32, f32) {
    if center {
        let (offset, len) = band(dim, start, end);
        let size = hint.resolve(len, natural).min(len);
        return (origin + offset + (len - size) * 0.5, size);
    }
    match (start, end) {
        (Some(s), Some(e)) => {
            let s = s.resolve(dim);
            (origin + s, (dim - s - e.resolve(dim)).max(0.0))
        }
        (Some(s), None) => (origin + s.resolve(dim), hint.resolve(dim, natural)),
        (None, Some(e)) => {
            let size = hint.resolve(dim, natural);
            (origin + dim - e.resolve(dim) - size, size)
        }
        (None, None) => (origin, hint.resolve(dim, natural)),
    }
}

// ── Stack ─────────────────────────────────────────────────────────────────

/// An overlay container that positions each child using anchor constraints.
///
/// Children are painted in insertion order (first = bottom, last = top).
/// Events are routed in reverse order (topmost child gets first hit-test).
///
/// ```rust,ignore
/// Stack::new()
///     .item(StackItem::new(backdrop).fill())
///     .item(StackItem::new(control_bar)
///         .bottom(AnchorVal::Px(48.0))
///         .left(AnchorVal::Px(8.0))
///         .right(AnchorVal::Px(8.0))
///         .center_x())
/// ```
pub struct Stack {
    children: Vec<StackItem>,
}

impl Stack {
    pub fn new() -> Self {
        Self { children: Vec::new() }
    }

    pub fn item(mut self, item: StackItem) -> Self {
        self.children.push(item);
        self
    }

    /// Adds `item` only when `cond` holds.
    pub fn item_if(self, cond: bool, item: impl FnOnce() -> StackItem) -> Self {
        if cond { self.item(item()) } else { self }
    }

    fn route(
        &mut self,
        rect: Rect,
        ctx: &LayoutCtx,
        mut f: impl FnMut(&mut Element, Rect) -> EventResult,
    ) -> EventResult {
        for item in self.children.iter_mut().rev() {
            let child_rect = item.compute_rect(rect, ctx);
            if f(&mut item.element, child_rect).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Stack {
    /// Fills the available space; children are placed inside it.
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let pw = if constraints.max.x.is_finite() { constraints.max.x } else { 0.0 };
        let ph = if constraints.max.y.is_finite() { constraints.max.y } else { 0.0 };
        constraints.constrain(Vec2::new(pw, ph))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        for item in &self.children {
            let child_rect = item.compute_rect(rect, &ctx);
            item.element.paint(painter, child_rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.route(rect, ctx, |child, r| child.on_event(event, r, ctx))
    }

    fn on_overlay_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.route(rect, ctx, |child, r| child.on_overlay_event(event, r, ctx))
    }
}

#[cfg(test)]
mod tests {
    use studio_engine::text::FontSystem;

    use super::*;
    use crate::widgets::test_support::{ctx, Fixed};

    const PARENT: Rect = Rect { origin: Vec2 { x: 0.0, y: 0.0 }, size: Vec2 { x: 800.0, y: 600.0 } };

    #[test]
    fn fill_covers_parent() {
        let fonts = FontSystem::new();
        let item = StackItem::new(Fixed::new(10.0, 10.0)).fill();
        assert_eq!(item.compute_rect(PARENT, &ctx(&fonts)), PARENT);
    }

    #[test]
    fn bottom_anchor_centered_horizontally() {
        let fonts = FontSystem::new();
        let item = StackItem::new(Fixed::new(200.0, 64.0))
            .bottom(AnchorVal::Px(48.0))
            .left(AnchorVal::Px(8.0))
            .right(AnchorVal::Px(8.0))
            .center_x();
        assert_eq!(item.compute_rect(PARENT, &ctx(&fonts)), Rect::new(300.0, 488.0, 200.0, 64.0));
    }

    #[test]
    fn centered_child_is_limited_to_band() {
        let fonts = FontSystem::new();
        let item = StackItem::new(Fixed::new(2000.0, 10.0))
            .top(AnchorVal::Px(96.0))
            .left(AnchorVal::Px(8.0))
            .right(AnchorVal::Px(8.0))
            .center_x();
        let r = item.compute_rect(PARENT, &ctx(&fonts));
        assert_eq!(r.origin, Vec2::new(8.0, 96.0));
        assert_eq!(r.width(), 784.0);
    }

    #[test]
    fn right_anchor_uses_natural_width() {
        let fonts = FontSystem::new();
        let item = StackItem::new(Fixed::new(50.0, 20.0)).right(AnchorVal::Pct(0.1));
        assert_eq!(item.compute_rect(PARENT, &ctx(&fonts)), Rect::new(670.0, 0.0, 50.0, 20.0));
    }

    #[test]
    fn item_if_skips_when_false() {
        let stack = Stack::new()
            .item_if(false, || StackItem::new(Fixed::new(1.0, 1.0)))
            .item_if(true, || StackItem::new(Fixed::new(1.0, 1.0)));
        assert_eq!(stack.children.len(), 1);
    }
}
