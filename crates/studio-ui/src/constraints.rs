use studio_engine::coords::{Rect, Vec2};
use studio_engine::text::FontSystem;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding, margin).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Size range a parent offers a child during measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::ZERO, max }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::ZERO, max: Vec2::splat(f32::INFINITY) }
    }

    /// Clamps a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Shrinks `max` by `edges`; `min` becomes zero.
    #[inline]
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new((self.max.x - edges.h()).max(0.0), (self.max.y - edges.v()).max(0.0)),
        }
    }
}

// ── LayoutCtx ─────────────────────────────────────────────────────────────

/// What `measure` and event routing need to lay children out again.
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Physical pixels per logical pixel, for scale-exact text measurement.
    pub scale: f32,
    /// Window size in logical pixels; popovers use it to stay on screen.
    pub viewport: Vec2,
}

impl LayoutCtx<'_> {
    #[inline]
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size(Vec2::ZERO, self.viewport)
    }
}

// ── rect helper ───────────────────────────────────────────────────────────

/// Shrinks a rect by `edges`.
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Constraints ───────────────────────────────────────────────────────

    #[test]
    fn constrain_clamps_to_range() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 300.0)), Vec2::new(10.0, 100.0));
        assert_eq!(c.constrain(Vec2::new(20.0, 30.0)), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn tight_forces_exact_size() {
        let c = Constraints::tight(Vec2::new(40.0, 40.0));
        assert_eq!(c.constrain(Vec2::new(0.0, 999.0)), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn shrink_reduces_max_and_clamps_to_zero() {
        let c = Constraints::loose(Vec2::new(100.0, 10.0)).shrink(Edges::symmetric(12.0, 16.0));
        assert_eq!(c.max, Vec2::new(68.0, 0.0));
        assert_eq!(c.min, Vec2::ZERO);
    }

    // ── inset_rect ────────────────────────────────────────────────────────

    #[test]
    fn inset_rect_asymmetric_padding() {
        let rect = Rect::new(5.0, 5.0, 100.0, 60.0);
        let edges = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        assert_eq!(inset_rect(rect, edges), Rect::new(11.0, 9.0, 84.0, 48.0));
    }

    #[test]
    fn inset_rect_clamps_to_zero() {
        let inner = inset_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Edges::all(20.0));
        assert_eq!(inner.size, Vec2::ZERO);
    }

    #[test]
    fn edges_h_and_v() {
        let e = Edges::symmetric(12.0, 16.0);
        assert_eq!(e.h(), 32.0);
        assert_eq!(e.v(), 24.0);
    }
}
