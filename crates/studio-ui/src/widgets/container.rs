use studio_engine::coords::{Rect, Vec2};
use studio_engine::paint::{Color, Paint};
use studio_engine::scene::Border;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::{Painter, Shadow};
use crate::widget::{Element, Widget};

/// A single-child widget that applies padding, background, border, shadow
/// and corner rounding.
///
/// ```rust,ignore
/// Container::new()
///     .padding(Edges::symmetric(12.0, 16.0))
///     .background(Color::WHITE.with_opacity(0.3))
///     .corner_radius(24.0)
///     .shadow(Shadow::lg())
///     .child(row)
/// ```
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Paint>,
    border: Option<Border>,
    shadow: Option<Shadow>,
    corner_radius: f32,
    min_size: Vec2,
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            padding: Edges::default(),
            background: None,
            border: None,
            shadow: None,
            corner_radius: 0.0,
            min_size: Vec2::ZERO,
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background = Some(paint.into());
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_size = Vec2::new(width, height);
        self
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child = self
            .child
            .as_ref()
            .map(|c| c.measure(constraints.shrink(self.padding), ctx))
            .unwrap_or(Vec2::ZERO);

        constraints.constrain(Vec2::new(
            (child.x + self.padding.h()).max(self.min_size.x),
            (child.y + self.padding.v()).max(self.min_size.y),
        ))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(shadow) = self.shadow {
            painter.shadow(rect, self.corner_radius, shadow);
        }
        if self.background.is_some() || self.border.is_some() {
            let paint = self.background.clone().unwrap_or(Paint::Solid(Color::transparent()));
            painter.fill_rounded_rect(rect, self.corner_radius, paint, self.border);
        }
        if let Some(child) = &self.child {
            child.paint(painter, inset_rect(rect, self.padding));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        match &mut self.child {
            Some(child) => child.on_event(event, inset_rect(rect, self.padding), ctx),
            None => EventResult::Ignored,
        }
    }

    fn on_overlay_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        match &mut self.child {
            Some(child) => child.on_overlay_event(event, inset_rect(rect, self.padding), ctx),
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use studio_engine::scene::{DrawList, Layer};
    use studio_engine::text::FontSystem;

    use super::*;
    use crate::widgets::test_support::{ctx, Fixed};

    #[test]
    fn measure_respects_min_size() {
        let fonts = FontSystem::new();
        let c = Container::new().min_size(40.0, 40.0).child(Fixed::new(10.0, 60.0));
        assert_eq!(c.measure(Constraints::unbounded(), &ctx(&fonts)), Vec2::new(40.0, 60.0));
    }

    #[test]
    fn paints_shadow_before_background() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &fonts, 1.0, Vec2::new(800.0, 600.0), Vec2::ZERO, false, &[]);
        Container::new()
            .background(Color::WHITE)
            .shadow(Shadow::md())
            .paint(&mut p, Rect::new(0.0, 0.0, 100.0, 50.0));
        drop(p);
        let quads: Vec<_> = list.quads(Layer::Content).collect();
        assert_eq!(quads.len(), 2);
        assert!(quads[0].blur > 0.0);
        assert_eq!(quads[1].rect, Rect::new(0.0, 0.0, 100.0, 50.0));
    }
}
