use studio_engine::coords::{Rect, Vec2};
use studio_engine::paint::{Color, Paint};
use studio_engine::scene::Border;
use studio_engine::window::CursorIcon;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Fixed-size color chip, square or round, optionally clickable.
pub struct Swatch {
    paint: Paint,
    size: f32,
    radius: f32,
    border: Option<Border>,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Swatch {
    pub fn new(paint: impl Into<Paint>, size: f32) -> Self {
        Self { paint: paint.into(), size, radius: 4.0, border: None, on_click: None }
    }

    /// Fully rounded chip.
    pub fn circle(mut self) -> Self {
        self.radius = self.size * 0.5;
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.radius = r;
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }
}

impl Widget for Swatch {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::splat(self.size))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let chip = Rect::from_center_size(rect.center(), Vec2::splat(self.size.min(rect.width()).min(rect.height())));
        if self.on_click.is_some() && painter.is_hovered(chip) {
            painter.set_cursor(CursorIcon::Pointer);
        }
        painter.fill_rounded_rect(chip, self.radius, self.paint.clone(), self.border);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        match (event, &mut self.on_click) {
            (UiEvent::Click { pos }, Some(f)) if rect.contains(*pos) => {
                f();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use studio_engine::text::FontSystem;

    use super::*;
    use crate::widgets::test_support::ctx;

    #[test]
    fn circle_uses_half_size_radius() {
        let s = Swatch::new(Color::BLACK, 40.0).circle();
        assert_eq!(s.radius, 20.0);
    }

    #[test]
    fn inert_swatch_ignores_clicks() {
        let fonts = FontSystem::new();
        let mut s = Swatch::new(Color::BLACK, 40.0);
        let click = UiEvent::Click { pos: Vec2::new(20.0, 20.0) };
        assert!(!s.on_event(&click, Rect::new(0.0, 0.0, 40.0, 40.0), &ctx(&fonts)).is_consumed());
    }

    #[test]
    fn click_selects() {
        let fonts = FontSystem::new();
        let hit = Rc::new(Cell::new(false));
        let h = hit.clone();
        let mut s = Swatch::new(Color::WHITE, 40.0).circle().on_click(move || h.set(true));
        let click = UiEvent::Click { pos: Vec2::new(20.0, 20.0) };
        assert!(s.on_event(&click, Rect::new(0.0, 0.0, 40.0, 40.0), &ctx(&fonts)).is_consumed());
        assert!(hit.get());
    }
}
