pub mod alert;
pub mod button;
pub mod color_input;
pub mod container;
pub mod popover;
pub mod select;
pub mod slider;
pub mod stack;
pub mod swatch;
pub mod text;
pub mod wrap;

#[cfg(test)]
pub(crate) mod test_support {
    use studio_engine::coords::{Rect, Vec2};
    use studio_engine::text::FontSystem;

    use crate::constraints::{Constraints, LayoutCtx};
    use crate::painter::Painter;
    use crate::widget::Widget;

    pub fn ctx(fonts: &FontSystem) -> LayoutCtx<'_> {
        LayoutCtx { fonts, scale: 1.0, viewport: Vec2::new(800.0, 600.0) }
    }

    /// Widget with a fixed natural size that paints nothing.
    pub struct Fixed(pub Vec2);

    impl Fixed {
        pub fn new(w: f32, h: f32) -> Self {
            Self(Vec2::new(w, h))
        }
    }

    impl Widget for Fixed {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(self.0)
        }

        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
    }
}
