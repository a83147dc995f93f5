use studio_engine::coords::{Rect, Vec2};
use studio_engine::paint::Color;
use studio_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Single line of text.
///
/// When given more room than it measured, the line is centered inside the
/// rect, which is what every label in a button or pill wants.
pub struct Text {
    pub text: String,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self { text: text.into(), font, size, color }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(ctx.fonts.measure_text(&self.text, self.font, self.size, ctx.scale))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let size = painter.measure_text(&self.text, self.font, self.size);
        let origin = rect.center() - size * 0.5;
        painter.text(self.text.as_str(), self.font, self.size, self.color, origin);
    }
}
