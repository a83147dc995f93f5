use studio_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Horizontal flow that breaks onto new lines when out of width.
///
/// Each line is centered horizontally and items are centered vertically
/// within their line.
pub struct Wrap {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
}

struct Line {
    /// Index range into the child list.
    start: usize,
    end: usize,
    width: f32,
    height: f32,
}

impl Wrap {
    pub fn new() -> Self {
        Self { children: Vec::new(), spacing: 0.0, padding: Edges::default() }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Gap between items and between lines.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    fn sizes(&self, inner: Constraints, ctx: &LayoutCtx) -> Vec<Vec2> {
        self.children.iter().map(|c| c.measure(inner, ctx)).collect()
    }

    fn break_lines(&self, sizes: &[Vec2], max_width: f32) -> Vec<Line> {
        let mut lines: Vec<Line> = Vec::new();
        for (i, size) in sizes.iter().enumerate() {
            match lines.last_mut() {
                Some(line) if line.width + self.spacing + size.x <= max_width => {
                    line.end = i + 1;
                    line.width += self.spacing + size.x;
                    line.height = line.height.max(size.y);
                }
                _ => lines.push(Line { start: i, end: i + 1, width: size.x, height: size.y }),
            }
        }
        lines
    }

    fn content_size(&self, lines: &[Line]) -> Vec2 {
        let width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
        let height = lines.iter().map(|l| l.height).sum::<f32>()
            + self.spacing * lines.len().saturating_sub(1) as f32;
        Vec2::new(width, height)
    }

    fn child_rects(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let content = inset_rect(rect, self.padding);
        let sizes = self.sizes(Constraints::loose(content.size), ctx);
        let lines = self.break_lines(&sizes, content.width());

        let mut rects = Vec::with_capacity(sizes.len());
        let mut y = content.origin.y;
        for line in &lines {
            let mut x = content.origin.x + (content.width() - line.width) * 0.5;
            for size in &sizes[line.start..line.end] {
                let dy = (line.height - size.y) * 0.5;
                rects.push(Rect::from_origin_size(Vec2::new(x, y + dy), *size));
                x += size.x + self.spacing;
            }
            y += line.height + self.spacing;
        }
        rects
    }

    fn route(
        &mut self,
        rect: Rect,
        ctx: &LayoutCtx,
        mut f: impl FnMut(&mut Element, Rect) -> EventResult,
    ) -> EventResult {
        let rects = self.child_rects(rect, ctx);
        for (child, r) in self.children.iter_mut().zip(rects) {
            if f(child, r).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

impl Default for Wrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Wrap {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner = constraints.shrink(self.padding);
        let sizes = self.sizes(inner, ctx);
        let content = self.content_size(&self.break_lines(&sizes, inner.max.x));
        constraints.constrain(Vec2::new(content.x + self.padding.h(), content.y + self.padding.v()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        for (child, r) in self.children.iter().zip(self.child_rects(rect, &ctx)) {
            child.paint(painter, r);
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

    fn three() -> Wrap {
        Wrap::new()
            .spacing(10.0)
            .child(Fixed::new(50.0, 20.0))
            .child(Fixed::new(50.0, 40.0))
            .child(Fixed::new(50.0, 20.0))
    }

    #[test]
    fn fits_on_one_line_when_wide_enough() {
        let fonts = FontSystem::new();
        let size = three().measure(Constraints::loose(Vec2::new(500.0, 500.0)), &ctx(&fonts));
        assert_eq!(size, Vec2::new(170.0, 40.0));
    }

    #[test]
    fn breaks_when_narrow() {
        let fonts = FontSystem::new();
        let size = three().measure(Constraints::loose(Vec2::new(120.0, 500.0)), &ctx(&fonts));
        // [50 40-high 50] then [50]
        assert_eq!(size, Vec2::new(110.0, 40.0 + 10.0 + 20.0));
    }

    #[test]
    fn lines_are_centered() {
        let fonts = FontSystem::new();
        let rects = three().child_rects(Rect::new(0.0, 0.0, 120.0, 100.0), &ctx(&fonts));
        assert_eq!(rects[0], Rect::new(5.0, 10.0, 50.0, 20.0));
        assert_eq!(rects[1], Rect::new(65.0, 0.0, 50.0, 40.0));
        assert_eq!(rects[2], Rect::new(35.0, 50.0, 50.0, 20.0));
    }
}
