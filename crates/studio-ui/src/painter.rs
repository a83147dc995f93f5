use studio_engine::coords::{CornerRadii, Rect, Vec2};
use studio_engine::paint::{Color, Paint};
use studio_engine::scene::{Border, DrawList, Layer, QuadCmd};
use studio_engine::text::{FontId, FontSystem};
use studio_engine::window::CursorIcon;

use crate::constraints::LayoutCtx;

// ── Shadow ────────────────────────────────────────────────────────────────

/// Drop shadow behind a rounded rect, in CSS box-shadow terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset: Vec2,
    pub blur: f32,
    /// Grows (positive) or shrinks (negative) the shadow shape.
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    /// `0 4px 6px -1px` at 10% black.
    pub fn md() -> Self {
        Self { offset: Vec2::new(0.0, 4.0), blur: 6.0, spread: -1.0, color: Color::BLACK.with_opacity(0.1) }
    }

    /// `0 10px 15px -3px` at 10% black.
    pub fn lg() -> Self {
        Self { offset: Vec2::new(0.0, 10.0), blur: 15.0, spread: -3.0, color: Color::BLACK.with_opacity(0.1) }
    }
}

// ── Painter ───────────────────────────────────────────────────────────────

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine `DrawList` and carries the frame's pointer state so
/// widgets can express hover and press visuals while painting.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a FontSystem,
    scale: f32,
    viewport: Vec2,
    layer: Layer,
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// True while the primary button is held.
    pub mouse_pressed: bool,
    /// Areas covered by overlays on the previous frame.
    occluders: &'a [(Layer, Rect)],
    recorded_occluders: Vec<(Layer, Rect)>,
    cursor: CursorIcon,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        fonts: &'a FontSystem,
        scale: f32,
        viewport: Vec2,
        mouse_pos: Vec2,
        mouse_pressed: bool,
        occluders: &'a [(Layer, Rect)],
    ) -> Self {
        Self {
            draw_list,
            fonts,
            scale,
            viewport,
            layer: Layer::Content,
            mouse_pos,
            mouse_pressed,
            occluders,
            recorded_occluders: Vec::new(),
            cursor: CursorIcon::Default,
        }
    }

    // ── input queries ─────────────────────────────────────────────────────

    /// True if the cursor is over `rect` and no overlay above the current
    /// layer covers that spot.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
            && !self
                .occluders
                .iter()
                .any(|(layer, r)| *layer > self.layer && r.contains(self.mouse_pos))
    }

    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && self.is_hovered(rect)
    }

    /// Requests a cursor shape for this frame; the last request wins.
    #[inline]
    pub fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    /// Marks `rect` as covering everything below the current layer, so
    /// widgets underneath stop showing hover on the next frame.
    #[inline]
    pub fn occlude(&mut self, rect: Rect) {
        self.recorded_occluders.push((self.layer, rect));
    }

    pub(crate) fn finish(self) -> (CursorIcon, Vec<(Layer, Rect)>) {
        (self.cursor, self.recorded_occluders)
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx { fonts: self.fonts, scale: self.scale, viewport: self.viewport }
    }

    /// Measures single-line text the way the renderer will draw it.
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size, self.scale)
    }

    #[inline]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Paints `f` on `layer`, then restores the current layer.
    pub fn with_layer<R>(&mut self, layer: Layer, f: impl FnOnce(&mut Self) -> R) -> R {
        let prev = std::mem::replace(&mut self.layer, layer);
        let out = f(self);
        self.layer = prev;
        out
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_quad(&mut self, quad: QuadCmd) {
        self.draw_list.push_quad(self.layer, quad);
    }

    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        self.fill_quad(QuadCmd::new(rect, paint));
    }

    /// Rounded rectangle; `radius` is clamped, so a huge value gives a pill.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        self.fill_quad(QuadCmd {
            rect,
            radii: CornerRadii::all(radius),
            paint: paint.into(),
            border,
            blur: 0.0,
        });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>, border: Option<Border>) {
        let rect = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
        self.fill_rounded_rect(rect, radius, paint, border);
    }

    /// Drop shadow for a rounded rect at `rect`.
    pub fn shadow(&mut self, rect: Rect, radius: f32, shadow: Shadow) {
        let shape = rect.translate(shadow.offset).expand(shadow.spread);
        self.fill_quad(
            QuadCmd::new(shape, shadow.color)
                .radius(radius + shadow.spread.max(0.0))
                .blur(shadow.blur * 0.5),
        );
    }

    /// Single line of text with its line box's top-left at `origin`.
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        self.draw_list.push_text(self.layer, text, font, size, color, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painter<'a>(list: &'a mut DrawList, fonts: &'a FontSystem, occ: &'a [(Layer, Rect)]) -> Painter<'a> {
        Painter::new(list, fonts, 1.0, Vec2::new(800.0, 600.0), Vec2::new(50.0, 50.0), false, occ)
    }

    #[test]
    fn with_layer_restores_previous_layer() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut p = painter(&mut list, &fonts, &[]);
        p.with_layer(Layer::Overlay, |p| {
            assert_eq!(p.layer(), Layer::Overlay);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        });
        assert_eq!(p.layer(), Layer::Content);
        drop(p);
        assert_eq!(list.quads(Layer::Overlay).count(), 1);
    }

    #[test]
    fn overlay_above_blocks_hover_below() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let occ = [(Layer::Overlay, Rect::new(0.0, 0.0, 100.0, 100.0))];
        let mut p = painter(&mut list, &fonts, &occ);
        let target = Rect::new(40.0, 40.0, 20.0, 20.0);
        assert!(!p.is_hovered(target));
        p.with_layer(Layer::Overlay, |p| assert!(p.is_hovered(target)));
    }

    #[test]
    fn occluders_are_recorded_with_their_layer() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut p = painter(&mut list, &fonts, &[]);
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        p.with_layer(Layer::Modal, |p| p.occlude(r));
        p.set_cursor(CursorIcon::Pointer);
        let (cursor, occ) = p.finish();
        assert_eq!(cursor, CursorIcon::Pointer);
        assert_eq!(occ, vec![(Layer::Modal, r)]);
    }

    #[test]
    fn shadow_is_offset_and_blurred() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut p = painter(&mut list, &fonts, &[]);
        p.shadow(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, Shadow::lg());
        drop(p);
        let q = list.quads(Layer::Content).next().unwrap();
        assert_eq!(q.rect, Rect::new(3.0, 13.0, 94.0, 34.0));
        assert_eq!(q.blur, 7.5);
    }
}
