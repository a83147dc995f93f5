use crate::coords::Vec2;
use crate::paint::Color;
use crate::text::FontId;

use super::{DrawCmd, Layer, QuadCmd, TextCmd};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one frame.
///
/// Cleared and refilled every frame; capacity is kept between frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        self.items.push(DrawItem { layer, cmd });
    }

    /// Records a quad. Empty or non-finite rects are dropped here so the
    /// renderers never see them.
    pub fn push_quad(&mut self, layer: Layer, quad: QuadCmd) {
        if quad.rect.is_empty() || !quad.rect.origin.is_finite() || !quad.rect.size.is_finite() {
            return;
        }
        self.push(layer, DrawCmd::Quad(quad));
    }

    pub fn push_text(
        &mut self,
        layer: Layer,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.push(layer, DrawCmd::Text(TextCmd { text, font, size, color, origin }));
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Quads on `layer`, in insertion order.
    pub fn quads(&self, layer: Layer) -> impl Iterator<Item = &QuadCmd> {
        self.items.iter().filter_map(move |item| match &item.cmd {
            DrawCmd::Quad(q) if item.layer == layer => Some(q),
            _ => None,
        })
    }

    /// Text runs on `layer`, in insertion order.
    pub fn texts(&self, layer: Layer) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(move |item| match &item.cmd {
            DrawCmd::Text(t) if item.layer == layer => Some(t),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;

    fn quad(x: f32) -> QuadCmd {
        QuadCmd::new(Rect::new(x, 0.0, 10.0, 10.0), Color::BLACK)
    }

    #[test]
    fn quads_are_filtered_by_layer_in_insertion_order() {
        let mut list = DrawList::new();
        list.push_quad(Layer::Overlay, quad(1.0));
        list.push_quad(Layer::Content, quad(2.0));
        list.push_quad(Layer::Overlay, quad(3.0));

        let xs: Vec<f32> = list.quads(Layer::Overlay).map(|q| q.rect.origin.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
        assert_eq!(list.quads(Layer::Modal).count(), 0);
    }

    #[test]
    fn empty_geometry_and_text_are_dropped() {
        let mut list = DrawList::new();
        list.push_quad(Layer::Content, QuadCmd::new(Rect::new(0.0, 0.0, 0.0, 5.0), Color::BLACK));
        list.push_text(Layer::Content, "", FontId(0), 14.0, Color::BLACK, Vec2::ZERO);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties_list() {
        let mut list = DrawList::new();
        list.push_quad(Layer::Background, quad(0.0));
        list.push_text(Layer::Content, "hi", FontId(0), 14.0, Color::BLACK, Vec2::ZERO);
        assert_eq!(list.len(), 2);
        assert_eq!(list.texts(Layer::Content).count(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
