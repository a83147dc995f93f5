use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::{Color, Paint};
use crate::text::FontId;

/// Stroke drawn inside the edge of a quad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Rounded rectangle filled with a paint.
///
/// Covers plain rects (zero radii), pills and circles (radii clamped to half
/// the short side). A positive `blur` feathers the edge over that many
/// logical pixels on each side, which is how drop shadows are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
    pub blur: f32,
}

impl QuadCmd {
    pub fn new(rect: Rect, paint: impl Into<Paint>) -> Self {
        Self {
            rect,
            radii: CornerRadii::zero(),
            paint: paint.into(),
            border: None,
            blur: 0.0,
        }
    }

    pub fn radius(mut self, r: f32) -> Self {
        self.radii = CornerRadii::all(r);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }

    pub fn blur(mut self, blur: f32) -> Self {
        self.blur = blur.max(0.0);
        self
    }
}

/// Single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the line box in logical pixels.
    pub origin: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Quad(QuadCmd),
    Text(TextCmd),
}
