use super::Rect;

/// Per-corner radii in logical pixels, in CSS order
/// (top-left, top-right, bottom-right, bottom-left).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Clamps every radius into `[0, min(w, h) / 2]` so a huge radius
    /// produces a pill or circle instead of overlapping arcs.
    pub fn clamped_to(self, rect: Rect) -> Self {
        let limit = (rect.width().min(rect.height()) * 0.5).max(0.0);
        let c = |r: f32| r.clamp(0.0, limit);
        Self {
            top_left: c(self.top_left),
            top_right: c(self.top_right),
            bottom_right: c(self.bottom_right),
            bottom_left: c(self.bottom_left),
        }
    }

    #[inline]
    pub fn scaled(self, f: f32) -> Self {
        Self {
            top_left: self.top_left * f,
            top_right: self.top_right * f,
            bottom_right: self.bottom_right * f,
            bottom_left: self.bottom_left * f,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_turns_large_radius_into_pill() {
        let radii = CornerRadii::all(999.0).clamped_to(Rect::new(0.0, 0.0, 120.0, 40.0));
        assert_eq!(radii, CornerRadii::all(20.0));
    }

    #[test]
    fn clamp_zeroes_negative_radii() {
        let radii = CornerRadii { top_left: -3.0, ..CornerRadii::all(4.0) }
            .clamped_to(Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(radii.to_array(), [0.0, 4.0, 4.0, 4.0]);
    }
}
