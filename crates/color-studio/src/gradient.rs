use std::fmt;

use studio_engine::coords::{Rect, Vec2};

/// Axis of the linear gradient, as a CSS `to <side-or-corner>` keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    #[default]
    ToRight,
    ToLeft,
    ToBottom,
    ToTop,
    ToBottomRight,
    ToTopLeft,
}

impl GradientDirection {
    /// In the order the direction picker lists them.
    pub const ALL: [GradientDirection; 6] = [
        GradientDirection::ToRight,
        GradientDirection::ToLeft,
        GradientDirection::ToBottom,
        GradientDirection::ToTop,
        GradientDirection::ToBottomRight,
        GradientDirection::ToTopLeft,
    ];

    pub fn as_css(self) -> &'static str {
        match self {
            GradientDirection::ToRight => "to right",
            GradientDirection::ToLeft => "to left",
            GradientDirection::ToBottom => "to bottom",
            GradientDirection::ToTop => "to top",
            GradientDirection::ToBottomRight => "to bottom right",
            GradientDirection::ToTopLeft => "to top left",
        }
    }

    /// Inverse of [`as_css`](Self::as_css); `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_css() == s)
    }

    /// Title-cased name for the picker.
    pub fn label(self) -> &'static str {
        match self {
            GradientDirection::ToRight => "To Right",
            GradientDirection::ToLeft => "To Left",
            GradientDirection::ToBottom => "To Bottom",
            GradientDirection::ToTop => "To Top",
            GradientDirection::ToBottomRight => "To Bottom Right",
            GradientDirection::ToTopLeft => "To Top Left",
        }
    }

    /// Start and end of the gradient line across `rect`.
    ///
    /// Side keywords run edge to edge. Corner keywords point into the named
    /// corner with the line perpendicular to the diagonal through the two
    /// neighbouring corners, so those corners share the midpoint color.
    pub fn line(self, rect: Rect) -> (Vec2, Vec2) {
        let (w, h) = (rect.width(), rect.height());
        let raw = match self {
            GradientDirection::ToRight => Vec2::new(1.0, 0.0),
            GradientDirection::ToLeft => Vec2::new(-1.0, 0.0),
            GradientDirection::ToBottom => Vec2::new(0.0, 1.0),
            GradientDirection::ToTop => Vec2::new(0.0, -1.0),
            GradientDirection::ToBottomRight => Vec2::new(h, w),
            GradientDirection::ToTopLeft => Vec2::new(-h, -w),
        };
        let len = raw.length();
        let dir = if len > 0.0 { raw * (1.0 / len) } else { Vec2::new(1.0, 0.0) };

        let half = (w * dir.x.abs() + h * dir.y.abs()) * 0.5;
        let c = rect.center();
        (c - dir * half, c + dir * half)
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
