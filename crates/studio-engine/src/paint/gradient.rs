use crate::coords::Vec2;

use super::Color;

/// One gradient stop; `t` is the position along the axis in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in logical pixel space.
///
/// `start` and `end` are absolute positions; the color is padded beyond
/// either end. The quad renderer supports two stops, which is all a CSS
/// `linear-gradient(dir, a, b)` needs; additional stops are sampled on the
/// CPU by [`LinearGradient::color_at`] only.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Evenly spaced stops from `colors`.
    pub fn even(start: Vec2, end: Vec2, colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, c)| ColorStop::new(i as f32 / last, *c))
            .collect();
        Self { start, end, stops }
    }

    pub fn is_valid(&self) -> bool {
        self.stops.len() >= 2
            && self.start.is_finite()
            && self.end.is_finite()
            && self.start != self.end
            && self.stops.iter().all(|s| s.t.is_finite())
    }

    pub fn start_color(&self) -> Color {
        self.stops.first().map(|s| s.color).unwrap_or_default()
    }

    pub fn end_color(&self) -> Color {
        self.stops.last().map(|s| s.color).unwrap_or_default()
    }

    /// Color at `p`, projecting onto the gradient axis with pad spread.
    pub fn color_at(&self, p: Vec2) -> Color {
        let axis = self.end - self.start;
        let len2 = axis.dot(axis);
        if len2 <= 0.0 || self.stops.is_empty() {
            return self.start_color();
        }
        let t = ((p - self.start).dot(axis) / len2).clamp(0.0, 1.0);

        let mut prev = self.stops[0];
        if t <= prev.t {
            return prev.color;
        }
        for stop in &self.stops[1..] {
            if t <= stop.t {
                let span = stop.t - prev.t;
                let local = if span > 0.0 { (t - prev.t) / span } else { 1.0 };
                return prev.color.lerp(stop.color, local);
            }
            prev = *stop;
        }
        prev.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_to_green() -> LinearGradient {
        LinearGradient::even(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            &[Color::from_rgb_u8(255, 0, 0), Color::from_rgb_u8(0, 255, 0)],
        )
    }

    #[test]
    fn even_spaces_stops() {
        let g = red_to_green();
        assert_eq!(g.stops[0].t, 0.0);
        assert_eq!(g.stops[1].t, 1.0);
        assert!(g.is_valid());
    }

    #[test]
    fn color_at_pads_outside_axis() {
        let g = red_to_green();
        assert_eq!(g.color_at(Vec2::new(-50.0, 3.0)), g.start_color());
        assert_eq!(g.color_at(Vec2::new(500.0, 3.0)), g.end_color());
    }

    #[test]
    fn color_at_midpoint_blends() {
        let c = red_to_green().color_at(Vec2::new(50.0, 80.0));
        assert_eq!(c.to_rgba_u8(), [128, 128, 0, 255]);
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let mut g = red_to_green();
        g.end = g.start;
        assert!(!g.is_valid());
    }
}
