use super::Vec2;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self { origin: center - size * 0.5, size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Grows (positive `d`) or shrinks (negative `d`) every side by `d`.
    /// Size never goes below zero.
    #[inline]
    pub fn expand(self, d: f32) -> Rect {
        let w = (self.size.x + 2.0 * d).max(0.0);
        let h = (self.size.y + 2.0 * d).max(0.0);
        Rect::from_center_size(self.center(), Vec2::new(w, h))
    }

    /// Scales the rectangle about its own center.
    #[inline]
    pub fn scale_about_center(self, factor: f32) -> Rect {
        Rect::from_center_size(self.center(), self.size * factor)
    }

    #[inline]
    pub fn translate(self, offset: Vec2) -> Rect {
        Rect { origin: self.origin + offset, size: self.size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(9.9, 9.9)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn expand_keeps_center() {
        let rect = r(10.0, 10.0, 20.0, 10.0);
        let grown = rect.expand(5.0);
        assert_eq!(grown, r(5.0, 5.0, 30.0, 20.0));
        assert_eq!(grown.center(), rect.center());
    }

    #[test]
    fn expand_never_goes_negative() {
        let shrunk = r(0.0, 0.0, 4.0, 4.0).expand(-10.0);
        assert_eq!(shrunk.size, Vec2::ZERO);
        assert_eq!(shrunk.center(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn scale_about_center_grows_symmetrically() {
        let rect = r(0.0, 0.0, 100.0, 40.0).scale_about_center(1.05);
        assert!((rect.width() - 105.0).abs() < 1e-4);
        assert!((rect.origin.x + 2.5).abs() < 1e-4);
        assert!((rect.origin.y + 1.0).abs() < 1e-4);
    }

    #[test]
    fn empty_when_any_side_is_zero() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
