/// Premultiplied RGBA color, components in `[0, 1]`.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb_u8(r, g, b, 255)
    }

    /// Straight-alpha 8-bit channels to premultiplied.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Straight-alpha float channels to premultiplied.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Same color with its opacity multiplied by `factor`.
    #[inline]
    pub fn with_opacity(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self { r: self.r * f, g: self.g * f, b: self.b * f, a: self.a * f }
    }

    /// Component-wise interpolation of the premultiplied values.
    #[inline]
    pub fn lerp(self, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color {
            r: mix(self.r, to.r),
            g: mix(self.g, to.g),
            b: mix(self.b, to.b),
            a: mix(self.a, to.a),
        }
    }

    /// Straight-alpha 8-bit channels (rounded). Fully transparent yields zeros.
    pub fn to_rgba_u8(self) -> [u8; 4] {
        if self.a <= 0.0 {
            return [0; 4];
        }
        let inv = 1.0 / self.a;
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r * inv), q(self.g * inv), q(self.b * inv), q(self.a)]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_srgb_u8_premultiplies() {
        let c = Color::from_srgb_u8(255, 255, 255, 51);
        assert!((c.a - 0.2).abs() < 1e-6);
        assert!((c.r - 0.2).abs() < 1e-6);
    }

    #[test]
    fn rgba_u8_survives_premultiplication() {
        let c = Color::from_srgb_u8(0xab, 0xcd, 0xef, 0x80);
        assert_eq!(c.to_rgba_u8(), [0xab, 0xcd, 0xef, 0x80]);
    }

    #[test]
    fn lerp_clamps_t() {
        let c = Color::BLACK.lerp(Color::WHITE, 2.0);
        assert_eq!(c, Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.5).r, 0.5);
    }

    #[test]
    fn with_opacity_scales_every_channel() {
        let c = Color::WHITE.with_opacity(0.3);
        assert_eq!(c.to_array(), [0.3, 0.3, 0.3, 0.3]);
    }
}
