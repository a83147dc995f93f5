use std::time::Duration;

use studio_engine::paint::Color;

/// Color that eases toward its latest target over a fixed duration.
///
/// Retargeting mid-fade starts the new fade from the color currently shown,
/// like a CSS transition that is interrupted.
#[derive(Debug, Clone)]
pub struct Fade {
    from: Color,
    to: Color,
    elapsed: f32,
    duration: f32,
}

impl Fade {
    pub fn new(initial: Color, duration: Duration) -> Self {
        let duration = duration.as_secs_f32();
        Self { from: initial, to: initial, elapsed: duration, duration }
    }

    pub fn target(&self) -> Color {
        self.to
    }

    pub fn is_running(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Starts fading toward `color` unless it is already the target.
    pub fn set_target(&mut self, color: Color) {
        if color == self.to {
            return;
        }
        self.from = self.value();
        self.to = color;
        self.elapsed = 0.0;
    }

    /// Advances by `dt` seconds and returns the color to show.
    pub fn tick(&mut self, dt: f32) -> Color {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> Color {
        if self.elapsed >= self.duration {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from.lerp(self.to, ease_in_out(t))
    }
}

/// `cubic-bezier(0.4, 0, 0.2, 1)`, the default easing of utility-class
/// transitions.
fn ease_in_out(t: f32) -> f32 {
    const X1: f32 = 0.4;
    const X2: f32 = 0.2;
    const Y1: f32 = 0.0;
    const Y2: f32 = 1.0;

    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let bezier = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };

    // x(s) is monotonic for these control points; bisect for s with x(s) = t.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        if bezier(X1, X2, mid) < t { lo = mid } else { hi = mid }
    }
    bezier(Y1, Y2, (lo + hi) * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_millis(1000);

    #[test]
    fn starts_settled() {
        let f = Fade::new(Color::BLACK, SECOND);
        assert!(!f.is_running());
        assert_eq!(f.value(), Color::BLACK);
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut f = Fade::new(Color::BLACK, SECOND);
        f.set_target(Color::WHITE);
        assert!(f.is_running());
        let mid = f.tick(0.5);
        assert!(mid.r > 0.0 && mid.r < 1.0);
        assert_eq!(f.tick(0.6), Color::WHITE);
        assert!(!f.is_running());
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut f = Fade::new(Color::BLACK, SECOND);
        f.set_target(Color::WHITE);
        f.tick(0.25);
        let before = f.value();
        f.set_target(Color::WHITE);
        assert_eq!(f.value(), before);
    }

    #[test]
    fn retarget_starts_from_shown_color() {
        let mut f = Fade::new(Color::BLACK, SECOND);
        f.set_target(Color::WHITE);
        let shown = f.tick(0.5);
        f.set_target(Color::BLACK);
        assert_eq!(f.value(), shown);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut f = Fade::new(Color::BLACK, Duration::ZERO);
        f.set_target(Color::WHITE);
        assert_eq!(f.value(), Color::WHITE);
    }

    #[test]
    fn easing_endpoints_and_monotonic() {
        assert!(ease_in_out(0.0).abs() < 1e-4);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-4);
        let mut prev = 0.0;
        for i in 1..=20 {
            let y = ease_in_out(i as f32 / 20.0);
            assert!(y >= prev);
            prev = y;
        }
    }
}
