use std::time::Duration;

use log::trace;
use studio_engine::coords::Rect;
use studio_engine::paint::{Color, LinearGradient, Paint};

use crate::color;
use crate::fade::Fade;
use crate::gradient::GradientDirection;
use crate::state::{Background, ColorStudio};

/// Background with every color decoded.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Shown {
    Solid,
    Linear { direction: GradientDirection, stops: [Color; 2] },
}

/// Frame-to-frame presentation of the window surface.
///
/// Solid colors and the foreground color fade to new values; gradients
/// switch at once. A background that does not decode is skipped and the
/// last one that did stays on screen.
#[derive(Debug, Clone)]
pub struct Backdrop {
    solid: Fade,
    text: Fade,
    shown: Shown,
}

impl Backdrop {
    pub fn new(studio: &ColorStudio, fade: Duration) -> Self {
        let solid = color::to_color(studio.color()).unwrap_or(Color::BLACK);
        let mut backdrop = Self {
            solid: Fade::new(solid, fade),
            text: Fade::new(studio.text_color(), fade),
            shown: Shown::Solid,
        };
        backdrop.retarget(studio);
        backdrop
    }

    /// Picks up state changes and advances the fades by `dt` seconds.
    pub fn update(&mut self, studio: &ColorStudio, dt: f32) {
        self.retarget(studio);
        self.solid.tick(dt);
        self.text.tick(dt);
    }

    fn retarget(&mut self, studio: &ColorStudio) {
        self.text.set_target(studio.text_color());
        match studio.background() {
            Background::Solid(value) => match color::to_color(&value) {
                Some(c) => {
                    self.solid.set_target(c);
                    self.shown = Shown::Solid;
                }
                None => trace!("keeping previous background, {value:?} does not decode"),
            },
            Background::Linear { direction, stops } => {
                match (color::to_color(&stops[0]), color::to_color(&stops[1])) {
                    (Some(a), Some(b)) => self.shown = Shown::Linear { direction, stops: [a, b] },
                    _ => trace!("keeping previous background, gradient stops {stops:?} do not decode"),
                }
            }
        }
    }

    /// Paint for the surface covering `rect`.
    pub fn paint(&self, rect: Rect) -> Paint {
        match self.shown {
            Shown::Solid => Paint::Solid(self.solid.value()),
            Shown::Linear { direction, stops } => {
                let (start, end) = direction.line(rect);
                Paint::LinearGradient(LinearGradient::even(start, end, &stops))
            }
        }
    }

    pub fn text_color(&self) -> Color {
        self.text.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_millis(1000);
    const SCREEN: Rect = Rect {
        origin: studio_engine::coords::Vec2 { x: 0.0, y: 0.0 },
        size: studio_engine::coords::Vec2 { x: 800.0, y: 600.0 },
    };

    fn solid(b: &Backdrop) -> Color {
        match b.paint(SCREEN) {
            Paint::Solid(c) => c,
            other => panic!("expected solid, got {other:?}"),
        }
    }

    #[test]
    fn starts_on_current_color_without_fading() {
        let mut s = ColorStudio::new();
        s.set_color("#ffffff");
        let b = Backdrop::new(&s, SECOND);
        assert!(!b.solid.is_running() && !b.text.is_running());
        assert_eq!(solid(&b), Color::WHITE);
    }

    #[test]
    fn solid_change_fades_over_a_second() {
        let mut s = ColorStudio::new();
        let mut b = Backdrop::new(&s, SECOND);
        s.set_color("#ffffff");
        b.update(&s, 0.5);
        let mid = solid(&b);
        assert!(mid.r > 0.0 && mid.r < 1.0);
        b.update(&s, 0.5);
        assert_eq!(solid(&b), Color::WHITE);
    }

    #[test]
    fn undecodable_color_keeps_previous() {
        let mut s = ColorStudio::new();
        s.set_color("#ff0000");
        let mut b = Backdrop::new(&s, SECOND);
        s.set_color("#abcd");
        b.update(&s, 2.0);
        assert_eq!(solid(&b), Color::from_rgb_u8(255, 0, 0));
    }

    #[test]
    fn gradient_switches_immediately() {
        let mut s = ColorStudio::new();
        let mut b = Backdrop::new(&s, SECOND);
        s.toggle_gradient();
        b.update(&s, 0.0);
        match b.paint(SCREEN) {
            Paint::LinearGradient(g) => {
                assert_eq!(g.start_color(), Color::from_rgb_u8(255, 0, 0));
                assert_eq!(g.end_color(), Color::from_rgb_u8(0, 255, 0));
            }
            other => panic!("expected gradient, got {other:?}"),
        }
    }

    #[test]
    fn bad_gradient_stop_keeps_previous_background() {
        let mut s = ColorStudio::new();
        let mut b = Backdrop::new(&s, SECOND);
        s.set_gradient_stop(1, "green");
        s.toggle_gradient();
        b.update(&s, 2.0);
        assert_eq!(solid(&b), Color::BLACK);
    }

    #[test]
    fn text_color_fades_with_dark_mode() {
        let mut s = ColorStudio::new();
        let mut b = Backdrop::new(&s, SECOND);
        s.toggle_dark_mode();
        b.update(&s, 0.1);
        assert!(b.text.is_running());
        b.update(&s, 1.0);
        assert_eq!(b.text_color(), Color::WHITE);
    }
}
