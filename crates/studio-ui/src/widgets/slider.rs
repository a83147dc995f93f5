use studio_engine::coords::{Rect, Vec2};
use studio_engine::paint::{Color, Paint};
use studio_engine::scene::Border;
use studio_engine::window::CursorIcon;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// A horizontal slider for selecting a value in a range.
///
/// Pressing anywhere on the track jumps to that position; dragging keeps
/// updating until release, even outside the track.
///
/// ```rust,ignore
/// Slider::new()
///     .range(0.0, 255.0)
///     .step(1.0)
///     .value(128.0)
///     .fill(LinearGradient::even(p0, p1, &[black, red]))
///     .on_change(|v| println!("red: {v}"))
/// ```
pub struct Slider {
    value: f32,
    min: f32,
    max: f32,
    step: f32,
    track_height: f32,
    thumb_radius: f32,
    track: Paint,
    thumb_color: Color,
    thumb_border: Color,
    on_change: Option<Box<dyn FnMut(f32)>>,
}

impl Slider {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 1.0,
            step: 0.0,
            track_height: 6.0,
            thumb_radius: 8.0,
            track: Paint::Solid(Color::from_rgb_u8(0xd1, 0xd5, 0xdb)),
            thumb_color: Color::WHITE,
            thumb_border: Color::from_rgb_u8(0x6b, 0x72, 0x80),
            on_change: None,
        }
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self.value = self.value.clamp(min.min(max), max.max(min));
        self
    }

    pub fn value(mut self, v: f32) -> Self {
        self.value = v.clamp(self.min.min(self.max), self.max.max(self.min));
        self
    }

    /// Snaps values to multiples of `step` above `min`; `0` disables snapping.
    pub fn step(mut self, step: f32) -> Self {
        self.step = step.max(0.0);
        self
    }

    pub fn thumb_radius(mut self, r: f32) -> Self { self.thumb_radius = r; self }
    pub fn track_height(mut self, h: f32) -> Self { self.track_height = h; self }

    /// Paint for the whole track, e.g. a gradient showing the channel.
    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.track = paint.into();
        self
    }

    /// Called whenever the value changes while pressing or dragging.
    pub fn on_change(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn normalized(&self) -> f32 {
        if (self.max - self.min).abs() < f32::EPSILON {
            0.0
        } else {
            ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        }
    }

    /// Value under `x` for a slider laid out in `rect`.
    pub fn value_at(&self, rect: Rect, x: f32) -> f32 {
        let track = self.track_rect(rect);
        let t = if track.width() > 0.0 { ((x - track.origin.x) / track.width()).clamp(0.0, 1.0) } else { 0.0 };
        let raw = self.min + t * (self.max - self.min);
        if self.step > 0.0 {
            (self.min + ((raw - self.min) / self.step).round() * self.step).clamp(self.min, self.max)
        } else {
            raw
        }
    }

    /// Track inset by the thumb radius so the thumb never leaves the rect.
    fn track_rect(&self, rect: Rect) -> Rect {
        let cy = rect.center().y;
        Rect::new(
            rect.origin.x + self.thumb_radius,
            cy - self.track_height * 0.5,
            (rect.width() - self.thumb_radius * 2.0).max(0.0),
            self.track_height,
        )
    }

    fn set_from(&mut self, rect: Rect, x: f32) {
        let v = self.value_at(rect, x);
        if v != self.value {
            self.value = v;
            if let Some(f) = &mut self.on_change {
                f(v);
            }
        }
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Slider {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 160.0 };
        constraints.constrain(Vec2::new(w, self.thumb_radius * 2.0))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let track = self.track_rect(rect);
        painter.fill_rounded_rect(track, self.track_height * 0.5, self.track.clone(), None);

        let hovered = painter.is_hovered(rect);
        if hovered {
            painter.set_cursor(CursorIcon::Pointer);
        }
        let cx = track.origin.x + self.normalized() * track.width();
        let r = if hovered { self.thumb_radius + 1.0 } else { self.thumb_radius };
        painter.fill_circle(
            Vec2::new(cx, track.center().y),
            r,
            self.thumb_color,
            Some(Border { width: 2.0, color: self.thumb_border }),
        );
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        match event {
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start } if rect.contains(*start) => {
                self.set_from(rect, pos.x);
                EventResult::Consumed
            }
            UiEvent::Click { pos } if rect.contains(*pos) => {
                self.set_from(rect, pos.x);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use studio_engine::text::FontSystem;

    use super::*;
    use crate::widgets::test_support::ctx;

    fn channel() -> Slider {
        Slider::new().range(0.0, 255.0).step(1.0).thumb_radius(8.0)
    }

    #[test]
    fn value_at_maps_track_ends() {
        let s = channel();
        let rect = Rect::new(0.0, 0.0, 216.0, 16.0);
        assert_eq!(s.value_at(rect, 8.0), 0.0);
        assert_eq!(s.value_at(rect, 208.0), 255.0);
        assert_eq!(s.value_at(rect, -50.0), 0.0);
        assert_eq!(s.value_at(rect, 108.0), 128.0);
    }

    #[test]
    fn drag_started_inside_reports_changes() {
        let fonts = FontSystem::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s2 = seen.clone();
        let mut s = channel().on_change(move |v| s2.borrow_mut().push(v));
        let rect = Rect::new(0.0, 0.0, 216.0, 16.0);
        let start = Vec2::new(8.0, 8.0);

        let drag = UiEvent::Drag { pos: Vec2::new(208.0, 30.0), start };
        assert!(s.on_event(&drag, rect, &ctx(&fonts)).is_consumed());
        // Same value again: no duplicate callback.
        let end = UiEvent::DragEnd { pos: Vec2::new(300.0, 30.0), start };
        assert!(s.on_event(&end, rect, &ctx(&fonts)).is_consumed());
        assert_eq!(*seen.borrow(), vec![255.0]);
    }

    #[test]
    fn drag_started_elsewhere_is_ignored() {
        let fonts = FontSystem::new();
        let mut s = channel();
        let rect = Rect::new(0.0, 0.0, 216.0, 16.0);
        let drag = UiEvent::Drag { pos: Vec2::new(100.0, 8.0), start: Vec2::new(100.0, 100.0) };
        assert!(!s.on_event(&drag, rect, &ctx(&fonts)).is_consumed());
    }
}
