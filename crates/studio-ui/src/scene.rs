use studio_engine::coords::{Rect, Vec2};
use studio_engine::input::Key;
use studio_engine::scene::{DrawList, Layer};
use studio_engine::text::{FontId, FontLoadError, FontSystem};
use studio_engine::window::CursorIcon;

use crate::constraints::LayoutCtx;
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

/// Release within this distance of the press point still counts as a click.
const CLICK_SLOP: f32 = 8.0;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Pointer and keyboard snapshot for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    pub mouse_pos: Vec2,
    /// Primary button currently held.
    pub mouse_down: bool,
    /// Primary button went down this frame.
    pub mouse_pressed: bool,
    /// Primary button went up this frame.
    pub mouse_released: bool,
    pub keys_pressed: Vec<Key>,
}

// ── PointerGesture ────────────────────────────────────────────────────────

/// Turns button transitions into `Click` / `Drag` / `DragEnd` events.
#[derive(Debug, Default)]
struct PointerGesture {
    press_start: Option<Vec2>,
}

impl PointerGesture {
    fn events(&mut self, input: &UiInput) -> Vec<UiEvent> {
        let pos = input.mouse_pos;
        let mut events = vec![UiEvent::Hover { pos }];

        // A release is handled before a press so that release-then-press in
        // one frame ends the old gesture and starts a new one.
        if input.mouse_released {
            let start = self.press_start.take().unwrap_or(pos);
            events.push(UiEvent::DragEnd { pos, start });
            if (pos - start).length() <= CLICK_SLOP {
                events.push(UiEvent::Click { pos });
            }
        }

        if input.mouse_pressed && input.mouse_down {
            self.press_start = Some(pos);
        }

        if input.mouse_down {
            if let Some(start) = self.press_start {
                events.push(UiEvent::Drag { pos, start });
            }
        } else if !input.mouse_released {
            // Button came up while the window was unfocused.
            self.press_start = None;
        }

        events.extend(input.keys_pressed.iter().map(|&key| UiEvent::KeyPress { key }));
        events
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns fonts, the frame's draw list and the input bookkeeping that spans
/// frames.
///
/// Each frame the freshly built root is painted, then this frame's events
/// are routed through it: overlay pass first, then the regular pass for
/// whatever the overlays did not consume.
#[derive(Default)]
pub struct UiScene {
    pub font_system: FontSystem,
    pub draw_list: DrawList,
    gesture: PointerGesture,
    occluders: Vec<(Layer, Rect)>,
    cursor: CursorIcon,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Cursor shape requested by the widgets painted last frame.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Paints `root` into the draw list and dispatches this frame's input.
    pub fn frame(&mut self, mut root: Element, viewport: Vec2, scale: f32, input: &UiInput) -> &DrawList {
        self.draw_list.clear();
        let rect = Rect::from_origin_size(Vec2::ZERO, viewport);

        // ── paint ─────────────────────────────────────────────────────────
        let (cursor, occluders) = {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                scale,
                viewport,
                input.mouse_pos,
                input.mouse_down,
                &self.occluders,
            );
            root.paint(&mut painter, rect);
            painter.finish()
        };
        self.cursor = cursor;
        self.occluders = occluders;

        // ── events ────────────────────────────────────────────────────────
        let ctx = LayoutCtx { fonts: &self.font_system, scale, viewport };
        for event in self.gesture.events(input) {
            if !root.on_overlay_event(&event, rect, &ctx).is_consumed() {
                root.on_event(&event, rect, &ctx);
            }
        }

        &self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> UiInput {
        UiInput { mouse_pos: Vec2::new(x, y), ..UiInput::default() }
    }

    #[test]
    fn idle_frame_only_hovers() {
        let mut g = PointerGesture::default();
        assert_eq!(g.events(&at(1.0, 2.0)), vec![UiEvent::Hover { pos: Vec2::new(1.0, 2.0) }]);
    }

    #[test]
    fn press_and_release_in_place_clicks() {
        let mut g = PointerGesture::default();
        let press = UiInput { mouse_down: true, mouse_pressed: true, ..at(10.0, 10.0) };
        let events = g.events(&press);
        assert!(events.contains(&UiEvent::Drag { pos: Vec2::new(10.0, 10.0), start: Vec2::new(10.0, 10.0) }));

        let release = UiInput { mouse_released: true, ..at(12.0, 11.0) };
        let events = g.events(&release);
        assert!(events.contains(&UiEvent::Click { pos: Vec2::new(12.0, 11.0) }));
        assert!(events.contains(&UiEvent::DragEnd { pos: Vec2::new(12.0, 11.0), start: Vec2::new(10.0, 10.0) }));
    }

    #[test]
    fn long_drag_does_not_click() {
        let mut g = PointerGesture::default();
        g.events(&UiInput { mouse_down: true, mouse_pressed: true, ..at(0.0, 0.0) });
        let moved = g.events(&UiInput { mouse_down: true, ..at(50.0, 0.0) });
        assert!(moved.contains(&UiEvent::Drag { pos: Vec2::new(50.0, 0.0), start: Vec2::ZERO }));

        let events = g.events(&UiInput { mouse_released: true, ..at(60.0, 0.0) });
        assert!(!events.iter().any(|e| matches!(e, UiEvent::Click { .. })));
        assert!(events.contains(&UiEvent::DragEnd { pos: Vec2::new(60.0, 0.0), start: Vec2::ZERO }));
    }

    #[test]
    fn press_and_release_within_one_frame_clicks() {
        let mut g = PointerGesture::default();
        let events = g.events(&UiInput { mouse_pressed: true, mouse_released: true, ..at(5.0, 5.0) });
        assert!(events.contains(&UiEvent::Click { pos: Vec2::new(5.0, 5.0) }));
        assert!(!events.iter().any(|e| matches!(e, UiEvent::Drag { .. })));
    }

    #[test]
    fn keys_follow_pointer_events() {
        let mut g = PointerGesture::default();
        let events = g.events(&UiInput { keys_pressed: vec![Key::Escape], ..at(0.0, 0.0) });
        assert_eq!(events.last(), Some(&UiEvent::KeyPress { key: Key::Escape }));
    }
}
