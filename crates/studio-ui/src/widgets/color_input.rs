use std::cell::Cell;
use std::rc::Rc;

use studio_engine::coords::{Rect, Vec2};
use studio_engine::input::Key;
use studio_engine::paint::{Color, LinearGradient};
use studio_engine::scene::{Border, Layer};
use studio_engine::text::FontId;
use studio_engine::window::CursorIcon;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::memory::Memory;
use crate::painter::{Painter, Shadow};
use crate::widget::Widget;
use crate::widgets::popover;
use crate::widgets::slider::Slider;

const PANEL_WIDTH: f32 = 240.0;
const PANEL_PAD: f32 = 12.0;
const PREVIEW_H: f32 = 32.0;
const ROW_H: f32 = 20.0;
const ROW_GAP: f32 = 10.0;
const LABEL_W: f32 = 18.0;
const TEXT_SIZE: f32 = 14.0;
const GAP: f32 = 8.0;
const SWATCH: f32 = 40.0;

const CHANNELS: [&str; 3] = ["R", "G", "B"];

/// Lowercase `#rrggbb`.
pub fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Rects of the open picker panel.
struct PanelLayout {
    panel: Rect,
    preview: Rect,
    rows: [Rect; 3],
    readout: Rect,
}

impl PanelLayout {
    fn height() -> f32 {
        PANEL_PAD * 2.0 + PREVIEW_H + ROW_GAP + 3.0 * ROW_H + 2.0 * ROW_GAP + ROW_GAP + ROW_H
    }

    fn new(anchor: Rect, ctx: &LayoutCtx) -> Self {
        let size = Vec2::new(PANEL_WIDTH, Self::height());
        let panel = popover::place(anchor, size, ctx.viewport_rect(), GAP);

        let x = panel.origin.x + PANEL_PAD;
        let w = PANEL_WIDTH - PANEL_PAD * 2.0;
        let mut y = panel.origin.y + PANEL_PAD;

        let preview = Rect::new(x, y, w, PREVIEW_H);
        y += PREVIEW_H + ROW_GAP;
        let rows = std::array::from_fn(|i| Rect::new(x, y + i as f32 * (ROW_H + ROW_GAP), w, ROW_H));
        y += 3.0 * ROW_H + 3.0 * ROW_GAP;
        let readout = Rect::new(x, y, w, ROW_H);

        Self { panel, preview, rows, readout }
    }

    /// Slider part of a channel row, right of its label.
    fn slider_rect(row: Rect) -> Rect {
        Rect::new(row.origin.x + LABEL_W, row.origin.y, row.width() - LABEL_W, row.height())
    }
}

/// RGB color picker: a swatch that opens a popover with one slider per
/// channel and a hex readout.
///
/// Open state lives in [`Memory`] under `key`, so the widget can be rebuilt
/// every frame. At most one popover is open at a time; clicking outside the
/// open panel closes it.
pub struct ColorInput {
    key: String,
    value: [u8; 3],
    memory: Memory,
    font: FontId,
    on_change: Option<Box<dyn FnMut([u8; 3])>>,
}

impl ColorInput {
    pub fn new(key: impl Into<String>, value: [u8; 3], memory: &Memory, font: FontId) -> Self {
        Self { key: key.into(), value, memory: memory.clone(), font, on_change: None }
    }

    /// Called with the new color on every slider movement.
    pub fn on_change(mut self, f: impl FnMut([u8; 3]) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn is_open(&self) -> bool {
        self.memory.is_open(&self.key)
    }

    fn swatch_rect(&self, rect: Rect) -> Rect {
        Rect::from_origin_size(rect.origin, Vec2::splat(SWATCH))
    }

    fn channel_slider(&self, i: usize, rect: Rect) -> Slider {
        Slider::new()
            .range(0.0, 255.0)
            .step(1.0)
            .value(f32::from(self.value[i]))
            .thumb_radius(7.0)
            .fill(track_gradient(self.value, i, rect))
    }

    fn paint_panel(&self, painter: &mut Painter, layout: &PanelLayout) {
        painter.shadow(layout.panel, 12.0, Shadow::lg());
        painter.fill_rounded_rect(
            layout.panel,
            12.0,
            Color::WHITE,
            Some(Border { width: 1.0, color: Color::from_rgb_u8(0xe5, 0xe7, 0xeb) }),
        );
        let [r, g, b] = self.value;
        painter.fill_rounded_rect(layout.preview, 6.0, Color::from_rgb_u8(r, g, b), None);

        let label_color = Color::from_rgb_u8(0x37, 0x41, 0x51);
        for (i, row) in layout.rows.iter().enumerate() {
            let size = painter.measure_text(CHANNELS[i], self.font, TEXT_SIZE);
            painter.text(CHANNELS[i], self.font, TEXT_SIZE, label_color, Vec2::new(row.origin.x, row.center().y - size.y * 0.5));

            let slider_rect = PanelLayout::slider_rect(*row);
            self.channel_slider(i, slider_rect).paint(painter, slider_rect);
        }

        let text = hex(self.value);
        let size = painter.measure_text(&text, self.font, TEXT_SIZE);
        painter.text(text, self.font, TEXT_SIZE, label_color, layout.readout.center() - size * 0.5);
        painter.occlude(layout.panel);
    }

    /// Routes a pointer event to the channel sliders.
    fn slider_event(&mut self, event: &UiEvent, layout: &PanelLayout, ctx: &LayoutCtx) -> bool {
        for (i, row) in layout.rows.iter().enumerate() {
            let picked = Rc::new(Cell::new(None));
            let p = picked.clone();
            let slider_rect = PanelLayout::slider_rect(*row);
            let mut slider = self.channel_slider(i, slider_rect).on_change(move |v| p.set(Some(v)));
            if slider.on_event(event, slider_rect, ctx).is_consumed() {
                if let Some(v) = picked.get() {
                    self.value[i] = v.round().clamp(0.0, 255.0) as u8;
                    if let Some(f) = &mut self.on_change {
                        f(self.value);
                    }
                }
                return true;
            }
        }
        false
    }
}

/// Horizontal gradient across `rect` from channel 0 to channel 255.
fn track_gradient(value: [u8; 3], channel: usize, rect: Rect) -> LinearGradient {
    let mut lo = value;
    let mut hi = value;
    lo[channel] = 0;
    hi[channel] = 255;
    let y = rect.center().y;
    LinearGradient::even(
        Vec2::new(rect.origin.x, y),
        Vec2::new(rect.max().x, y),
        &[Color::from_rgb_u8(lo[0], lo[1], lo[2]), Color::from_rgb_u8(hi[0], hi[1], hi[2])],
    )
}

impl Widget for ColorInput {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::splat(SWATCH))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let swatch = self.swatch_rect(rect);
        if painter.is_hovered(swatch) {
            painter.set_cursor(CursorIcon::Pointer);
        }
        let [r, g, b] = self.value;
        painter.fill_rounded_rect(
            swatch,
            4.0,
            Color::from_rgb_u8(r, g, b),
            Some(Border { width: 1.0, color: Color::from_rgb_u8(0x9c, 0xa3, 0xaf) }),
        );

        if self.is_open() {
            let layout = PanelLayout::new(swatch, &painter.layout_ctx());
            painter.with_layer(Layer::Overlay, |p| self.paint_panel(p, &layout));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        match event {
            UiEvent::Click { pos } if self.swatch_rect(rect).contains(*pos) => {
                self.memory.open(&self.key);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_overlay_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }
        let swatch = self.swatch_rect(rect);
        let layout = PanelLayout::new(swatch, ctx);

        match event {
            UiEvent::KeyPress { key: Key::Escape } => {
                self.memory.close(&self.key);
                EventResult::Consumed
            }
            UiEvent::Click { pos } | UiEvent::Drag { start: pos, .. } | UiEvent::DragEnd { start: pos, .. }
                if layout.panel.contains(*pos) =>
            {
                self.slider_event(event, &layout, ctx);
                EventResult::Consumed
            }
            UiEvent::Click { .. } => {
                // Outside the panel, including the swatch itself.
                self.memory.close(&self.key);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use studio_engine::paint::Paint;
    use studio_engine::scene::DrawList;
    use studio_engine::text::FontSystem;

    use super::*;
    use crate::widgets::test_support::ctx;

    fn input(memory: &Memory, seen: Rc<RefCell<Vec<[u8; 3]>>>) -> ColorInput {
        ColorInput::new("color", [0x12, 0x34, 0x56], memory, FontId::default()).on_change(move |c| seen.borrow_mut().push(c))
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(hex([0, 0x0a, 0xff]), "#000aff");
    }

    #[test]
    fn click_on_swatch_opens() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        let mut w = input(&memory, Rc::default());
        let click = UiEvent::Click { pos: Vec2::new(10.0, 10.0) };
        assert!(w.on_event(&click, Rect::new(0.0, 0.0, 40.0, 40.0), &ctx(&fonts)).is_consumed());
        assert!(memory.is_open("color"));
    }

    #[test]
    fn outside_click_closes_and_is_swallowed() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        memory.open("color");
        let mut w = input(&memory, Rc::default());
        let click = UiEvent::Click { pos: Vec2::new(700.0, 500.0) };
        assert!(w.on_overlay_event(&click, Rect::new(0.0, 0.0, 40.0, 40.0), &ctx(&fonts)).is_consumed());
        assert!(!memory.is_open("color"));
    }

    #[test]
    fn dragging_red_slider_emits_new_color() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        memory.open("color");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut w = input(&memory, seen.clone());
        let rect = Rect::new(0.0, 0.0, 40.0, 40.0);

        let layout = PanelLayout::new(rect, &ctx(&fonts));
        let red = PanelLayout::slider_rect(layout.rows[0]);
        let start = red.center();
        let end = Vec2::new(red.max().x + 50.0, start.y);
        let drag = UiEvent::Drag { pos: end, start };
        assert!(w.on_overlay_event(&drag, rect, &ctx(&fonts)).is_consumed());
        assert_eq!(*seen.borrow(), vec![[0xff, 0x34, 0x56]]);
        assert!(memory.is_open("color"));
    }

    #[test]
    fn closed_input_ignores_overlay_pass() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        let mut w = input(&memory, Rc::default());
        let click = UiEvent::Click { pos: Vec2::new(700.0, 500.0) };
        assert!(!w.on_overlay_event(&click, Rect::new(0.0, 0.0, 40.0, 40.0), &ctx(&fonts)).is_consumed());
    }

    #[test]
    fn open_panel_paints_one_gradient_track_per_channel() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        memory.open("color");
        let w = input(&memory, Rc::default());
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, &fonts, 1.0, Vec2::new(800.0, 600.0), Vec2::ZERO, false, &[]);
        w.paint(&mut painter, Rect::new(0.0, 0.0, 40.0, 40.0));
        drop(painter);

        let tracks: Vec<_> = list
            .quads(Layer::Overlay)
            .filter_map(|q| match &q.paint {
                Paint::LinearGradient(g) => Some(g.clone()),
                Paint::Solid(_) => None,
            })
            .collect();
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].start_color(), Color::from_rgb_u8(0x00, 0x34, 0x56));
        assert_eq!(tracks[0].end_color(), Color::from_rgb_u8(0xff, 0x34, 0x56));
        assert_eq!(tracks[2].end_color(), Color::from_rgb_u8(0x12, 0x34, 0xff));
    }
}
