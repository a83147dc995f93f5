use studio_engine::coords::{Rect, Vec2};
use studio_engine::input::Key;
use studio_engine::paint::Color;
use studio_engine::scene::{Border, Layer};
use studio_engine::text::FontId;
use studio_engine::window::CursorIcon;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::memory::Memory;
use crate::painter::{Painter, Shadow};
use crate::widget::Widget;
use crate::widgets::popover;

const TEXT_SIZE: f32 = 14.0;
const PAD_H: f32 = 16.0;
const PAD_V: f32 = 8.0;
const ROW_H: f32 = 28.0;
const LIST_PAD: f32 = 4.0;
const GAP: f32 = 4.0;

/// Drop-down list of `(value, label)` options.
///
/// The box shows the label of the selected value; clicking it opens the list
/// on the overlay layer. Picking an option reports its value and closes the
/// list. Open state lives in [`Memory`] under `key`.
pub struct Select {
    key: String,
    options: Vec<(String, String)>,
    selected: String,
    memory: Memory,
    font: FontId,
    background: Color,
    text_color: Color,
    corner_radius: f32,
    on_change: Option<Box<dyn FnMut(&str)>>,
}

impl Select {
    pub fn new(key: impl Into<String>, selected: impl Into<String>, memory: &Memory, font: FontId) -> Self {
        Self {
            key: key.into(),
            options: Vec::new(),
            selected: selected.into(),
            memory: memory.clone(),
            font,
            background: Color::WHITE,
            text_color: text_color(),
            corner_radius: 6.0,
            on_change: None,
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push((value.into(), label.into()));
        self
    }

    /// Fill of the closed box. A non-white fill drops the border.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Label color of the closed box; the open list keeps dark text.
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn is_open(&self) -> bool {
        self.memory.is_open(&self.key)
    }

    fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|(v, _)| *v == self.selected)
            .map_or(self.selected.as_str(), |(_, l)| l.as_str())
    }

    fn list_rect(&self, anchor: Rect, ctx: &LayoutCtx) -> Rect {
        let size = Vec2::new(anchor.width(), self.options.len() as f32 * ROW_H + LIST_PAD * 2.0);
        popover::place(anchor, size, ctx.viewport_rect(), GAP)
    }

    fn row_rect(list: Rect, i: usize) -> Rect {
        Rect::new(
            list.origin.x + LIST_PAD,
            list.origin.y + LIST_PAD + i as f32 * ROW_H,
            list.width() - LIST_PAD * 2.0,
            ROW_H,
        )
    }

    fn paint_list(&self, painter: &mut Painter, list: Rect) {
        painter.shadow(list, 8.0, Shadow::lg());
        painter.fill_rounded_rect(list, 8.0, Color::WHITE, Some(Border { width: 1.0, color: gray_300() }));

        for (i, (value, label)) in self.options.iter().enumerate() {
            let row = Self::row_rect(list, i);
            if *value == self.selected {
                painter.fill_rounded_rect(row, 4.0, Color::from_rgb_u8(0xe5, 0xe7, 0xeb), None);
            } else if painter.is_hovered(row) {
                painter.fill_rounded_rect(row, 4.0, Color::from_rgb_u8(0xf3, 0xf4, 0xf6), None);
            }
            if painter.is_hovered(row) {
                painter.set_cursor(CursorIcon::Pointer);
            }
            let size = painter.measure_text(label, self.font, TEXT_SIZE);
            let origin = Vec2::new(row.origin.x + PAD_H - LIST_PAD, row.center().y - size.y * 0.5);
            painter.text(label.as_str(), self.font, TEXT_SIZE, text_color(), origin);
        }
        painter.occlude(list);
    }
}

fn gray_300() -> Color {
    Color::from_rgb_u8(0xd1, 0xd5, 0xdb)
}

fn text_color() -> Color {
    Color::from_rgb_u8(0x11, 0x18, 0x27)
}

impl Widget for Select {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let label_w = self
            .options
            .iter()
            .map(|(_, l)| ctx.fonts.measure_text(l, self.font, TEXT_SIZE, ctx.scale).x)
            .fold(0.0, f32::max);
        let line = ctx.fonts.line_height(self.font, TEXT_SIZE);
        constraints.constrain(Vec2::new(label_w + PAD_H * 2.0, line + PAD_V * 2.0))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if painter.is_hovered(rect) {
            painter.set_cursor(CursorIcon::Pointer);
        }
        let border = (self.background == Color::WHITE).then(|| Border { width: 1.0, color: gray_300() });
        painter.fill_rounded_rect(rect, self.corner_radius, self.background, border);
        let label = self.selected_label();
        let size = painter.measure_text(label, self.font, TEXT_SIZE);
        let origin = Vec2::new(rect.origin.x + PAD_H, rect.center().y - size.y * 0.5);
        painter.text(label, self.font, TEXT_SIZE, self.text_color, origin);

        if self.is_open() {
            let list = self.list_rect(rect, &painter.layout_ctx());
            painter.with_layer(Layer::Overlay, |p| self.paint_list(p, list));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        match event {
            UiEvent::Click { pos } if rect.contains(*pos) => {
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
        match event {
            UiEvent::KeyPress { key: Key::Escape } => {
                self.memory.close(&self.key);
                EventResult::Consumed
            }
            UiEvent::Click { pos } => {
                let list = self.list_rect(rect, ctx);
                let picked = (0..self.options.len()).find(|&i| Self::row_rect(list, i).contains(*pos));
                if let Some(i) = picked {
                    let value = self.options[i].0.clone();
                    if let Some(f) = &mut self.on_change {
                        f(&value);
                    }
                    self.selected = value;
                }
                // Any click while open closes the list, even on padding.
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
    use std::rc::Rc;

    use studio_engine::text::FontSystem;

    use super::*;
    use crate::widgets::test_support::ctx;

    const BOX: Rect = Rect { origin: Vec2 { x: 100.0, y: 100.0 }, size: Vec2 { x: 160.0, y: 32.0 } };

    fn directions(memory: &Memory, seen: Rc<RefCell<Vec<String>>>) -> Select {
        Select::new("dir", "to right", memory, FontId::default())
            .option("to right", "To Right")
            .option("to left", "To Left")
            .option("to bottom", "To Bottom")
            .on_change(move |v| seen.borrow_mut().push(v.to_string()))
    }

    #[test]
    fn shows_label_of_selected_value() {
        let memory = Memory::new();
        let s = directions(&memory, Rc::default());
        assert_eq!(s.selected_label(), "To Right");
    }

    #[test]
    fn picking_an_option_reports_value_and_closes() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut s = directions(&memory, seen.clone());

        let open = UiEvent::Click { pos: BOX.center() };
        assert!(s.on_event(&open, BOX, &ctx(&fonts)).is_consumed());
        assert!(memory.is_open("dir"));

        let list = s.list_rect(BOX, &ctx(&fonts));
        let pick = UiEvent::Click { pos: Select::row_rect(list, 2).center() };
        assert!(s.on_overlay_event(&pick, BOX, &ctx(&fonts)).is_consumed());
        assert_eq!(*seen.borrow(), vec!["to bottom".to_string()]);
        assert!(!memory.is_open("dir"));
    }

    #[test]
    fn outside_click_closes_without_change() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        memory.open("dir");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut s = directions(&memory, seen.clone());
        let click = UiEvent::Click { pos: Vec2::new(700.0, 10.0) };
        assert!(s.on_overlay_event(&click, BOX, &ctx(&fonts)).is_consumed());
        assert!(seen.borrow().is_empty());
        assert!(!memory.is_open("dir"));
    }
}
