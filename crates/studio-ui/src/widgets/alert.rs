use studio_engine::coords::{Rect, Vec2};
use studio_engine::input::Key;
use studio_engine::paint::Color;
use studio_engine::scene::Layer;
use studio_engine::text::FontId;
use studio_engine::window::CursorIcon;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::{Painter, Shadow};
use crate::widget::Widget;

const TEXT_SIZE: f32 = 16.0;
const CARD_PAD: f32 = 24.0;
const CARD_MIN_W: f32 = 280.0;
const BUTTON_W: f32 = 72.0;
const BUTTON_H: f32 = 36.0;
const SPACING: f32 = 20.0;
const MARGIN: f32 = 16.0;

/// Modal message box with an `OK` button.
///
/// Covers the whole rect it is given: the window behind is dimmed and every
/// event is swallowed until the alert is dismissed with `OK`, Enter or
/// Escape. Place it last in the root `Stack` with `StackItem::fill()`.
pub struct Alert {
    message: String,
    font: FontId,
    on_dismiss: Option<Box<dyn FnMut()>>,
}

struct AlertLayout {
    card: Rect,
    message_origin: Vec2,
    button: Rect,
}

impl Alert {
    pub fn new(message: impl Into<String>, font: FontId) -> Self {
        Self { message: message.into(), font, on_dismiss: None }
    }

    pub fn on_dismiss(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(f));
        self
    }

    fn layout(&self, rect: Rect, ctx: &LayoutCtx) -> AlertLayout {
        let text = ctx.fonts.measure_text(&self.message, self.font, TEXT_SIZE, ctx.scale);
        let max_w = (rect.width() - MARGIN * 2.0).max(0.0);
        let w = (text.x + CARD_PAD * 2.0).max(CARD_MIN_W).min(max_w);
        let h = CARD_PAD * 2.0 + text.y + SPACING + BUTTON_H;
        let card = Rect::from_center_size(rect.center(), Vec2::new(w, h));

        let message_origin = Vec2::new(card.origin.x + CARD_PAD, card.origin.y + CARD_PAD);
        let button = Rect::new(
            card.max().x - CARD_PAD - BUTTON_W,
            card.max().y - CARD_PAD - BUTTON_H,
            BUTTON_W,
            BUTTON_H,
        );
        AlertLayout { card, message_origin, button }
    }

    fn dismiss(&mut self) {
        if let Some(f) = &mut self.on_dismiss {
            f();
        }
    }
}

impl Widget for Alert {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(constraints.max)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let layout = self.layout(rect, &painter.layout_ctx());
        painter.with_layer(Layer::Modal, |p| {
            p.fill_rect(rect, Color::BLACK.with_opacity(0.4));
            p.shadow(layout.card, 12.0, Shadow::lg());
            p.fill_rounded_rect(layout.card, 12.0, Color::WHITE, None);
            p.text(
                self.message.as_str(),
                self.font,
                TEXT_SIZE,
                Color::from_rgb_u8(0x11, 0x18, 0x27),
                layout.message_origin,
            );

            let hovered = p.is_hovered(layout.button);
            if hovered {
                p.set_cursor(CursorIcon::Pointer);
            }
            let bg = if hovered { Color::from_rgb_u8(0x1d, 0x4e, 0xd8) } else { Color::from_rgb_u8(0x25, 0x63, 0xeb) };
            p.fill_rounded_rect(layout.button, 8.0, bg, None);
            let ok = p.measure_text("OK", self.font, TEXT_SIZE);
            p.text("OK", self.font, TEXT_SIZE, Color::WHITE, layout.button.center() - ok * 0.5);

            p.occlude(rect);
        });
    }

    fn on_overlay_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        match event {
            UiEvent::KeyPress { key: Key::Enter | Key::Escape } => self.dismiss(),
            UiEvent::Click { pos } if self.layout(rect, ctx).button.contains(*pos) => self.dismiss(),
            _ => {}
        }
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use studio_engine::text::FontSystem;

    use super::*;
    use crate::widgets::test_support::ctx;

    const SCREEN: Rect = Rect { origin: Vec2 { x: 0.0, y: 0.0 }, size: Vec2 { x: 800.0, y: 600.0 } };

    fn alert(count: Rc<Cell<u32>>) -> Alert {
        Alert::new("Copied: #abcdef", FontId::default()).on_dismiss(move || count.set(count.get() + 1))
    }

    #[test]
    fn swallows_everything() {
        let fonts = FontSystem::new();
        let count = Rc::new(Cell::new(0));
        let mut a = alert(count.clone());
        let click = UiEvent::Click { pos: Vec2::new(5.0, 5.0) };
        assert!(a.on_overlay_event(&click, SCREEN, &ctx(&fonts)).is_consumed());
        let hover = UiEvent::Hover { pos: Vec2::new(5.0, 5.0) };
        assert!(a.on_overlay_event(&hover, SCREEN, &ctx(&fonts)).is_consumed());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn ok_button_and_keys_dismiss() {
        let fonts = FontSystem::new();
        let count = Rc::new(Cell::new(0));
        let mut a = alert(count.clone());
        let button = a.layout(SCREEN, &ctx(&fonts)).button;

        a.on_overlay_event(&UiEvent::Click { pos: button.center() }, SCREEN, &ctx(&fonts));
        a.on_overlay_event(&UiEvent::KeyPress { key: Key::Enter }, SCREEN, &ctx(&fonts));
        a.on_overlay_event(&UiEvent::KeyPress { key: Key::Escape }, SCREEN, &ctx(&fonts));
        a.on_overlay_event(&UiEvent::KeyPress { key: Key::Other(57) }, SCREEN, &ctx(&fonts));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn card_is_centered_and_at_least_min_width() {
        let fonts = FontSystem::new();
        let a = alert(Rc::default());
        let card = a.layout(SCREEN, &ctx(&fonts)).card;
        assert!((card.center() - SCREEN.center()).length() < 1e-3);
        assert_eq!(card.width(), CARD_MIN_W);
    }
}
