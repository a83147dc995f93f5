//! Widget tree for one frame of the studio window.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use log::{info, warn};
use studio_ui::prelude::*;

use crate::backdrop::Backdrop;
use crate::clipboard::{Notifier, SystemClipboard};
use crate::color;
use crate::gradient::GradientDirection;
use crate::state::ColorStudio;

const PANEL_EDGE: f32 = 48.0;
const FAVORITES_TOP: f32 = 96.0;
const BAND_INSET: f32 = 8.0;
const GAP: f32 = 12.0;
const SWATCH: f32 = 40.0;
const LABEL_SIZE: f32 = 16.0;
const READOUT_SIZE: f32 = 18.0;

fn gray_800() -> Color {
    Color::from_rgb_u8(0x1f, 0x29, 0x37)
}

fn gray_700() -> Color {
    Color::from_rgb_u8(0x37, 0x41, 0x51)
}

fn purple_500() -> Color {
    Color::from_rgb_u8(0xa8, 0x55, 0xf7)
}

// ── alerts ────────────────────────────────────────────────────────────────

/// Messages waiting to be shown in the modal alert, oldest first.
#[derive(Debug, Default)]
pub struct AlertQueue(VecDeque<String>);

impl AlertQueue {
    pub fn front(&self) -> Option<&str> {
        self.0.front().map(String::as_str)
    }

    pub fn dismiss(&mut self) {
        self.0.pop_front();
    }
}

impl Notifier for AlertQueue {
    fn notify(&mut self, message: &str) {
        self.0.push_back(message.to_string());
    }
}

// ── Surface ───────────────────────────────────────────────────────────────

/// Full-window background with the current `background` value centered.
struct Surface {
    paint: Paint,
    readout: String,
    color: Color,
    font: FontId,
}

impl Widget for Surface {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(constraints.max)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let size = painter.measure_text(&self.readout, self.font, READOUT_SIZE);
        painter.with_layer(Layer::Background, |p| {
            p.fill_rect(rect, self.paint.clone());
            p.text(self.readout.as_str(), self.font, READOUT_SIZE, self.color, rect.center() - size * 0.5);
        });
    }
}

// ── StudioView ────────────────────────────────────────────────────────────

/// Owns the studio state and builds its view every frame.
pub struct StudioView {
    state: Rc<RefCell<ColorStudio>>,
    clipboard: Rc<RefCell<SystemClipboard>>,
    alerts: Rc<RefCell<AlertQueue>>,
    backdrop: Backdrop,
}

impl StudioView {
    pub fn new(fade: Duration) -> Self {
        let state = ColorStudio::new();
        let backdrop = Backdrop::new(&state, fade);
        Self {
            state: Rc::new(RefCell::new(state)),
            clipboard: Rc::new(RefCell::new(SystemClipboard::new())),
            alerts: Rc::new(RefCell::new(AlertQueue::default())),
            backdrop,
        }
    }

    pub fn view(&mut self, cx: &ViewCtx) -> Element {
        let state = self.state.borrow();
        self.backdrop.update(&state, cx.dt);

        let surface = Surface {
            paint: self.backdrop.paint(Rect::from_origin_size(Vec2::ZERO, cx.viewport)),
            readout: state.background_css(),
            color: self.backdrop.text_color(),
            font: cx.default_font,
        };

        let alert = self.alerts.borrow().front().map(str::to_string);

        Stack::new()
            .item(StackItem::new(surface).fill())
            .item(band(self.control_bar(&state, cx)).bottom(AnchorVal::Px(PANEL_EDGE)))
            .item_if(state.gradient_enabled(), || {
                band(self.gradient_panel(&state, cx)).top(AnchorVal::Px(PANEL_EDGE))
            })
            .item(band(self.favorites_panel(&state)).top(AnchorVal::Px(FAVORITES_TOP)))
            .item_if(alert.is_some(), || {
                let alerts = self.alerts.clone();
                let message = alert.unwrap_or_default();
                StackItem::new(Alert::new(message, cx.default_font).on_dismiss(move || alerts.borrow_mut().dismiss()))
                    .fill()
            })
            .into()
    }

    // ── panels ────────────────────────────────────────────────────────────

    fn control_bar(&self, state: &ColorStudio, cx: &ViewCtx) -> Container {
        let font = cx.default_font;

        let picker = {
            let s = self.state.clone();
            ColorInput::new("color", decoded(state.color()), cx.memory, font)
                .on_change(move |rgb| s.borrow_mut().set_color(hex(rgb)))
        };

        let random = {
            let s = self.state.clone();
            pill("Random", font, gray_800(), gray_700()).on_click(move || {
                s.borrow_mut().randomize_color(&mut rand::rng());
            })
        };

        let gradient = {
            let s = self.state.clone();
            let (label, bg) = if state.gradient_enabled() {
                ("Disable Gradient", purple_500())
            } else {
                ("Enable Gradient", gray_800())
            };
            pill(label, font, bg, bg).on_click(move || s.borrow_mut().toggle_gradient())
        };

        let copy = {
            let s = self.state.clone();
            let clipboard = self.clipboard.clone();
            let alerts = self.alerts.clone();
            pill("Copy Color", font, gray_800(), gray_700()).on_click(move || {
                let result = s.borrow().copy_color(&mut *clipboard.borrow_mut(), &mut *alerts.borrow_mut());
                match result {
                    Ok(value) => info!("copied {value} to clipboard"),
                    Err(e) => warn!("{e}"),
                }
            })
        };

        let favorite = {
            let s = self.state.clone();
            pill("Add to Favorites", font, gray_800(), gray_700()).on_click(move || {
                s.borrow_mut().add_favorite();
            })
        };

        let dark = {
            let s = self.state.clone();
            let label = if state.dark_mode() { "Light Mode" } else { "Dark Mode" };
            pill(label, font, gray_800(), gray_700()).on_click(move || s.borrow_mut().toggle_dark_mode())
        };

        panel(
            Wrap::new()
                .spacing(GAP)
                .child(picker)
                .child(random)
                .child(gradient)
                .child(copy)
                .child(favorite)
                .child(dark),
        )
    }

    fn gradient_panel(&self, state: &ColorStudio, cx: &ViewCtx) -> Container {
        let font = cx.default_font;
        let mut row = Wrap::new().spacing(GAP);

        for (i, stop) in state.gradient_stops().iter().enumerate() {
            let s = self.state.clone();
            row = row.child(
                ColorInput::new(format!("stop-{i}"), decoded(stop), cx.memory, font)
                    .on_change(move |rgb| s.borrow_mut().set_gradient_stop(i, hex(rgb))),
            );
        }

        let s = self.state.clone();
        let mut select = Select::new("direction", state.gradient_direction().as_css(), cx.memory, font)
            .background(gray_800())
            .text_color(Color::WHITE)
            .corner_radius(24.0)
            .on_change(move |value| match GradientDirection::parse(value) {
                Some(d) => s.borrow_mut().set_gradient_direction(d),
                None => warn!("unknown gradient direction {value:?}"),
            });
        for d in GradientDirection::ALL {
            select = select.option(d.as_css(), d.label());
        }

        panel(row.child(select))
    }

    fn favorites_panel(&self, state: &ColorStudio) -> Container {
        let mut row = Wrap::new().spacing(GAP);
        for fav in state.favorites() {
            let s = self.state.clone();
            let value = fav.clone();
            let paint = color::to_color(fav).unwrap_or(Color::transparent());
            row = row.child(Swatch::new(paint, SWATCH).circle().on_click(move || {
                s.borrow_mut().select_favorite(value.clone());
            }));
        }
        panel(row)
    }
}

/// Channels a color input shows for `value`; black when it does not decode.
fn decoded(value: &str) -> [u8; 3] {
    color::parse_hex(value).unwrap_or([0, 0, 0])
}

/// Horizontal band across the window that centers its panel.
fn band(panel: Container) -> StackItem {
    StackItem::new(panel)
        .left(AnchorVal::Px(BAND_INSET))
        .right(AnchorVal::Px(BAND_INSET))
        .center_x()
}

/// Translucent rounded card holding a row of controls.
fn panel(content: Wrap) -> Container {
    Container::new()
        .background(Color::WHITE.with_opacity(0.3))
        .corner_radius(24.0)
        .padding(Edges::symmetric(12.0, 16.0))
        .shadow(Shadow::lg())
        .child(content)
}

fn pill(label: &str, font: FontId, background: Color, hover: Color) -> Button {
    Button::new(Text::new(label, font, LABEL_SIZE, Color::WHITE))
        .background(background)
        .hover_background(hover)
        .corner_radius(24.0)
        .padding(Edges::symmetric(8.0, 16.0))
        .hover_scale(1.05)
        .shadow(Shadow::md(), Shadow::lg())
}

#[cfg(test)]
mod tests {
    use studio_engine::text::FontSystem;

    use super::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    // Without a loaded font every label measures 0 wide, so each pill is
    // 32 px of padding and the control bar row is the 40 px picker plus
    // five pills 12 px apart, centered above the bottom edge.
    fn pill_center(index: usize) -> Vec2 {
        Vec2::new(338.0 + 44.0 * index as f32, 520.0)
    }

    const RANDOM: usize = 0;
    const GRADIENT: usize = 1;
    const FAVORITE: usize = 3;
    const DARK: usize = 4;

    /// Builds one frame and routes a click through it like `UiScene` does.
    fn click(view: &mut StudioView, memory: &Memory, fonts: &FontSystem, pos: Vec2) {
        let cx = ViewCtx { default_font: FontId::default(), memory, dt: 0.0, viewport: SCREEN };
        let mut root = view.view(&cx);
        let ctx = LayoutCtx { fonts, scale: 1.0, viewport: SCREEN };
        let rect = Rect::from_origin_size(Vec2::ZERO, SCREEN);
        let event = UiEvent::Click { pos };
        if !root.on_overlay_event(&event, rect, &ctx).is_consumed() {
            root.on_event(&event, rect, &ctx);
        }
    }

    #[test]
    fn control_bar_buttons_drive_the_state() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        let mut view = StudioView::new(Duration::ZERO);
        let before = view.state.borrow().color().to_string();

        click(&mut view, &memory, &fonts, pill_center(RANDOM));
        assert_ne!(view.state.borrow().color(), before);

        click(&mut view, &memory, &fonts, pill_center(GRADIENT));
        assert!(view.state.borrow().gradient_enabled());
        click(&mut view, &memory, &fonts, pill_center(GRADIENT));
        assert!(!view.state.borrow().gradient_enabled());

        click(&mut view, &memory, &fonts, pill_center(DARK));
        assert!(view.state.borrow().dark_mode());
    }

    #[test]
    fn favorite_swatch_restores_the_saved_color() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        let mut view = StudioView::new(Duration::ZERO);
        view.state.borrow_mut().set_color("#ff0000");

        click(&mut view, &memory, &fonts, pill_center(FAVORITE));
        assert_eq!(view.state.borrow().favorites(), ["#ff0000".to_string()]);

        view.state.borrow_mut().set_color("#00ff00");
        // One 40 px swatch in the favorites panel, 96 px from the top.
        click(&mut view, &memory, &fonts, Vec2::new(400.0, 128.0));
        assert_eq!(view.state.borrow().color(), "#ff0000");
    }

    #[test]
    fn click_on_the_color_swatch_opens_its_picker() {
        let fonts = FontSystem::new();
        let memory = Memory::new();
        let mut view = StudioView::new(Duration::ZERO);
        click(&mut view, &memory, &fonts, Vec2::new(290.0, 520.0));
        assert!(memory.is_open("color"));
    }

    #[test]
    fn alert_queue_shows_oldest_first() {
        let mut q = AlertQueue::default();
        q.notify("Copied: #111111");
        q.notify("Copied: #222222");
        assert_eq!(q.front(), Some("Copied: #111111"));
        q.dismiss();
        assert_eq!(q.front(), Some("Copied: #222222"));
        q.dismiss();
        assert_eq!(q.front(), None);
    }

    #[test]
    fn decoded_falls_back_to_black() {
        assert_eq!(decoded("#abc"), [0xaa, 0xbb, 0xcc]);
        assert_eq!(decoded("#12345"), [0, 0, 0]);
    }
}
