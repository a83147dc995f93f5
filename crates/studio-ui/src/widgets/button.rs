use studio_engine::coords::{Rect, Vec2};
use studio_engine::paint::Color;
use studio_engine::window::CursorIcon;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::{Painter, Shadow};
use crate::widget::{Element, Widget};

/// Clickable pill around any child.
///
/// Hover and press visuals come from the `Painter` at paint time, so the
/// button keeps no state and can be rebuilt every frame.
///
/// ```rust,ignore
/// Button::new(Text::new("Random", font, 16.0, Color::WHITE))
///     .background(gray_800)
///     .hover_background(gray_700)
///     .hover_scale(1.05)
///     .on_click(move || state.borrow_mut().randomize_color(&mut rand::rng()))
/// ```
pub struct Button {
    child: Element,
    on_click: Option<Box<dyn FnMut()>>,

    background: Color,
    hover_background: Option<Color>,
    corner_radius: f32,
    padding: Edges,
    hover_scale: f32,
    shadow: Option<Shadow>,
    hover_shadow: Option<Shadow>,
}

impl Button {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            on_click: None,
            background: Color::transparent(),
            hover_background: None,
            corner_radius: 0.0,
            padding: Edges::default(),
            hover_scale: 1.0,
            shadow: None,
            hover_shadow: None,
        }
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Background while hovered. Defaults to the regular background.
    pub fn hover_background(mut self, color: Color) -> Self {
        self.hover_background = Some(color);
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    /// Growth factor of the pill while hovered (`1.05` = 5% larger).
    pub fn hover_scale(mut self, factor: f32) -> Self {
        self.hover_scale = factor.max(0.0);
        self
    }

    /// Shadow at rest and while hovered.
    pub fn shadow(mut self, rest: Shadow, hover: Shadow) -> Self {
        self.shadow = Some(rest);
        self.hover_shadow = Some(hover);
        self
    }
}

impl Widget for Button {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child = self.child.measure(constraints.shrink(self.padding), ctx);
        constraints.constrain(Vec2::new(child.x + self.padding.h(), child.y + self.padding.v()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let hovered = painter.is_hovered(rect);
        let (body, bg, shadow) = if hovered {
            painter.set_cursor(CursorIcon::Pointer);
            (
                rect.scale_about_center(self.hover_scale),
                self.hover_background.unwrap_or(self.background),
                self.hover_shadow,
            )
        } else {
            (rect, self.background, self.shadow)
        };

        if let Some(shadow) = shadow {
            painter.shadow(body, self.corner_radius, shadow);
        }
        painter.fill_rounded_rect(body, self.corner_radius, bg, None);
        self.child.paint(painter, inset_rect(body, self.padding));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        if let UiEvent::Click { pos } = event {
            if rect.contains(*pos) {
                if let Some(f) = &mut self.on_click {
                    f();
                }
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}
