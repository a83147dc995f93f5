//! Studio UI: an immediate-rebuild widget tree on top of `studio-engine`.
//!
//! The view function builds a fresh [`Element`] tree from application state
//! every frame. Layout happens while painting; input is routed through the
//! same tree afterwards, overlay content (open popovers, modal alerts) first.
//! State that must outlive a frame, such as which popover is open, lives in
//! [`Memory`](memory::Memory).
//!
//! ```rust,ignore
//! use studio_ui::prelude::*;
//!
//! Application::new()
//!     .title("Hello")
//!     .font("sans", font_bytes)
//!     .run(|ctx| {
//!         Stack::new()
//!             .item(StackItem::new(Text::new("Hello!", ctx.default_font, 18.0, Color::BLACK)).fill())
//!             .into()
//!     })
//! ```
//!
//! Custom widgets implement [`Widget`] and can be used anywhere an
//! [`Element`] is accepted.

pub mod app;
pub mod constraints;
pub mod event;
pub mod memory;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// Everything needed to build views and custom widgets.
pub mod prelude {
    pub use crate::app::{Application, ViewCtx};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::memory::Memory;
    pub use crate::painter::{Painter, Shadow};
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        alert::Alert,
        button::Button,
        color_input::{hex, ColorInput},
        container::Container,
        select::Select,
        slider::Slider,
        stack::{AnchorVal, SizeHint, Stack, StackItem},
        swatch::Swatch,
        text::Text,
        wrap::Wrap,
    };

    pub use studio_engine::coords::{CornerRadii, Rect, Vec2};
    pub use studio_engine::paint::{Color, ColorStop, LinearGradient, Paint};
    pub use studio_engine::scene::{Border, Layer};
    pub use studio_engine::text::FontId;
}
