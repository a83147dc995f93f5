use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use studio_engine::coords::Vec2;
use studio_engine::core::{App as EngineApp, AppControl, FrameCtx};
use studio_engine::device::GpuInit;
use studio_engine::input::MouseButton;
use studio_engine::paint::Color;
use studio_engine::render::SceneRenderer;
use studio_engine::text::FontId;
use studio_engine::window::{CursorIcon, Runtime, RuntimeConfig};

use crate::memory::Memory;
use crate::scene::{UiInput, UiScene};
use crate::widget::Element;

// ── ViewCtx ───────────────────────────────────────────────────────────────

/// Everything a view function gets to build the frame's widget tree.
pub struct ViewCtx<'a> {
    /// Font used for all text: the first registered.
    pub default_font: FontId,
    /// Popover state shared across rebuilds.
    pub memory: &'a Memory,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Window size in logical pixels.
    pub viewport: Vec2,
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Color Studio")
///     .font("body", bytes)
///     .run(move |cx| my_view(&state, cx))?;
/// ```
///
/// The view closure runs once per frame and returns a fresh tree; widget
/// callbacks mutate application state, which the next frame renders.
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    min_size: Option<(f64, f64)>,
    fonts: Vec<(String, Vec<u8>)>,
    clear_color: Color,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "studio".to_string(),
            width: 1280.0,
            height: 720.0,
            min_size: None,
            fonts: Vec::new(),
            clear_color: Color::BLACK,
        }
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn min_size(mut self, width: f64, height: f64) -> Self {
        self.min_size = Some((width, height));
        self
    }

    /// Registers a font under `name`. The first one becomes the default.
    pub fn font(mut self, name: impl Into<String>, data: Vec<u8>) -> Self {
        self.fonts.push((name.into(), data));
        self
    }

    /// Color the surface is cleared to before the tree paints.
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Loads fonts and runs the event loop until the window closes.
    pub fn run<F>(self, view: F) -> Result<()>
    where
        F: FnMut(&ViewCtx<'_>) -> Element + 'static,
    {
        let mut scene = UiScene::new();
        let mut default_font = None;
        for (name, bytes) in &self.fonts {
            let id = scene
                .load_font(bytes)
                .with_context(|| format!("loading font '{name}'"))?;
            default_font.get_or_insert(id);
        }
        let default_font = default_font.context("no font registered")?;

        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            min_size: self.min_size.map(|(w, h)| LogicalSize::new(w, h)),
        };

        let app = UiApp {
            scene,
            renderer: SceneRenderer::new(),
            memory: Memory::new(),
            default_font,
            clear_color: self.clear_color,
            cursor: None,
            view: Box::new(view),
        };
        Runtime::run(config, GpuInit::default(), app)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiApp ─────────────────────────────────────────────────────────────────

/// Bridges the widget layer to the engine's `App` trait.
struct UiApp {
    scene: UiScene,
    renderer: SceneRenderer,
    memory: Memory,
    default_font: FontId,
    clear_color: Color,
    cursor: Option<CursorIcon>,
    view: Box<dyn FnMut(&ViewCtx<'_>) -> Element>,
}

impl EngineApp for UiApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let viewport = Vec2::new(w, h);
        let scale = ctx.window.scale_factor();

        let (mx, my) = ctx.input.pointer_pos.unwrap_or((-1.0, -1.0));
        let input = UiInput {
            mouse_pos: Vec2::new(mx, my),
            mouse_down: ctx.input.button_down(MouseButton::Left),
            mouse_pressed: ctx.input_frame.buttons_pressed.contains(&MouseButton::Left),
            mouse_released: ctx.input_frame.buttons_released.contains(&MouseButton::Left),
            keys_pressed: ctx.input_frame.keys_pressed.clone(),
        };

        // ── build + paint + events ────────────────────────────────────────
        let root = (self.view)(&ViewCtx {
            default_font: self.default_font,
            memory: &self.memory,
            dt: ctx.time.dt,
            viewport,
        });
        let _ = self.scene.frame(root, viewport, scale, &input);
        let cursor = self.scene.cursor();
        if self.cursor != Some(cursor) {
            ctx.window.set_cursor(cursor);
            self.cursor = Some(cursor);
        }

        // ── render ────────────────────────────────────────────────────────
        let list = &self.scene.draw_list;
        let fonts = &self.scene.font_system;
        let renderer = &mut self.renderer;
        ctx.render(self.clear_color, |rctx, target| {
            renderer.render(rctx, target, list, fonts);
        })
    }
}
