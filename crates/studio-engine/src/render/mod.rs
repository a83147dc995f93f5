//! GPU rendering.
//!
//! Renderers consume a [`DrawList`](crate::scene::DrawList) in two phases:
//! `prepare` uploads every instance for the frame once, then `draw` records
//! one pass per layer. Uploading up front matters because
//! `Queue::write_buffer` lands before any command of the frame executes.
//!
//! CPU geometry is in logical pixels; the shaders convert to NDC with a
//! viewport uniform.

mod common;
mod ctx;
mod quad;
mod scene;
mod text;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::QuadRenderer;
pub use scene::SceneRenderer;
pub use text::TextRenderer;
