//! Studio engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the UI layer: the winit
//! event loop, the wgpu surface, input translation, the paint model, the
//! layered draw list and the renderers that consume it.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
