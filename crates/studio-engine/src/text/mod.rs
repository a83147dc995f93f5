//! Font loading and text measurement.
//!
//! Rasterization lives in `render::text`; this module only owns the parsed
//! fonts so the UI can measure strings during layout.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
