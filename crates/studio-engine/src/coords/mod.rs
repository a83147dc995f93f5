//! Geometry in logical pixels.
//!
//! Origin is the top-left corner of the window, +X right, +Y down. Physical
//! pixels only appear inside the renderers, which scale by the window's
//! scale factor and convert to NDC in the shaders.

mod corner_radii;
mod rect;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
