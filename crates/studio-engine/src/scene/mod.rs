//! Scene (draw stream) types.
//!
//! A frame is recorded into a [`DrawList`] as quads and text runs, each
//! tagged with a [`Layer`]. Renderers draw layer by layer, quads before text
//! within a layer, and in insertion order inside each group.

mod cmd;
mod layer;
mod list;

pub use cmd::{Border, DrawCmd, QuadCmd, TextCmd};
pub use layer::Layer;
pub use list::{DrawItem, DrawList};
