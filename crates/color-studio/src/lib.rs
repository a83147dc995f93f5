//! Color Studio: pick a background color or a two-stop gradient, keep
//! favorites, copy the current color and switch the text between light and
//! dark.
//!
//! [`ColorStudio`] holds the state and every operation on it; the rest of
//! the crate presents it through `studio-ui`.

pub mod backdrop;
pub mod clipboard;
pub mod color;
pub mod config;
pub mod fade;
pub mod gradient;
pub mod state;
pub mod view;

pub use clipboard::{Clipboard, ClipboardError, Notifier, SystemClipboard};
pub use config::StudioConfig;
pub use gradient::GradientDirection;
pub use state::{Background, ColorStudio};
