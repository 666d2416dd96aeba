//! Debug visualization: 2D image rendering of generated terrain data.
//!
//! Read-only renderers intended for an external debug overlay; nothing here
//! mutates generation output.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{height_to_color, render_heightfield_debug};
