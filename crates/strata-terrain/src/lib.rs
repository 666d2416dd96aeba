//! Procedural height-field synthesis from layered noise.
//!
//! Composites multiple octaves of Perlin noise into a normalized 2D height
//! field with seeded, reproducible sample offsets, and exposes the raw
//! pre-normalization extrema for downstream color mapping.

mod config;
mod field;
mod noise_field;

pub mod debug_viz;

pub use config::{GenerationConfig, GenerationError};
pub use debug_viz::{DebugImage, height_to_color, render_heightfield_debug};
pub use field::{HeightField, RawExtrema, inverse_lerp};
pub use noise_field::generate;
