//! Grid-cell terrain classification for gameplay consumers.
//!
//! Samples a noise source per cell, assigns a terrain category and traversal
//! cost, and accumulates the walkable subset. The classification grid is
//! decoupled from the mesh: it has its own dimensions and noise space.

mod classify;
mod debug_viz;
mod noise_source;

pub use classify::{Grid, Node, TerrainType, WalkableSet, classify};
pub use debug_viz::{render_grid_debug, terrain_color};
pub use noise_source::{ConstantNoise, NoiseSource};
