//! Height-field to triangle-mesh conversion.

use glam::{Vec2, Vec3};

use strata_terrain::{GenerationConfig, HeightField, RawExtrema, inverse_lerp};

use crate::gradient::ColorGradient;
use crate::vertex::MeshVertex;

/// Parallel mesh buffers produced from a height field.
///
/// Vertex count is `(width + 1) * (depth + 1)`; index count is
/// `width * depth * 6`. Indices are triangles with a fixed winding that
/// determines the outward normal direction expected by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMesh {
    /// Vertex positions: grid x, stylized height, grid z.
    pub positions: Vec<Vec3>,
    /// Triangle indices, 3 per triangle, 2 triangles per cell.
    pub indices: Vec<u32>,
    /// Texture coordinates mapping the grid into `[0, 1] x [0, 1]`.
    pub uvs: Vec<Vec2>,
    /// Linear RGBA vertex colors from the configured gradient.
    pub colors: Vec<[f32; 4]>,
}

impl TerrainMesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave the parallel buffers into GPU-ready vertices.
    pub fn interleave(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.uvs)
            .zip(&self.colors)
            .map(|((position, uv), color)| MeshVertex {
                position: position.to_array(),
                uv: uv.to_array(),
                color: *color,
            })
            .collect()
    }
}

/// Build mesh buffers from a normalized height field.
///
/// Vertex heights use a plateau/cliff stylization: a normalized height above
/// `config.height_threshold` is scaled by `config.height_multiplier`, while
/// sub-threshold heights stay unscaled. Vertex colors map against the raw
/// pre-normalization extrema scaled by the multiplier; that range is kept
/// as-is even though the heights themselves come from the normalized field.
///
/// The height field is only read; this function has no side effects beyond
/// the returned buffers.
pub fn build_terrain_mesh(
    field: &HeightField,
    extrema: RawExtrema,
    config: &GenerationConfig,
    gradient: &ColorGradient,
) -> TerrainMesh {
    let width = field.width();
    let depth = field.depth();

    let mut positions = Vec::with_capacity(field.len());
    let mut uvs = Vec::with_capacity(field.len());

    for z in 0..=depth {
        for x in 0..=width {
            let h = field.get(x, z);
            let y = if h > config.height_threshold {
                h * config.height_multiplier
            } else {
                h
            };
            positions.push(Vec3::new(x as f32, y as f32, z as f32));
            uvs.push(Vec2::new(x as f32 / width as f32, z as f32 / depth as f32));
        }
    }

    // Two triangles per cell. The winding fixes the outward normal; do not
    // reorder these.
    let mut indices = Vec::with_capacity(width as usize * depth as usize * 6);
    for z in 0..depth {
        for x in 0..width {
            let v = z * (width + 1) + x;
            indices.extend_from_slice(&[
                v,
                v + width + 1,
                v + 1,
                v + 1,
                v + width + 1,
                v + width + 2,
            ]);
        }
    }

    let colors = positions
        .iter()
        .map(|position| vertex_color(gradient, extrema, config.height_multiplier, position.y as f64))
        .collect();

    TerrainMesh {
        positions,
        indices,
        uvs,
        colors,
    }
}

/// Color for a vertex at stored height `y`, mapped against the raw extrema
/// scaled by the height multiplier.
fn vertex_color(
    gradient: &ColorGradient,
    extrema: RawExtrema,
    height_multiplier: f64,
    y: f64,
) -> [f32; 4] {
    let t = inverse_lerp(
        extrema.min * height_multiplier,
        extrema.max * height_multiplier,
        y,
    );
    gradient.evaluate(t as f32)
}
