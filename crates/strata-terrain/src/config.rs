//! Generation parameters and their eager validation.

use glam::DVec2;

/// Errors reported before any terrain data is allocated.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Width or depth is zero; the vertex grid would be degenerate.
    #[error("terrain dimensions must be at least 1x1, got {width}x{depth}")]
    InvalidDimensions {
        /// Requested mesh width in cells.
        width: u32,
        /// Requested mesh depth in cells.
        depth: u32,
    },

    /// Noise scale is zero or negative; sample coordinates divide by it.
    #[error("noise scale must be positive, got {0}")]
    InvalidNoiseScale(f64),

    /// Octave count is zero; the fractal sum would be empty.
    #[error("octave count must be at least 1")]
    InvalidOctaves,
}

/// Configuration for multi-octave height-field generation.
///
/// Width and depth are the mesh extent in cells; the generated field covers
/// the `(width + 1) x (depth + 1)` vertex grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Mesh width in cells. Must be at least 1.
    pub width: u32,
    /// Mesh depth in cells. Must be at least 1.
    pub depth: u32,
    /// Seed for the per-octave sample-offset sequence.
    pub seed: u64,
    /// Number of noise octaves to composite. Must be at least 1.
    pub octaves: u32,
    /// Spatial scale divisor applied to sample coordinates. Must be positive;
    /// larger values produce broader features.
    pub noise_scale: f64,
    /// Amplitude decay per octave, typically in `[0, 1]`.
    pub persistence: f64,
    /// Frequency growth per octave, typically >= 1.
    pub lacunarity: f64,
    /// Vertical scale applied to vertices above `height_threshold`.
    pub height_multiplier: f64,
    /// Threshold compared against the unscaled normalized height.
    pub height_threshold: f64,
    /// User offset added to every octave's sample-space offset.
    pub offset: DVec2,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 100,
            depth: 100,
            seed: 0,
            octaves: 4,
            noise_scale: 27.6,
            persistence: 0.5,
            lacunarity: 2.0,
            height_multiplier: 10.0,
            height_threshold: 0.5,
            offset: DVec2::ZERO,
        }
    }
}

impl GenerationConfig {
    /// Check the configuration, rejecting values that would produce a
    /// degenerate grid or non-finite samples.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width == 0 || self.depth == 0 {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                depth: self.depth,
            });
        }
        if self.noise_scale <= 0.0 {
            return Err(GenerationError::InvalidNoiseScale(self.noise_scale));
        }
        if self.octaves == 0 {
            return Err(GenerationError::InvalidOctaves);
        }
        Ok(())
    }

    /// Number of vertices in the generated field: `(width + 1) * (depth + 1)`.
    pub fn vertex_count(&self) -> usize {
        (self.width as usize + 1) * (self.depth as usize + 1)
    }
}
