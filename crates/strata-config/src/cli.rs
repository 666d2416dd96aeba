//! Command-line argument parsing for the strata pipeline.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Strata terrain pipeline command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Procedural terrain generation pipeline")]
pub struct CliArgs {
    /// Generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mesh width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Mesh depth in cells.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Noise scale divisor.
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// Classification grid width in cells.
    #[arg(long)]
    pub grid_width: Option<u32>,

    /// Classification grid height in cells.
    #[arg(long)]
    pub grid_height: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Export debug PNGs for the height field and classified grid.
    #[arg(long)]
    pub export_debug: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(width) = args.width {
            self.terrain.width = width;
        }
        if let Some(depth) = args.depth {
            self.terrain.depth = depth;
        }
        if let Some(octaves) = args.octaves {
            self.terrain.octaves = octaves;
        }
        if let Some(scale) = args.noise_scale {
            self.terrain.noise_scale = scale;
        }
        if let Some(width) = args.grid_width {
            self.grid.width = width;
        }
        if let Some(height) = args.grid_height {
            self.grid.height = height;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.export_debug {
            self.debug.export_heightmap = true;
            self.debug.export_grid = true;
        }
    }
}
