//! Demo binary that runs the full terrain pipeline: height-field generation,
//! mesh construction, and grid classification, with stats logged along the way.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p strata-demo -- --seed 7 --export-debug` to
//! regenerate with a different seed and dump the debug PNGs.

use std::path::Path;

use clap::Parser;
use glam::DVec2;
use tracing::{info, warn};

use strata_config::{CliArgs, Config, TerrainConfig};
use strata_grid::{TerrainType, classify, render_grid_debug};
use strata_mesh::{ColorGradient, build_terrain_mesh};
use strata_terrain::{DebugImage, GenerationConfig, generate, render_heightfield_debug};

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("strata")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    strata_log::init_logging(None, Some(&config));

    let gen_config = generation_config(&config.terrain);
    let (field, extrema) = match generate(&gen_config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Terrain generation failed: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "Generated {}x{} height field ({} samples), raw extrema [{:.4}, {:.4}]",
        gen_config.width,
        gen_config.depth,
        field.len(),
        extrema.min,
        extrema.max,
    );

    let mesh = build_terrain_mesh(&field, extrema, &gen_config, &ColorGradient::terrain());
    info!(
        "Built terrain mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count(),
    );

    // The classifier addresses the field by flattened index; make sure the
    // grid's index space fits inside the generated sample array.
    let grid_config = &config.grid;
    let fits = grid_config.width > 0
        && grid_config.height > 0
        && (grid_config.width as usize - 1) * grid_config.width as usize
            + grid_config.height as usize
            - 1
            < field.len();
    if !fits {
        warn!(
            "Grid {}x{} does not fit the {}-sample field; skipping classification",
            grid_config.width,
            grid_config.height,
            field.len(),
        );
    } else {
        let (grid, walkable) = classify(grid_config.width, grid_config.height, &field);
        let mountains = grid
            .iter()
            .filter(|node| node.terrain == TerrainType::Mountain)
            .count();
        let grass = grid
            .iter()
            .filter(|node| node.terrain == TerrainType::Grass)
            .count();
        info!(
            "Classified {} cells: {} mountain (walkable), {} grass",
            grid.len(),
            mountains,
            grass,
        );
        debug_assert_eq!(walkable.len(), mountains);

        if config.debug.export_grid {
            export_png(Path::new("grid_debug.png"), &render_grid_debug(&grid));
        }
    }

    if config.debug.export_heightmap {
        export_png(
            Path::new("heightfield_debug.png"),
            &render_heightfield_debug(&field),
        );
    }
}

/// Translate persisted terrain settings into generation parameters.
fn generation_config(terrain: &TerrainConfig) -> GenerationConfig {
    GenerationConfig {
        width: terrain.width,
        depth: terrain.depth,
        seed: terrain.seed,
        octaves: terrain.octaves,
        noise_scale: terrain.noise_scale,
        persistence: terrain.persistence,
        lacunarity: terrain.lacunarity,
        height_multiplier: terrain.height_multiplier,
        height_threshold: terrain.height_threshold,
        offset: DVec2::new(terrain.offset_x, terrain.offset_y),
    }
}

/// Encode a debug image as an RGBA PNG.
fn export_png(path: &Path, image: &DebugImage) {
    let result = (|| -> Result<(), Box<dyn std::error::Error>> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        let mut encoder = png::Encoder::new(writer, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.pixels)?;
        Ok(())
    })();

    match result {
        Ok(()) => info!("Wrote {}", path.display()),
        Err(e) => warn!("Failed to write {}: {e}", path.display()),
    }
}
