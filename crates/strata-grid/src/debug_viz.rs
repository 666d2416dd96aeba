//! Debug rendering of a classified grid, one colored pixel per cell.

use strata_terrain::DebugImage;

use crate::classify::{Grid, TerrainType};

/// Overlay color for a terrain category.
pub fn terrain_color(terrain: TerrainType) -> (u8, u8, u8) {
    match terrain {
        TerrainType::Grass => (0, 255, 0),
        TerrainType::Mountain => (0, 0, 0),
        TerrainType::Water => (0, 0, 255),
        TerrainType::Sand => (255, 255, 0),
    }
}

/// Render a classified grid to an image, one pixel per cell.
///
/// Pure read over the grid; classification state is never mutated.
pub fn render_grid_debug(grid: &Grid) -> DebugImage {
    let mut image = DebugImage::new(grid.width(), grid.height());

    for node in grid.iter() {
        let (r, g, b) = terrain_color(node.terrain);
        image.set_pixel(node.position.x as u32, node.position.z as u32, r, g, b, 255);
    }

    image
}
