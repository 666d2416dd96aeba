//! Height-field debug renderer with color-coded elevation bands.

use super::image::DebugImage;
use crate::field::HeightField;

/// Map a normalized height `[0, 1]` to an RGB color.
///
/// Color bands: water -> beach -> lowlands -> mountains -> snow.
pub fn height_to_color(normalized: f64) -> (u8, u8, u8) {
    if normalized < 0.3 {
        // Water: blue, darkening with depth
        let t = (normalized / 0.3).clamp(0.0, 1.0);
        (0, (40.0 + t * 40.0) as u8, (128.0 + t * 72.0) as u8)
    } else if normalized < 0.35 {
        // Beach: sandy yellow
        (220, 200, 130)
    } else if normalized < 0.6 {
        // Lowlands: green
        let t = (normalized - 0.35) / 0.25;
        (
            (30.0 + t * 80.0) as u8,
            (160.0 - t * 40.0) as u8,
            (30.0 + t * 20.0) as u8,
        )
    } else if normalized < 0.8 {
        // Mountains: brown
        let t = (normalized - 0.6) / 0.2;
        (
            (110.0 + t * 40.0) as u8,
            (120.0 - t * 50.0) as u8,
            (50.0 + t * 20.0) as u8,
        )
    } else {
        // Snow peaks: white
        let t = ((normalized - 0.8) / 0.2).min(1.0);
        let base = 150.0 + t * 105.0;
        (base as u8, base as u8, base as u8)
    }
}

/// Render a height field to an image, one pixel per vertex.
///
/// The image is `(width + 1) x (depth + 1)` pixels with the depth axis
/// running down the image. Pure read; the field is not modified.
pub fn render_heightfield_debug(field: &HeightField) -> DebugImage {
    let mut image = DebugImage::new(field.width() + 1, field.depth() + 1);

    for z in 0..=field.depth() {
        for x in 0..=field.width() {
            let (r, g, b) = height_to_color(field.get(x, z));
            image.set_pixel(x, z, r, g, b, 255);
        }
    }

    image
}
