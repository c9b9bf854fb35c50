use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geometry::{bookmark_polygon, polygon_contains};
use image::{Rgba, RgbaImage};

/// The extension's brand blue, #3B82F6, fully opaque.
pub const BOOKMARK_BLUE: Rgba<u8> = Rgba([59, 130, 246, 255]);

/// Rasterize the bookmark glyph onto a transparent square canvas.
///
/// Pure transformation: the canvas starts fully transparent and every pixel
/// whose center falls inside the bookmark polygon is set to `color`. Nothing
/// else is touched, so two calls with the same arguments are pixel-identical.
pub fn render(size: u32, color: Rgba<u8>) -> RgbaImage {
    let poly = bookmark_polygon(size);
    let mut img = RgbaImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            // sample at the pixel center
            if polygon_contains(&poly, x as f64 + 0.5, y as f64 + 0.5) {
                img.put_pixel(x, y, color);
            }
        }
    }
    img
}

/// Render one icon and write it under `dir` as `icon-{size}.png`,
/// overwriting any existing file. Returns the written path.
pub fn write_icon(dir: &Path, size: u32, color: Rgba<u8>) -> Result<PathBuf> {
    let path = dir.join(format!("icon-{size}.png"));
    render(size, color)
        .save(&path)
        .with_context(|| format!("saving {}", path.display()))?;
    Ok(path)
}
