//! Shape math for the bookmark glyph. Pure functions only; rasterization and
//! file I/O live in the `raster` crate.

/// A polygon vertex in canvas pixel coordinates.
pub type Point = [i32; 2];

/// Inset margin keeping the glyph away from the canvas edges.
pub fn padding(size: u32) -> u32 {
    size / 8
}

/// The five vertices of the bookmark outline, clockwise from the top-left
/// corner. The fourth vertex is the notch apex: the bottom edge is indented
/// upward at the horizontal midpoint, giving the ribbon-tail silhouette.
///
/// Sizes below 8 collapse the padding to zero and the glyph degenerates to
/// near the full canvas; callers get whatever geometry falls out.
pub fn bookmark_polygon(size: u32) -> [Point; 5] {
    let size = size as i32;
    let pad = size / 8;
    let height = size - pad;
    [
        [pad, pad],
        [size - pad, pad],
        [size - pad, height - pad],
        [size / 2, height - 2 * pad],
        [pad, height - pad],
    ]
}

/// Even-odd ray-casting membership test. The bookmark outline is a simple
/// polygon, so even-odd and nonzero winding agree on it.
pub fn polygon_contains(poly: &[Point], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (xi, yi) = (poly[i][0] as f64, poly[i][1] as f64);
        let (xj, yj) = (poly[j][0] as f64, poly[j][1] as f64);
        if (yi > y) != (yj > y) {
            let x_cross = xi + (y - yi) * (xj - xi) / (yj - yi);
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
