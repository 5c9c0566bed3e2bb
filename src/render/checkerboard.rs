//! Last-resort checkerboard used when synthesis fails

use crate::io::configuration::{FALLBACK_DARK, FALLBACK_LIGHT, FALLBACK_TILES_PER_EDGE};
use crate::render::canvas::PixelBuffer;
use image::Rgba;

/// Tile edge: the shorter side divided by the tile count, at least 1
pub fn tile_size(width: u32, height: u32) -> u32 {
    (width.min(height) / FALLBACK_TILES_PER_EDGE).max(1)
}

/// Colour of the tile at a tile column and row
pub const fn tile_color(column: u32, row: u32) -> Rgba<u8> {
    let [r, g, b] = if (column + row) % 2 == 1 {
        FALLBACK_DARK
    } else {
        FALLBACK_LIGHT
    };
    Rgba([r, g, b, u8::MAX])
}

/// Opaque two-tone checkerboard of the requested size
///
/// Depends on nothing but the dimensions.
pub fn checkerboard(width: u32, height: u32) -> PixelBuffer {
    let tile = tile_size(width, height);
    PixelBuffer::from_fn(width, height, |x, y| tile_color(x / tile, y / tile))
}
