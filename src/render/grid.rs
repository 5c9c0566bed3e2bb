//! Flat palette tiles cycling diagonally

use crate::params::model::ParameterModel;
use crate::render::canvas::PixelBuffer;

/// Smallest tile edge the grid will use
pub const MIN_TILE_SIZE: u32 = 2;

/// Tile edge: an eighth of the shorter side, at least [`MIN_TILE_SIZE`]
pub fn tile_size(width: u32, height: u32) -> u32 {
    (width.min(height) / 8).max(MIN_TILE_SIZE)
}

/// Fill each tile with `colors[(column + row) mod len]`
///
/// Tiles at the right and bottom edges are cut off by the buffer bounds.
pub fn render(buffer: &mut PixelBuffer, params: &ParameterModel) {
    let tile = tile_size(buffer.width(), buffer.height());

    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        let index = (x / tile + y / tile) as usize;
        *pixel = params.color_cycled(index).to_rgba();
    }
}
