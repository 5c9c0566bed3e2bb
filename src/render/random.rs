//! Scattered single pixels
//!
//! The nominal draw count is `floor(w · h · roughness)`. Roughness is never
//! clamped when a model is built, so the count is additionally bounded by
//! [`MAX_DRAWS_PER_PIXEL`]` · w · h`; above a roughness of 4 that bound wins
//! over the formula and keeps a render from running unbounded.

use crate::params::model::ParameterModel;
use crate::render::canvas::PixelBuffer;
use crate::render::pick_color;
use rand::Rng;

/// Upper bound on scatter draws as a multiple of the pixel count
pub const MAX_DRAWS_PER_PIXEL: f64 = 4.0;

/// Number of draws: `floor(w · h · min(roughness, 4))`
pub fn scatter_count(width: u32, height: u32, roughness: f64) -> usize {
    let pixels = f64::from(width) * f64::from(height);
    (pixels * roughness.min(MAX_DRAWS_PER_PIXEL)).floor().max(0.0) as usize
}

/// Paint uniformly random positions with uniformly random palette colours
///
/// Positions are drawn with replacement, so realised coverage is usually
/// below the nominal count.
pub fn render<R: Rng + ?Sized>(buffer: &mut PixelBuffer, params: &ParameterModel, rng: &mut R) {
    let (width, height) = buffer.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    for _ in 0..scatter_count(width, height, params.roughness()) {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let color = pick_color(params, rng);
        if let Some(pixel) = buffer.get_pixel_mut_checked(x, y) {
            *pixel = color.to_rgba();
        }
    }
}
