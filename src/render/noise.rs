//! Per-pixel noise: recolour pixels with jittered palette colours

use crate::params::color::Rgb;
use crate::params::model::ParameterModel;
use crate::render::canvas::PixelBuffer;
use crate::render::pick_color;
use image::Rgba;
use rand::Rng;

/// Half-width of the brightness jitter applied to a recoloured pixel
pub const JITTER_AMPLITUDE: f64 = 25.0;

/// Shift all three channels of a colour by the same offset, clamped per channel
pub fn jitter(color: Rgb, offset: f64) -> Rgba<u8> {
    let shift = |channel: u8| (f64::from(channel) + offset).clamp(0.0, 255.0).round() as u8;
    Rgba([shift(color.r()), shift(color.g()), shift(color.b()), u8::MAX])
}

/// Recolour each pixel with probability `roughness`
///
/// A recoloured pixel takes a uniformly chosen palette colour shifted by one
/// offset drawn from `[-25, 25)`.
pub fn render<R: Rng + ?Sized>(buffer: &mut PixelBuffer, params: &ParameterModel, rng: &mut R) {
    let roughness = params.roughness();

    for pixel in buffer.pixels_mut() {
        if rng.random::<f64>() < roughness {
            let color = pick_color(params, rng);
            let offset = (rng.random::<f64>() - 0.5) * 2.0 * JITTER_AMPLITUDE;
            *pixel = jitter(color, offset);
        }
    }
}
