//! Contrast curve around mid-grey

use crate::io::configuration::NEUTRAL_CONTRAST;
use crate::render::canvas::PixelBuffer;

/// Mid-grey pivot of the curve
pub const PIVOT: f64 = 128.0;

/// Whether a contrast value leaves the buffer untouched
pub fn is_neutral(contrast: f64) -> bool {
    (contrast - NEUTRAL_CONTRAST).abs() <= f64::EPSILON
}

/// Photographic contrast factor `259(255c + 255) / (255(259 - 255c))`
pub fn factor(contrast: f64) -> f64 {
    let scaled = contrast * 255.0;
    (259.0 * (scaled + 255.0)) / (255.0 * (259.0 - scaled))
}

/// Remap one channel value, evaluated in floating point then clamped and rounded
pub fn adjust_channel(value: u8, factor: f64) -> u8 {
    let adjusted = factor.mul_add(f64::from(value) - PIVOT, PIVOT);
    if adjusted.is_nan() {
        return value;
    }
    adjusted.clamp(0.0, 255.0).round() as u8
}

/// Apply the curve to the RGB channels of every pixel; alpha is untouched
///
/// A neutral contrast returns without touching the buffer.
pub fn apply(buffer: &mut PixelBuffer, contrast: f64) {
    if is_neutral(contrast) {
        return;
    }

    let factor = factor(contrast);
    for pixel in buffer.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            *channel = adjust_channel(*channel, factor);
        }
    }
}
