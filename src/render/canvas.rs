//! Pixel buffer allocation and bounds-checked painting

use crate::io::error::{Result, TextureError};
use crate::params::color::Rgb;
use image::{Rgba, RgbaImage};
use log::debug;

/// Row-major RGBA pixel buffer exclusively owned by one synthesis call
pub type PixelBuffer = RgbaImage;

/// Allocate a fully transparent buffer
///
/// The backing storage is reserved fallibly so that an oversized request
/// surfaces as an error instead of aborting the process.
///
/// # Errors
///
/// Returns an allocation error if the byte size overflows or cannot be reserved
pub fn allocate(width: u32, height: u32) -> Result<PixelBuffer> {
    let allocation_error = TextureError::Allocation { width, height };
    let Some(len) = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
    else {
        return Err(allocation_error);
    };

    let mut data = Vec::new();
    if let Err(reason) = data.try_reserve_exact(len) {
        debug!("Reserving {len} bytes failed: {reason}");
        return Err(allocation_error);
    }
    data.resize(len, 0);

    RgbaImage::from_raw(width, height, data).ok_or(allocation_error)
}

/// Overwrite every pixel with an opaque colour
pub fn fill(buffer: &mut PixelBuffer, color: Rgb) {
    let rgba = color.to_rgba();
    for pixel in buffer.pixels_mut() {
        *pixel = rgba;
    }
}

/// Paint one pixel given signed coordinates
///
/// Coordinates outside the buffer are skipped, never wrapped or clamped.
/// Returns whether a pixel was written.
pub fn put(buffer: &mut PixelBuffer, x: i64, y: i64, color: Rgba<u8>) -> bool {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return false;
    };
    buffer.get_pixel_mut_checked(x, y).is_some_and(|pixel| {
        *pixel = color;
        true
    })
}

/// Half-open pixel span `[lo, hi)` covering `[center - radius, center + radius]`, clipped to `[0, limit)`
pub fn clipped_span(center: f64, radius: f64, limit: u32) -> std::ops::Range<i64> {
    let lo = (center - radius).floor().max(0.0) as i64;
    let hi = ((center + radius).ceil() + 1.0).min(f64::from(limit)) as i64;
    lo..hi.max(lo)
}
