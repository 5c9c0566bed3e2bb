//! Organic blobs with stochastic soft edges

use crate::params::color::Rgb;
use crate::params::model::ParameterModel;
use crate::render::canvas::{PixelBuffer, clipped_span, put};
use crate::render::pick_color;
use rand::Rng;

/// Blobs drawn per palette entry
pub const BLOBS_PER_COLOR: usize = 3;

/// Number of blobs for a palette
pub fn blob_count(params: &ParameterModel) -> usize {
    params.colors().len() * BLOBS_PER_COLOR
}

/// Radius range `[min/8, 3·min/8)` for a canvas, where `min` is the shorter side
pub fn radius_bounds(width: u32, height: u32) -> (f64, f64) {
    let shorter = f64::from(width.min(height));
    (shorter / 8.0, shorter * 3.0 / 8.0)
}

/// Draw a blob centre anywhere on the canvas and a radius within [`radius_bounds`]
pub fn random_blob<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> ((f64, f64), f64) {
    let (min_radius, max_radius) = radius_bounds(width, height);
    let center = (
        rng.random::<f64>() * f64::from(width),
        rng.random::<f64>() * f64::from(height),
    );
    let radius = rng
        .random::<f64>()
        .mul_add(max_radius - min_radius, min_radius);
    (center, radius)
}

/// Stamp one disk whose pixels survive with probability `(1 - d/r) · roughness`
///
/// Accepted pixels are painted flat; there is no alpha blending.
pub fn stamp<R: Rng + ?Sized>(
    buffer: &mut PixelBuffer,
    center: (f64, f64),
    radius: f64,
    color: Rgb,
    roughness: f64,
    rng: &mut R,
) {
    let (cx, cy) = center;
    let rgba = color.to_rgba();

    for x in clipped_span(cx, radius, buffer.width()) {
        for y in clipped_span(cy, radius, buffer.height()) {
            let distance = (x as f64 - cx).hypot(y as f64 - cy);
            if distance < radius {
                let falloff = (1.0 - distance / radius).max(0.0);
                if rng.random::<f64>() < falloff * roughness {
                    put(buffer, x, y, rgba);
                }
            }
        }
    }
}

/// Scatter `len(colors) · 3` blobs at uniform centres anywhere on the canvas
///
/// Each blob takes a uniformly random palette colour; later blobs overwrite
/// earlier ones where both pass their random test.
pub fn render<R: Rng + ?Sized>(buffer: &mut PixelBuffer, params: &ParameterModel, rng: &mut R) {
    let (width, height) = buffer.dimensions();

    for _ in 0..blob_count(params) {
        let (center, radius) = random_blob(width, height, rng);
        let color = pick_color(params, rng);
        stamp(buffer, center, radius, color, params.roughness(), rng);
    }
}
