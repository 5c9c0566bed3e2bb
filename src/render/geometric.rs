//! Overlapping flat rectangles and disks

use crate::params::color::Rgb;
use crate::params::model::ParameterModel;
use crate::render::canvas::{PixelBuffer, clipped_span, put};
use rand::Rng;

/// Number of shapes for a canvas: a quarter of the shorter side
pub fn shape_count(width: u32, height: u32) -> usize {
    (width.min(height) / 4) as usize
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Width in pixels
    pub width: i64,
    /// Height in pixels
    pub height: i64,
}

impl Rect {
    /// Draw a rectangle with its corner in the first 70% of each axis and
    /// each side in `[10%, 40%)` of that axis
    pub fn random<R: Rng + ?Sized>(canvas_width: u32, canvas_height: u32, rng: &mut R) -> Self {
        let w = f64::from(canvas_width);
        let h = f64::from(canvas_height);
        let x = (rng.random::<f64>() * w * 0.7).floor() as i64;
        let y = (rng.random::<f64>() * h * 0.7).floor() as i64;
        let width = (rng.random::<f64>() * w).mul_add(0.3, w * 0.1).floor() as i64;
        let height = (rng.random::<f64>() * h).mul_add(0.3, h * 0.1).floor() as i64;
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Fill the rectangle, skipping pixels past the buffer edge
    pub fn fill(self, buffer: &mut PixelBuffer, color: Rgb) {
        let rgba = color.to_rgba();
        for x in self.x..self.x + self.width {
            for y in self.y..self.y + self.height {
                put(buffer, x, y, rgba);
            }
        }
    }
}

/// Disk in canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
    /// Centre, anywhere on the canvas
    pub center: (f64, f64),
    /// Radius in pixels
    pub radius: f64,
}

impl Disk {
    /// Draw a disk centred anywhere on the canvas with radius in
    /// `[5%, 25%)` of the shorter side
    pub fn random<R: Rng + ?Sized>(canvas_width: u32, canvas_height: u32, rng: &mut R) -> Self {
        let w = f64::from(canvas_width);
        let h = f64::from(canvas_height);
        let shorter = w.min(h);
        let center = (rng.random::<f64>() * w, rng.random::<f64>() * h);
        let radius = (rng.random::<f64>() * shorter).mul_add(0.2, shorter * 0.05);
        Self { center, radius }
    }

    /// Fill the disk, skipping pixels past the buffer edge
    pub fn fill(self, buffer: &mut PixelBuffer, color: Rgb) {
        fill_disk(buffer, self.center, self.radius, color);
    }
}

/// Fill every pixel strictly closer than `radius` to `center`
pub fn fill_disk(buffer: &mut PixelBuffer, center: (f64, f64), radius: f64, color: Rgb) {
    let (cx, cy) = center;
    let rgba = color.to_rgba();
    for x in clipped_span(cx, radius, buffer.width()) {
        for y in clipped_span(cy, radius, buffer.height()) {
            if (x as f64 - cx).hypot(y as f64 - cy) < radius {
                put(buffer, x, y, rgba);
            }
        }
    }
}

/// Draw `min(w, h) / 4` shapes, each a rectangle or disk by a fair coin
///
/// Shape `i` uses palette colour `i mod len`. Disks are centred anywhere on
/// the canvas with radius in `[5%, 25%)` of the shorter side. Later shapes
/// fully overwrite earlier ones.
pub fn render<R: Rng + ?Sized>(buffer: &mut PixelBuffer, params: &ParameterModel, rng: &mut R) {
    let (canvas_width, canvas_height) = buffer.dimensions();

    for index in 0..shape_count(canvas_width, canvas_height) {
        let color = params.color_cycled(index);

        if rng.random_bool(0.5) {
            Rect::random(canvas_width, canvas_height, rng).fill(buffer, color);
        } else {
            Disk::random(canvas_width, canvas_height, rng).fill(buffer, color);
        }
    }
}
