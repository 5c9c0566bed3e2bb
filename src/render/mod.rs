//! Pattern renderers, post-processing and the pattern dispatch

/// Buffer allocation and bounds-checked painting
pub mod canvas;
/// Checkerboard fallback buffer
pub mod checkerboard;
/// Contrast post-processing
pub mod contrast;
/// Overlapping rectangles and disks
pub mod geometric;
/// Flat diagonal palette tiles
pub mod grid;
/// Per-pixel jittered recolouring
pub mod noise;
/// Soft-edged stochastic blobs
pub mod organic;
/// Scattered single pixels
pub mod random;

pub use canvas::PixelBuffer;

use crate::io::error::Result;
use crate::params::color::Rgb;
use crate::params::model::{ParameterModel, Pattern};
use rand::{Rng, RngCore};

/// Uniformly random palette colour
pub fn pick_color<R: Rng + ?Sized>(params: &ParameterModel, rng: &mut R) -> Rgb {
    let len = params.colors().len().max(1);
    params.color_cycled(rng.random_range(0..len))
}

/// Paints a pattern into a buffer that already holds the base fill
pub trait Painter: Send + Sync {
    /// Render the pattern selected by `params` into `buffer`
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern cannot be rendered
    fn paint(
        &self,
        buffer: &mut PixelBuffer,
        params: &ParameterModel,
        rng: &mut dyn RngCore,
    ) -> Result<()>;
}

/// Dispatches each [`Pattern`] to its renderer
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternPainter;

impl Painter for PatternPainter {
    fn paint(
        &self,
        buffer: &mut PixelBuffer,
        params: &ParameterModel,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        match params.pattern() {
            Pattern::Noise => noise::render(buffer, params, rng),
            Pattern::Grid => grid::render(buffer, params),
            Pattern::Organic => organic::render(buffer, params, rng),
            Pattern::Geometric => geometric::render(buffer, params, rng),
            Pattern::Random => random::render(buffer, params, rng),
        }
        Ok(())
    }
}
