//! Per-texture orchestration with a checkerboard safety net
//!
//! Pipeline: derive parameters, allocate, fill with palette colour 0, paint
//! the pattern, apply contrast. Any error or panic along the way is caught
//! here and replaced by the checkerboard buffer, so callers always receive an
//! image of the requested size.

use crate::advisory::requester::{ParameterRequester, ParameterSource};
use crate::advisory::service::AdvisoryService;
use crate::io::error::{Result, TextureError};
use crate::params::model::ParameterModel;
use crate::render::canvas::{self, PixelBuffer};
use crate::render::checkerboard::checkerboard;
use crate::render::contrast;
use crate::render::{Painter, PatternPainter};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Which path produced a texture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Rendered from advisory parameters
    Advisory,
    /// Rendered from keyword-classifier parameters
    Heuristic,
    /// Checkerboard substituted after a failure
    Fallback,
}

impl From<ParameterSource> for Provenance {
    fn from(source: ParameterSource) -> Self {
        match source {
            ParameterSource::Advisory => Self::Advisory,
            ParameterSource::Heuristic => Self::Heuristic,
        }
    }
}

/// A finished texture with diagnostic details
#[derive(Debug, Clone)]
pub struct Texture {
    /// Rendered pixels, always of the requested size
    pub buffer: PixelBuffer,
    /// Parameters used, absent for the checkerboard fallback
    pub parameters: Option<ParameterModel>,
    /// Path that produced the buffer
    pub provenance: Provenance,
}

/// Turns prompts into pixel buffers
pub struct Synthesizer<A, P = PatternPainter> {
    requester: ParameterRequester<A>,
    painter: P,
}

impl<A: AdvisoryService> Synthesizer<A> {
    /// Create a synthesizer with the standard pattern renderers
    pub const fn new(service: A) -> Self {
        Self::from_requester(ParameterRequester::new(service))
    }

    /// Create a synthesizer around a configured requester
    pub const fn from_requester(requester: ParameterRequester<A>) -> Self {
        Self {
            requester,
            painter: PatternPainter,
        }
    }
}

impl<A: AdvisoryService, P: Painter> Synthesizer<A, P> {
    /// Swap the painter, keeping the requester
    pub fn with_painter<Q: Painter>(self, painter: Q) -> Synthesizer<A, Q> {
        Synthesizer {
            requester: self.requester,
            painter,
        }
    }

    /// Parameter requester in use
    pub const fn requester(&self) -> &ParameterRequester<A> {
        &self.requester
    }

    /// Produce a texture for a prompt; never fails
    pub fn synthesize(&self, prompt: &str, width: u32, height: u32) -> PixelBuffer {
        let mut rng = StdRng::from_os_rng();
        self.synthesize_with_rng(prompt, width, height, &mut rng)
            .buffer
    }

    /// Produce a texture using the given random source; never fails
    pub fn synthesize_with_rng(
        &self,
        prompt: &str,
        width: u32,
        height: u32,
        rng: &mut dyn RngCore,
    ) -> Texture {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let (parameters, source) = self.requester.derive_with_source(prompt);
            self.render(&parameters, width, height, rng)
                .map(|buffer| (buffer, parameters, source))
        }));

        match outcome {
            Ok(Ok((buffer, parameters, source))) => Texture {
                buffer,
                parameters: Some(parameters),
                provenance: source.into(),
            },
            Ok(Err(err)) => {
                warn!("Synthesis failed, substituting checkerboard: {err}");
                Self::fallback(width, height)
            }
            Err(payload) => {
                warn!(
                    "Synthesis panicked, substituting checkerboard: {}",
                    panic_message(payload.as_ref())
                );
                Self::fallback(width, height)
            }
        }
    }

    /// Render known parameters without the fallback boundary
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be allocated or the painter fails.
    /// A panicking painter is reported as [`TextureError::Render`].
    pub fn render(
        &self,
        parameters: &ParameterModel,
        width: u32,
        height: u32,
        rng: &mut dyn RngCore,
    ) -> Result<PixelBuffer> {
        debug!(
            "Rendering {width}x{height} {} texture ({})",
            parameters.pattern(),
            parameters.material()
        );
        let mut buffer = canvas::allocate(width, height)?;
        canvas::fill(&mut buffer, parameters.base_color());
        catch_unwind(AssertUnwindSafe(|| {
            self.painter.paint(&mut buffer, parameters, rng)
        }))
        .map_err(|payload| TextureError::Render {
            pattern: parameters.pattern().name(),
            reason: panic_message(payload.as_ref()).to_string(),
        })??;
        contrast::apply(&mut buffer, parameters.contrast());
        Ok(buffer)
    }

    fn fallback(width: u32, height: u32) -> Texture {
        Texture {
            buffer: checkerboard(width, height),
            parameters: None,
            provenance: Provenance::Fallback,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
