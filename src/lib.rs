//! Prompt-driven procedural texture synthesis
//!
//! A short description is turned into a parameter set (palette, pattern
//! family, roughness, contrast, material) by asking a language model, with a
//! deterministic keyword classifier taking over whenever the model is
//! unavailable or answers with something unusable. The parameters drive one
//! of five pixel renderers followed by a contrast curve. Synthesis never
//! fails: any fault is replaced by a checkerboard of the requested size.

#![forbid(unsafe_code)]

/// Advisory service abstraction and two-tier parameter derivation
pub mod advisory;
/// Per-texture pipeline and batch generation
pub mod engine;
/// Input/output operations, configuration and error handling
pub mod io;
/// Parameter model and keyword fallback classifier
pub mod params;
/// Pattern renderers and post-processing
pub mod render;

pub use engine::synthesizer::{Provenance, Synthesizer, Texture};
pub use io::error::{Result, TextureError};
pub use params::model::{ParameterModel, Pattern};
pub use render::canvas::PixelBuffer;
