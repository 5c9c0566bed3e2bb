//! Texture generation parameters and their keyword-based derivation

/// Keyword fallback classifier
pub mod classifier;
/// Palette colours and hex conversion
pub mod color;
/// Parameter model, pattern families and material tags
pub mod model;

pub use classifier::classify;
pub use color::Rgb;
pub use model::{Material, ParameterModel, Pattern};
