//! Texture synthesis orchestration

/// Parallel generation of several variations
pub mod batch;
/// Single-texture pipeline and failure boundary
pub mod synthesizer;

pub use batch::synthesize_batch;
pub use synthesizer::{Provenance, Synthesizer, Texture};
