//! Synthesis constants and runtime configuration defaults

use std::time::Duration;

// Texture request defaults
/// Default edge length of a generated texture in pixels
pub const DEFAULT_TEXTURE_SIZE: u32 = 32;

/// Number of independent variations generated per prompt
pub const DEFAULT_TEXTURE_COUNT: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed texture dimension
pub const MAX_TEXTURE_DIMENSION: u32 = 4096;

// Advisory service settings
/// Base URL of the local Ollama server
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Model asked for texture parameters
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Upper bound for the capability probe
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

// Generation is much slower than listing models
/// Upper bound for a generation request
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(30);

// Checkerboard fallback settings
/// Number of checker tiles along the shorter edge
pub const FALLBACK_TILES_PER_EDGE: u32 = 8;
/// Checker colour for odd tile parity
pub const FALLBACK_DARK: [u8; 3] = [0x33, 0x33, 0x33];
/// Checker colour for even tile parity
pub const FALLBACK_LIGHT: [u8; 3] = [0x66, 0x66, 0x66];

// Neutral contrast skips post-processing entirely
/// Contrast value that leaves the buffer untouched
pub const NEUTRAL_CONTRAST: f64 = 0.5;

// Output settings
/// Prefix for exported texture filenames
pub const OUTPUT_PREFIX: &str = "texture";
/// Default directory for exported textures
pub const DEFAULT_OUTPUT_DIR: &str = "textures";
/// Age after which exported textures count as stale
pub const STALE_ARTIFACT_MINUTES: u64 = 60;

/// Connection settings for the advisory service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisoryConfig {
    /// Base URL of the Ollama server
    pub base_url: String,
    /// Model name passed to the generate endpoint
    pub model: String,
    /// Timeout for the capability probe
    pub probe_timeout: Duration,
    /// Timeout for the generation call
    pub generate_timeout: Duration,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            probe_timeout: PROBE_TIMEOUT,
            generate_timeout: GENERATE_TIMEOUT,
        }
    }
}

impl AdvisoryConfig {
    /// Build a configuration for the given server and model with default timeouts
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// Full URL of an API path, tolerating a trailing slash on the base
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Shape of one synthesis run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Texture width in pixels
    pub width: u32,
    /// Texture height in pixels
    pub height: u32,
    /// Number of independent textures to produce
    pub count: usize,
    /// Base seed; texture `i` uses `seed + i` when present
    pub seed: Option<u64>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_TEXTURE_SIZE,
            height: DEFAULT_TEXTURE_SIZE,
            count: DEFAULT_TEXTURE_COUNT,
            seed: None,
        }
    }
}
