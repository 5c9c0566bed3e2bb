//! Error types for parameter derivation, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
///
/// None of these ever escape [`crate::engine::synthesizer::Synthesizer::synthesize`];
/// advisory errors collapse into the keyword fallback and rendering errors
/// collapse into the checkerboard buffer.
#[derive(Debug)]
pub enum TextureError {
    /// Network-level failure talking to the advisory service
    AdvisoryTransport {
        /// Endpoint that was being called
        endpoint: String,
        /// Underlying HTTP client error
        source: reqwest::Error,
    },

    /// Advisory service answered with a non-success HTTP status
    AdvisoryStatus {
        /// Endpoint that was being called
        endpoint: String,
        /// HTTP status code returned
        status: u16,
    },

    /// Advisory service is reachable but reports nothing usable
    AdvisoryUnavailable {
        /// Why the service was judged unavailable
        reason: String,
    },

    /// Advisory response carried no parseable parameter object
    MalformedResponse {
        /// What was wrong with the response
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Pixel buffer could not be allocated
    Allocation {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// A renderer failed while painting
    Render {
        /// Pattern family being rendered
        pattern: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to encode or save a texture
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Manifest could not be serialised
    Manifest {
        /// Underlying serialisation error
        source: serde_json::Error,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdvisoryTransport { endpoint, source } => {
                write!(f, "Advisory request to '{endpoint}' failed: {source}")
            }
            Self::AdvisoryStatus { endpoint, status } => {
                write!(f, "Advisory endpoint '{endpoint}' returned status {status}")
            }
            Self::AdvisoryUnavailable { reason } => {
                write!(f, "Advisory service unavailable: {reason}")
            }
            Self::MalformedResponse { reason } => {
                write!(f, "Malformed advisory response: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Allocation { width, height } => {
                write!(f, "Cannot allocate a {width}x{height} pixel buffer")
            }
            Self::Render { pattern, reason } => {
                write!(f, "Renderer '{pattern}' failed: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Manifest { source } => {
                write!(f, "Failed to serialise manifest: {source}")
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AdvisoryTransport { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Manifest { source } => Some(source),
            _ => None,
        }
    }
}

impl TextureError {
    /// True for errors that mean the advisory path should give way to the fallback classifier
    pub const fn is_advisory(&self) -> bool {
        matches!(
            self,
            Self::AdvisoryTransport { .. }
                | Self::AdvisoryStatus { .. }
                | Self::AdvisoryUnavailable { .. }
                | Self::MalformedResponse { .. }
        )
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, TextureError>;

impl From<image::ImageError> for TextureError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TextureError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for TextureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Manifest { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TextureError {
    TextureError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed advisory response error
pub fn malformed(reason: &impl ToString) -> TextureError {
    TextureError::MalformedResponse {
        reason: reason.to_string(),
    }
}

