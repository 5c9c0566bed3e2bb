//! Input/output operations, configuration and error handling

/// Stale texture pruning
pub mod cleanup;
/// Command-line interface
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error type shared across the crate
pub mod error;
/// PNG encoding and export
pub mod image;
/// JSON run manifest
pub mod manifest;
/// Batch progress display
pub mod progress;
