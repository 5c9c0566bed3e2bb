//! Advisory service abstraction and parameter derivation

/// Locating JSON objects in model output
pub mod extract;
/// HTTP client for a local Ollama server
pub mod ollama;
/// Advisory-then-fallback parameter derivation
pub mod requester;
/// Advisory capability trait and null service
pub mod service;

pub use ollama::OllamaAdvisory;
pub use requester::{ParameterRequester, ParameterSource};
pub use service::{AdvisoryService, Capabilities, Generation, UnavailableAdvisory};
