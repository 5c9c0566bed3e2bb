//! Abstract advisory capability and its null implementation

use crate::io::error::{Result, TextureError};

/// Result of a capability probe
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether the service answered the probe meaningfully
    pub available: bool,
    /// Names of the models the service can run
    pub models: Vec<String>,
}

impl Capabilities {
    /// A probe is only worth following up when it lists at least one model
    pub const fn is_usable(&self) -> bool {
        self.available && !self.models.is_empty()
    }
}

/// Text returned by a generation call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    /// Raw model output, possibly prose wrapped around JSON
    pub text: String,
}

/// Best-effort source of texture parameters
///
/// Implementations must bound both calls with their own timeouts. Failures of
/// any kind are reported as errors and never retried by callers.
pub trait AdvisoryService: Send + Sync {
    /// Lightweight availability probe
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or answers with a failure status
    fn list_capabilities(&self) -> Result<Capabilities>;

    /// Run one generation for the given instruction text
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached, times out, or returns no text
    fn generate(&self, instruction: &str) -> Result<Generation>;
}

impl<T: AdvisoryService + ?Sized> AdvisoryService for Box<T> {
    fn list_capabilities(&self) -> Result<Capabilities> {
        (**self).list_capabilities()
    }

    fn generate(&self, instruction: &str) -> Result<Generation> {
        (**self).generate(instruction)
    }
}

/// Advisory service that is never available
///
/// Used for offline runs and for exercising the keyword fallback in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableAdvisory;

impl AdvisoryService for UnavailableAdvisory {
    fn list_capabilities(&self) -> Result<Capabilities> {
        Err(TextureError::AdvisoryUnavailable {
            reason: "advisory service disabled".to_string(),
        })
    }

    fn generate(&self, _instruction: &str) -> Result<Generation> {
        Err(TextureError::AdvisoryUnavailable {
            reason: "advisory service disabled".to_string(),
        })
    }
}
