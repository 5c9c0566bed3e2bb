//! Ollama-backed advisory service over HTTP

use crate::advisory::service::{AdvisoryService, Capabilities, Generation};
use crate::io::configuration::AdvisoryConfig;
use crate::io::error::{Result, TextureError, malformed};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct TagsResponse {
    models: Option<Vec<ModelEntry>>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Talks to a local Ollama server
///
/// `GET /api/tags` serves as the capability probe and `POST /api/generate`
/// (non-streaming) as the generation call. Each call carries its own timeout
/// from [`AdvisoryConfig`].
#[derive(Debug, Clone)]
pub struct OllamaAdvisory {
    config: AdvisoryConfig,
    client: Client,
}

impl OllamaAdvisory {
    /// Create a client for the configured server
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: AdvisoryConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| TextureError::AdvisoryTransport {
                endpoint: config.base_url.clone(),
                source,
            })?;
        Ok(Self { config, client })
    }

    /// Connection settings in use
    pub const fn config(&self) -> &AdvisoryConfig {
        &self.config
    }

    fn check_status(endpoint: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(TextureError::AdvisoryStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

impl AdvisoryService for OllamaAdvisory {
    fn list_capabilities(&self) -> Result<Capabilities> {
        let endpoint = self.config.endpoint("/api/tags");
        let transport = |source| TextureError::AdvisoryTransport {
            endpoint: endpoint.clone(),
            source,
        };

        let response = self
            .client
            .get(&endpoint)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.config.probe_timeout)
            .send()
            .map_err(transport)?;
        let tags: TagsResponse = Self::check_status(&endpoint, response)?
            .json()
            .map_err(transport)?;

        Ok(tags.models.map_or_else(Capabilities::default, |models| {
            Capabilities {
                available: true,
                models: models.into_iter().map(|entry| entry.name).collect(),
            }
        }))
    }

    fn generate(&self, instruction: &str) -> Result<Generation> {
        let endpoint = self.config.endpoint("/api/generate");
        let transport = |source| TextureError::AdvisoryTransport {
            endpoint: endpoint.clone(),
            source,
        };

        let request = GenerateRequest {
            model: &self.config.model,
            prompt: instruction,
            stream: false,
        };
        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .timeout(self.config.generate_timeout)
            .send()
            .map_err(transport)?;
        let body: GenerateResponse = Self::check_status(&endpoint, response)?
            .json()
            .map_err(transport)?;

        match body.response {
            Some(text) if !text.trim().is_empty() => Ok(Generation { text }),
            _ => Err(malformed(&"generation returned no text")),
        }
    }
}
