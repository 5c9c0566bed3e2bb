//! Two-tier parameter derivation: advisory service first, keyword fallback second

use crate::advisory::extract::first_json_object;
use crate::advisory::service::AdvisoryService;
use crate::io::error::{Result, TextureError, malformed};
use crate::params::classifier::classify;
use crate::params::color::Rgb;
use crate::params::model::{Material, ParameterModel, Pattern};
use log::{debug, info, warn};
use serde::Deserialize;

/// Instruction sent to the model; `{prompt}` is replaced with the user's text
pub const INSTRUCTION_TEMPLATE: &str = r##"Analyze this texture description and provide texture generation parameters in JSON format.
Description: "{prompt}"

Respond with JSON containing:
- colors: array of hex colors (3-5 colors)
- pattern: "random", "grid", "organic", "geometric", "noise"
- roughness: number 0-1 (0=smooth, 1=rough)
- contrast: number 0-1
- type: "stone", "wood", "metal", "fabric", "abstract", "nature"

Example: {"colors":["#8B4513","#D2691E","#F4A460"],"pattern":"organic","roughness":0.7,"contrast":0.6,"type":"wood"}"##;

/// Fill the instruction template with a prompt
pub fn build_instruction(prompt: &str) -> String {
    INSTRUCTION_TEMPLATE.replace("{prompt}", prompt)
}

/// Where a parameter model came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterSource {
    /// Parsed from advisory output
    Advisory,
    /// Produced by the keyword classifier
    Heuristic,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Hex(String),
    Channels([u8; 3]),
}

impl From<ColorValue> for Rgb {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Hex(hex) => Self::from_hex(&hex),
            ColorValue::Channels(channels) => Self(channels),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AdvisoryParameters {
    colors: Option<Vec<ColorValue>>,
    pattern: Option<String>,
    roughness: Option<f64>,
    contrast: Option<f64>,
    #[serde(rename = "type")]
    material: Option<String>,
}

/// Parse advisory output into a parameter model
///
/// # Errors
///
/// Returns a malformed-response error if the text holds no JSON object, the
/// object does not parse, or `colors`, `pattern`, `roughness` or `contrast`
/// is missing or unusable
pub fn parse_parameters(text: &str) -> Result<ParameterModel> {
    let json = first_json_object(text).ok_or_else(|| malformed(&"no JSON object in response"))?;
    let raw: AdvisoryParameters =
        serde_json::from_str(json).map_err(|e| malformed(&format!("invalid JSON: {e}")))?;

    let colors: Vec<Rgb> = raw
        .colors
        .ok_or_else(|| malformed(&"missing field 'colors'"))?
        .into_iter()
        .map(Rgb::from)
        .collect();
    let pattern = raw
        .pattern
        .ok_or_else(|| malformed(&"missing field 'pattern'"))?;
    let roughness = raw
        .roughness
        .ok_or_else(|| malformed(&"missing field 'roughness'"))?;
    let contrast = raw
        .contrast
        .ok_or_else(|| malformed(&"missing field 'contrast'"))?;
    let material = raw
        .material
        .as_deref()
        .map_or(Material::Abstract, Material::from_tag);

    ParameterModel::new(
        colors,
        Pattern::from_name(&pattern),
        roughness,
        contrast,
        material,
    )
    .map_err(|e| malformed(&e))
}

/// Asks an advisory service for parameters and falls back to keywords
pub struct ParameterRequester<A> {
    service: A,
    probe_first: bool,
}

impl<A: AdvisoryService> ParameterRequester<A> {
    /// Wrap an advisory service; probing is enabled
    pub const fn new(service: A) -> Self {
        Self {
            service,
            probe_first: true,
        }
    }

    /// Enable or disable the capability probe before each generation
    #[must_use]
    pub const fn with_probe(mut self, probe_first: bool) -> Self {
        self.probe_first = probe_first;
        self
    }

    /// Underlying advisory service
    pub const fn service(&self) -> &A {
        &self.service
    }

    /// Advisory path only, without fallback
    ///
    /// # Errors
    ///
    /// Returns an error if the probe fails or lists no models, the generation
    /// call fails, or its output cannot be parsed
    pub fn request(&self, prompt: &str) -> Result<ParameterModel> {
        if self.probe_first {
            let capabilities = self.service.list_capabilities()?;
            if !capabilities.is_usable() {
                return Err(TextureError::AdvisoryUnavailable {
                    reason: "probe reported no models".to_string(),
                });
            }
            debug!("Advisory models available: {:?}", capabilities.models);
        }

        let generation = self.service.generate(&build_instruction(prompt))?;
        parse_parameters(&generation.text)
    }

    /// Derive parameters, reporting which tier produced them
    pub fn derive_with_source(&self, prompt: &str) -> (ParameterModel, ParameterSource) {
        match self.request(prompt) {
            Ok(model) => {
                info!("Using advisory parameters for \"{prompt}\"");
                (model, ParameterSource::Advisory)
            }
            Err(err) => {
                if matches!(err, TextureError::MalformedResponse { .. }) {
                    warn!("Discarding advisory output: {err}");
                } else {
                    info!("Advisory unavailable: {err}");
                }
                (classify(prompt), ParameterSource::Heuristic)
            }
        }
    }

    /// Derive parameters; never fails
    pub fn derive(&self, prompt: &str) -> ParameterModel {
        self.derive_with_source(prompt).0
    }
}
