//! JSON summary of a generation run

use crate::engine::synthesizer::{Provenance, Texture};
use crate::io::error::Result;
use crate::params::model::{Material, Pattern};
use serde::Serialize;
use std::path::PathBuf;

/// One exported texture
#[derive(Debug, Clone, Serialize)]
pub struct TextureEntry {
    /// 1-based position in the batch
    pub id: usize,
    /// File name within the output directory
    pub filename: String,
    /// Full path of the written file
    pub path: PathBuf,
    /// Path that produced the pixels
    pub source: Provenance,
    /// Pattern rendered, absent for the checkerboard fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    /// Material tag, absent for the checkerboard fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
}

impl TextureEntry {
    /// Describe a texture written to `path`
    pub fn new(id: usize, filename: String, path: PathBuf, texture: &Texture) -> Self {
        let parameters = texture.parameters.as_ref();
        Self {
            id,
            filename,
            path,
            source: texture.provenance,
            pattern: parameters.map(crate::params::ParameterModel::pattern),
            material: parameters.map(|p| p.material().clone()),
        }
    }
}

/// Summary printed after a run
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    /// Always true; failures are absorbed into fallbacks
    pub success: bool,
    /// Prompt the textures were generated for
    pub prompt: String,
    /// Texture width in pixels
    pub width: u32,
    /// Texture height in pixels
    pub height: u32,
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    /// Exported textures in batch order
    pub textures: Vec<TextureEntry>,
}

impl RunManifest {
    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
