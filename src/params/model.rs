//! Generation parameters driving one texture
//!
//! A [`ParameterModel`] is produced either by the advisory service or by the
//! keyword classifier and is never mutated afterwards. The palette is
//! guaranteed non-empty; index 0 is the base fill colour.

use crate::io::error::{Result, invalid_parameter};
use crate::params::color::Rgb;
use serde::Serialize;
use std::fmt;

/// Pattern family selecting one renderer
///
/// Parsing is total: any name that is not one of the four dedicated families
/// lands on [`Pattern::Random`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Per-pixel stochastic recolouring
    Noise,
    /// Flat checker of palette tiles
    Grid,
    /// Soft-edged random blobs
    Organic,
    /// Overlapping rectangles and disks
    Geometric,
    /// Scattered single pixels
    Random,
}

impl Pattern {
    /// All pattern families in dispatch order
    pub const ALL: [Self; 5] = [
        Self::Noise,
        Self::Grid,
        Self::Organic,
        Self::Geometric,
        Self::Random,
    ];

    /// Map a free-form name to a pattern, defaulting to random
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "noise" => Self::Noise,
            "grid" => Self::Grid,
            "organic" => Self::Organic,
            "geometric" => Self::Geometric,
            _ => Self::Random,
        }
    }

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noise => "noise",
            Self::Grid => "grid",
            Self::Organic => "organic",
            Self::Geometric => "geometric",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Informational material class, kept for display only
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Material {
    /// Wood and bark
    Wood,
    /// Stone, rock and masonry
    Stone,
    /// Metal surfaces
    Metal,
    /// Woven fabric
    Fabric,
    /// Grass, leaves and other vegetation
    Nature,
    /// Anything without a physical material
    Abstract,
    /// Tag the advisory service invented
    Other(String),
}

impl Material {
    /// Map a tag to a material, keeping unknown tags verbatim
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "wood" => Self::Wood,
            "stone" => Self::Stone,
            "metal" => Self::Metal,
            "fabric" => Self::Fabric,
            "nature" => Self::Nature,
            "abstract" | "" => Self::Abstract,
            _ => Self::Other(tag.trim().to_string()),
        }
    }

    /// Tag as it appears in advisory output
    pub fn tag(&self) -> &str {
        match self {
            Self::Wood => "wood",
            Self::Stone => "stone",
            Self::Metal => "metal",
            Self::Fabric => "fabric",
            Self::Nature => "nature",
            Self::Abstract => "abstract",
            Self::Other(tag) => tag,
        }
    }
}

impl From<Material> for String {
    fn from(material: Material) -> Self {
        material.tag().to_string()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Palette, pattern and tuning values for one texture
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParameterModel {
    colors: Vec<Rgb>,
    pattern: Pattern,
    roughness: f64,
    contrast: f64,
    #[serde(rename = "type")]
    material: Material,
}

impl ParameterModel {
    /// Assemble a parameter model
    ///
    /// Roughness and contrast are stored as given; consumers clamp what they derive from them.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or either tuning value is not finite
    pub fn new(
        colors: Vec<Rgb>,
        pattern: Pattern,
        roughness: f64,
        contrast: f64,
        material: Material,
    ) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "colors",
                &"[]",
                &"palette must contain at least one colour",
            ));
        }
        if !roughness.is_finite() {
            return Err(invalid_parameter(
                "roughness",
                &roughness,
                &"must be a finite number",
            ));
        }
        if !contrast.is_finite() {
            return Err(invalid_parameter(
                "contrast",
                &contrast,
                &"must be a finite number",
            ));
        }

        Ok(Self {
            colors,
            pattern,
            roughness,
            contrast,
            material,
        })
    }

    // Keyword literals are known-good, so they skip validation
    pub(crate) fn from_literal(
        colors: Vec<Rgb>,
        pattern: Pattern,
        roughness: f64,
        contrast: f64,
        material: Material,
    ) -> Self {
        debug_assert!(!colors.is_empty());
        Self {
            colors,
            pattern,
            roughness,
            contrast,
            material,
        }
    }

    /// Ordered palette; never empty
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Base fill colour (palette index 0)
    pub fn base_color(&self) -> Rgb {
        self.colors.first().copied().unwrap_or(Rgb([0, 0, 0]))
    }

    /// Palette entry at `index` wrapped modulo the palette length
    pub fn color_cycled(&self, index: usize) -> Rgb {
        self.colors
            .get(index % self.colors.len().max(1))
            .copied()
            .unwrap_or_else(|| self.base_color())
    }

    /// Pattern family to render
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Probability/density control, conventionally in [0, 1]
    pub const fn roughness(&self) -> f64 {
        self.roughness
    }

    /// Contrast curve strength; 0.5 is neutral
    pub const fn contrast(&self) -> f64 {
        self.contrast
    }

    /// Informational material class
    pub const fn material(&self) -> &Material {
        &self.material
    }
}
