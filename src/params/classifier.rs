//! Keyword fallback used whenever the advisory service cannot help
//!
//! Groups are tested in order and the first group with any keyword present in
//! the lower-cased prompt wins, so "wood and stone" resolves to wood.

use crate::params::color::Rgb;
use crate::params::model::{Material, ParameterModel, Pattern};

/// One keyword group and the parameters it yields
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    /// Substrings that select this group
    pub keywords: &'static [&'static str],
    /// Palette as packed `0xRRGGBB` values
    pub palette: &'static [u32],
    /// Pattern family
    pub pattern: Pattern,
    /// Roughness value
    pub roughness: f64,
    /// Contrast value
    pub contrast: f64,
    /// Material tag
    pub material: &'static str,
}

/// Ordered keyword groups; order decides ties
pub static KEYWORD_GROUPS: [KeywordGroup; 4] = [
    KeywordGroup {
        keywords: &["wood", "bark"],
        palette: &[0x8B_4513, 0xD2_691E, 0xF4_A460, 0x65_4321],
        pattern: Pattern::Organic,
        roughness: 0.7,
        contrast: 0.6,
        material: "wood",
    },
    KeywordGroup {
        keywords: &["stone", "rock", "wall"],
        palette: &[0x69_6969, 0xA9_A9A9, 0x80_8080, 0xD3_D3D3],
        pattern: Pattern::Noise,
        roughness: 0.8,
        contrast: 0.7,
        material: "stone",
    },
    KeywordGroup {
        keywords: &["metal", "steel"],
        palette: &[0xC0_C0C0, 0x80_8080, 0xA9_A9A9, 0xDC_DCDC],
        pattern: Pattern::Grid,
        roughness: 0.3,
        contrast: 0.8,
        material: "metal",
    },
    KeywordGroup {
        keywords: &["grass", "leaf"],
        palette: &[0x22_8B22, 0x32_CD32, 0x90_EE90, 0x00_6400],
        pattern: Pattern::Organic,
        roughness: 0.6,
        contrast: 0.5,
        material: "nature",
    },
];

/// Parameters used when no keyword group matches
pub static DEFAULT_GROUP: KeywordGroup = KeywordGroup {
    keywords: &[],
    palette: &[0xFF_6B6B, 0x4E_CDC4, 0x45_B7D1, 0x96_CEB4],
    pattern: Pattern::Random,
    roughness: 0.5,
    contrast: 0.6,
    material: "abstract",
};

impl KeywordGroup {
    /// Whether any keyword occurs in an already lower-cased prompt
    pub fn matches(&self, lowered_prompt: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_prompt.contains(keyword))
    }

    /// Expand the literal into a parameter model
    pub fn to_model(&self) -> ParameterModel {
        let colors: Vec<Rgb> = self.palette.iter().map(|&c| Rgb::from_u32(c)).collect();
        ParameterModel::from_literal(
            colors,
            self.pattern,
            self.roughness,
            self.contrast,
            Material::from_tag(self.material),
        )
    }
}

/// Select the keyword group for a prompt
pub fn select_group(prompt: &str) -> &'static KeywordGroup {
    let lowered = prompt.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|group| group.matches(&lowered))
        .unwrap_or(&DEFAULT_GROUP)
}

/// Derive parameters from the prompt text alone
///
/// Pure and total: the same prompt always yields the same model.
pub fn classify(prompt: &str) -> ParameterModel {
    select_group(prompt).to_model()
}
