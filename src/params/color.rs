//! RGB palette entries and hex conversion

use image::Rgba;
use serde::{Serialize, Serializer};
use std::fmt;

/// One opaque palette colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Build a colour from a packed `0xRRGGBB` literal
    pub const fn from_u32(packed: u32) -> Self {
        Self([
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        ])
    }

    /// Parse `#RRGGBB` or `RRGGBB`
    ///
    /// The first `#` is dropped and each two-character channel is parsed on
    /// its own from its leading hex digits. A channel with no leading hex
    /// digit reads as 0, so `"#zz8000"` becomes `[0, 128, 0]`, `"#1G2233"`
    /// becomes `[1, 34, 51]` and the short form `"#FFF"` becomes `[255, 15, 0]`.
    pub fn from_hex(hex: &str) -> Self {
        let digits: Vec<char> = hex.replacen('#', "", 1).chars().collect();
        let channel = |offset: usize| {
            let pair: String = digits.iter().skip(offset).take(2).collect();
            let leading: String = pair
                .trim_start()
                .chars()
                .take_while(char::is_ascii_hexdigit)
                .collect();
            u8::from_str_radix(&leading, 16).unwrap_or(0)
        };
        Self([channel(0), channel(2), channel(4)])
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Fully opaque pixel of this colour
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.0[0], self.0[1], self.0[2], u8::MAX])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self(channels)
    }
}
