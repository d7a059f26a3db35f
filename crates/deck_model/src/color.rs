//! Color representation for slide backgrounds, text, and element styling
//!
//! Colors round-trip through the `#RRGGBB` hex form used by the document
//! format, so the serde representation is the hex string rather than a
//! struct.

use crate::{ModelError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Catalog accent used for shape fills.
    pub const AMBER: Color = Color::rgb(0xF0, 0xA5, 0x00);
    /// Catalog accent used for shape strokes.
    pub const DARK_AMBER: Color = Color::rgb(0xD4, 0x8F, 0x00);
    /// Fallback cover-slide background.
    pub const COVER_BLUE: Color = Color::rgb(0x1E, 0x40, 0xAF);

    /// Render as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse from `#RRGGBB` (leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        // Length is in bytes; multi-byte input must be rejected before the
        // component slicing below.
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ModelError::InvalidColor(hex.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ModelError::InvalidColor(hex.to_string()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = Color::rgb(0x3B, 0x82, 0xF6);
        assert_eq!(color.to_hex(), "#3B82F6");
        assert_eq!(Color::from_hex("#3B82F6").unwrap(), color);
    }

    #[test]
    fn parse_is_case_insensitive_and_hash_optional() {
        assert_eq!(Color::from_hex("f0a500").unwrap(), Color::AMBER);
        assert_eq!(Color::from_hex("#f0a500").unwrap(), Color::AMBER);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn rejects_multi_byte_input() {
        // Six bytes but not six ASCII digits.
        assert!(Color::from_hex("€€").is_err());
        assert!(Color::from_hex("#ααα").is_err());
    }

    #[test]
    fn deserializing_multi_byte_input_is_an_error() {
        assert!(serde_json::from_str::<Color>("\"€€\"").is_err());
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, "\"#FFFFFF\"");
        let back: Color = serde_json::from_str("\"#1e40af\"").unwrap();
        assert_eq!(back, Color::COVER_BLUE);
    }
}
