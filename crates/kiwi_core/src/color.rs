//! RGBA color values with CSS text round-tripping
//!
//! Theme tokens enter the library as CSS hex text (`"#8BC34A"`) and leave it
//! as CSS custom-property values, so [`Color`] parses and prints that form in
//! addition to the usual numeric constructors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// RGBA color, channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// CSS text for this color: `#rrggbb` when opaque, `rgba(..)` otherwise
    pub fn to_css(&self) -> String {
        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        if (self.a - 1.0).abs() < f32::EPSILON {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.a)
        }
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Errors from parsing CSS color text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Color text did not start with `#`
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    /// Wrong number of hex digits
    #[error("expected 3, 6 or 8 hex digits, got {0}")]
    BadLength(usize),

    /// Non-hex characters in the digit run
    #[error("invalid hex digits: {0:?}")]
    BadDigits(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::BadDigits(digits.to_string()))?;

        match digits.len() {
            3 => {
                // #rgb expands each nibble: #8c4 -> #88cc44
                let r = ((value >> 8) & 0xF) * 0x11;
                let g = ((value >> 4) & 0xF) * 0x11;
                let b = (value & 0xF) * 0x11;
                Ok(Self::from_hex((r << 16) | (g << 8) | b))
            }
            6 => Ok(Self::from_hex(value)),
            8 => {
                let a = (value & 0xFF) as f32 / 255.0;
                Ok(Self::from_hex(value >> 8).with_alpha(a))
            }
            len => Err(ColorParseError::BadLength(len)),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
