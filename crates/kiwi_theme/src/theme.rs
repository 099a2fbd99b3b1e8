//! Theme token record and the built-in kiwi palette

use kiwi_core::Color;
use serde::{Deserialize, Serialize};

/// Color tokens shared by every component under one container
///
/// Immutable once constructed; the container turns the tokens into CSS
/// custom properties and descendants style themselves against those.
/// Serde support lets host applications load palettes from their config
/// files, with omitted tokens falling back to the kiwi palette per field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Accent for selected/active elements
    pub primary: Color,
    /// Supporting accent
    pub secondary: Color,
    /// Body text
    pub text: Color,
    /// Container surface
    pub background: Color,
}

impl Theme {
    /// The built-in kiwi palette
    pub fn kiwi() -> Self {
        Self {
            primary: Color::from_hex(0x8BC34A),
            secondary: Color::from_hex(0x4CAF50),
            text: Color::from_hex(0x333333),
            background: Color::from_hex(0xFFFFFF),
        }
    }

    /// The tokens as CSS custom-property pairs, in declaration order
    pub fn css_vars(&self) -> [(&'static str, String); 4] {
        [
            ("--primary", self.primary.to_css()),
            ("--secondary", self.secondary.to_css()),
            ("--text", self.text.to_css()),
            ("--background", self.background.to_css()),
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::kiwi()
    }
}
