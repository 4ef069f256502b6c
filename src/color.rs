//! RGB colors and the color formats accepted at the crate boundary.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{IdenticonError, Result};

// ============================================================================
// Rgb
// ============================================================================

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Default background color.
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color written as 6 hex digits, with or without a leading `#`.
    ///
    /// Shorthand 3-digit forms are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use identicon_renderer::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    /// assert_eq!(Rgb::from_hex("FF8000").unwrap(), Rgb::new(255, 128, 0));
    /// assert!(Rgb::from_hex("#f80").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IdenticonError::InvalidColorFormat(hex.to_string()));
        }

        let srgb = Srgb::<u8>::from_str(digits)
            .map_err(|_| IdenticonError::InvalidColorFormat(hex.to_string()))?;
        Ok(srgb.into())
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = IdenticonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        image::Rgb(color.as_array())
    }
}

// ============================================================================
// ColorInput
// ============================================================================

/// A color as supplied by a caller, before normalization.
///
/// Serializes untagged, so JSON accepts either form:
///
/// ```json
/// "#3988a4"
/// [57, 136, 164]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum ColorInput {
    /// 6 hex digits, optionally prefixed with `#`.
    Hex(String),
    /// Red, green and blue channels.
    Channels([u8; 3]),
}

impl ColorInput {
    /// Normalizes the input into an [`Rgb`] color.
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            Self::Hex(hex) => Rgb::from_hex(hex),
            Self::Channels(channels) => Ok(Rgb::from(*channels)),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(hex: String) -> Self {
        Self::Hex(hex)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(channels: [u8; 3]) -> Self {
        Self::Channels(channels)
    }
}

impl From<Rgb> for ColorInput {
    fn from(color: Rgb) -> Self {
        Self::Channels(color.as_array())
    }
}

// ============================================================================
// Tests
// ============================================================================
