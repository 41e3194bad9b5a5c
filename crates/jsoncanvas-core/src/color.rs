//! Canvas Colors
//!
//! A canvas color is stored on the wire as a single JSON string holding either
//! a hex literal (`#RGB` / `#RRGGBB`) or the decimal index of a preset palette
//! entry (`"1"` to `"6"`). The palette itself belongs to whoever renders the
//! canvas and is not part of this crate.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color pattern is valid")
});

/// Lowest preset index
pub const PRESET_MIN: u8 = 1;

/// Highest preset index
pub const PRESET_MAX: u8 = 6;

/// Color decode failure, before it is placed in a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Starts with `#` but is not a 3- or 6-digit hex literal
    #[error("invalid hex color format: {0:?}")]
    InvalidFormat(String),

    /// Neither hex nor an integer preset in range
    #[error("invalid color value: {0:?}")]
    InvalidValue(String),
}

/// A validated hex color literal, kept exactly as written
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Validate a `#RGB` / `#RRGGBB` literal
    pub fn new(value: impl Into<String>) -> Result<Self, ColorError> {
        let value = value.into();
        if HEX_PATTERN.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(ColorError::InvalidFormat(value))
        }
    }

    /// The literal as stored (case preserved, never expanded)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels, expanding the 3-digit form
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = &self.0[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        if digits.len() == 3 {
            let expand = |i: usize| channel(&digits[i..=i]) * 0x11;
            (expand(0), expand(1), expand(2))
        } else {
            (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            )
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A preset palette index in `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresetColor(u8);

impl PresetColor {
    /// Check that `index` lies in the preset range
    pub fn new(index: i64) -> Result<Self, ColorError> {
        match u8::try_from(index) {
            Ok(index) if (PRESET_MIN..=PRESET_MAX).contains(&index) => Ok(Self(index)),
            _ => Err(ColorError::InvalidValue(index.to_string())),
        }
    }

    /// The palette index
    #[must_use]
    pub fn index(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PresetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color of a node or edge
///
/// Two colors are equal only when they are the same variant with the same
/// value; `#FFF` and `#fff` are different colors, and a preset never equals a
/// hex literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanvasColor {
    /// Literal RGB value
    Hex(HexColor),
    /// Index into the renderer's preset palette
    Preset(PresetColor),
}

impl CanvasColor {
    /// Create a hex color
    pub fn hex(value: impl Into<String>) -> Result<Self, ColorError> {
        HexColor::new(value).map(Self::Hex)
    }

    /// Create a preset color
    pub fn preset(index: i64) -> Result<Self, ColorError> {
        PresetColor::new(index).map(Self::Preset)
    }

    /// Decode a wire color string
    pub fn decode(raw: &str) -> Result<Self, ColorError> {
        if raw.starts_with('#') {
            return Self::hex(raw);
        }
        match raw.parse::<i64>() {
            Ok(index) => {
                Self::preset(index).map_err(|_| ColorError::InvalidValue(raw.to_string()))
            }
            Err(_) => Err(ColorError::InvalidValue(raw.to_string())),
        }
    }

    /// Encode to the wire string
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Hex(hex) => hex.as_str().to_string(),
            Self::Preset(preset) => preset.to_string(),
        }
    }

    /// The hex literal, if this is a hex color
    #[must_use]
    pub fn as_hex(&self) -> Option<&HexColor> {
        match self {
            Self::Hex(hex) => Some(hex),
            Self::Preset(_) => None,
        }
    }

    /// The preset index, if this is a preset color
    #[must_use]
    pub fn as_preset(&self) -> Option<u8> {
        match self {
            Self::Preset(preset) => Some(preset.index()),
            Self::Hex(_) => None,
        }
    }
}

impl From<HexColor> for CanvasColor {
    fn from(hex: HexColor) -> Self {
        Self::Hex(hex)
    }
}

impl From<PresetColor> for CanvasColor {
    fn from(preset: PresetColor) -> Self {
        Self::Preset(preset)
    }
}

impl fmt::Display for CanvasColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => hex.fmt(f),
            Self::Preset(preset) => preset.fmt(f),
        }
    }
}

impl FromStr for CanvasColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for CanvasColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for CanvasColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}

/// Decode a wire color string
pub fn decode_color(raw: &str) -> Result<CanvasColor, ColorError> {
    CanvasColor::decode(raw)
}

/// Encode a color to its wire string
#[must_use]
pub fn encode_color(color: &CanvasColor) -> String {
    color.encode()
}
