//! Colour values.
//!
//! A colour is either semantic (`primary`, `secondary`), left for the
//! renderer to pick from its current appearance, or a concrete sRGB value
//! given by name or hex notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// sRGB colour represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
    /// Alpha channel (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// An opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    ///
    /// Short forms replicate each digit, so `#f80` is `#ff8800`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| -> Option<u8> {
            let digits = &hex[range];
            let digits = if digits.len() == 1 {
                digits.repeat(2)
            } else {
                digits.to_string()
            };
            u8::from_str_radix(&digits, 16).ok()
        };
        match hex.len() {
            3 => Some(Self::rgb(channel(0..1)?, channel(1..2)?, channel(2..3)?)),
            4 => Some(Self {
                r: channel(0..1)?,
                g: channel(1..2)?,
                b: channel(2..3)?,
                a: channel(3..4)?,
            }),
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => None,
        }
    }

    /// Look up a colour keyword (ASCII case-insensitive).
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let rgba = match name.to_ascii_lowercase().as_str() {
            "black" => Self::rgb(0, 0, 0),
            "white" => Self::rgb(255, 255, 255),
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            "pink" => Self::rgb(255, 192, 203),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "teal" => Self::rgb(0, 128, 128),
            "navy" => Self::rgb(0, 0, 128),
            "clear" | "transparent" => Self {
                r: 0,
                g: 0,
                b: 0,
                a: 0,
            },
            _ => return None,
        };
        Some(rgba)
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// A text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// The renderer's primary label colour.
    #[default]
    Primary,
    /// The renderer's secondary label colour.
    Secondary,
    /// A fixed colour.
    Rgba(Rgba),
}

impl Color {
    /// The link colour used by the default styles.
    pub const BLUE: Self = Self::Rgba(Rgba::rgb(0, 0, 255));
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
            Self::Rgba(rgba) => f.write_str(&rgba.to_hex_string()),
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Rgba::from_hex(s)
                .map(Self::Rgba)
                .ok_or_else(|| StyleError::InvalidHexColor(s.to_string()));
        }
        if s.eq_ignore_ascii_case("primary") {
            return Ok(Self::Primary);
        }
        if s.eq_ignore_ascii_case("secondary") {
            return Ok(Self::Secondary);
        }
        Rgba::from_named(s)
            .map(Self::Rgba)
            .ok_or_else(|| StyleError::UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
