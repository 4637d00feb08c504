//! RGB color value used across the decoder, sampler and palette.
//!
//! Decoded frames store pixels as packed `0xAARRGGBB` words. Everything past
//! the decoder works with [`Rgb`], which drops the alpha channel: the sampler
//! and the palette only ever compare the three color channels.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Largest possible [`Rgb::manhattan_distance`] (255 on every channel).
pub const MAX_DISTANCE: u32 = 3 * 255;

/// Errors from parsing a hexadecimal color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRgbError {
    /// The string is not exactly six characters long.
    #[error("expected 6 hex digits, got {0} characters")]
    InvalidLength(usize),

    /// The string contains a non-hexadecimal character.
    #[error("invalid hex digit in '{0}'")]
    InvalidDigit(String),
}

/// An opaque 8-bit-per-channel RGB color.
///
/// Ordering is lexicographic over (red, green, blue), which the sampler uses
/// as its tie-break between equally frequent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Extract the color channels of a packed `0xAARRGGBB` word.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xff) as u8,
            g: ((argb >> 8) & 0xff) as u8,
            b: (argb & 0xff) as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` word with full opacity.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xff00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a 6-digit hexadecimal `RRGGBB` string (no `#` prefix).
    pub fn from_hex(hex: &str) -> Result<Self, ParseRgbError> {
        if hex.len() != 6 {
            return Err(ParseRgbError::InvalidLength(hex.chars().count()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseRgbError::InvalidDigit(hex.to_string()));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ParseRgbError::InvalidDigit(hex.to_string()))?;
        Ok(Self::from_argb(value))
    }

    /// Format as an uppercase `RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Add `amount` to every channel, saturating at 255.
    #[inline]
    pub fn brighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// Sum of absolute per-channel differences, in `[0, 765]`.
    #[inline]
    pub fn manhattan_distance(self, other: Rgb) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim_start_matches('#'))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
