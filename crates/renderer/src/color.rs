//! RGBA colors used by color scales and legends.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An immutable RGBA color.
///
/// RGB channels are 0-255 integers, alpha is opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0.0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Linear interpolation towards `other`.
    ///
    /// `fraction` is clamped to `[0, 1]` (NaN counts as 0). RGB channels are
    /// rounded to the nearest integer, alpha is left unrounded.
    pub fn interpolate(&self, other: &Color, fraction: f64) -> Color {
        let t = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        let lerp_u8 = |from: u8, to: u8| -> u8 {
            let from = f64::from(from);
            let to = f64::from(to);
            (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
        };

        Color {
            r: lerp_u8(self.r, other.r),
            g: lerp_u8(self.g, other.g),
            b: lerp_u8(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 {
            f64::from(channel(6)?) / 255.0
        } else {
            1.0
        };

        Ok(Color { r, g, b, a })
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba(r, g, b, a)` notation.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Four 8-bit channels, alpha scaled to 0-255.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color length: '{0}'. Expected #rrggbb or #rrggbbaa")]
    InvalidLength(String),

    #[error("Invalid hex digit in color: '{0}'")]
    InvalidDigit(String),

    #[error("Unknown color: '{0}'")]
    Unknown(String),
}
