//! RGB color value type.
//!
//! Colors are stored as 8-bit channel triples. All arithmetic performed
//! during error diffusion happens on `f32` accumulators (see
//! [`crate::dither`]), so `Rgb` itself never holds out-of-range values.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for parsing color strings.
///
/// Colors parse from hex notation (`#RRGGBB`, `RRGGBB`, `#RGB`) or from
/// a decimal triple (`r,g,b`), matching the formats accepted on the
/// configuration surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 digits)")]
    InvalidLength,
    /// A channel failed to parse as an 8-bit integer
    #[error("invalid color component: {0}")]
    InvalidComponent(#[from] ParseIntError),
    /// Decimal form did not have exactly three components
    #[error("expected three comma-separated components (r,g,b)")]
    InvalidComponentCount,
}

/// A color as an ordered triple of 8-bit channel intensities.
///
/// Immutable value type with exact per-channel equality. This is the unit
/// of both palette entries and pixel buffer contents; every dithered output
/// pixel is byte-for-byte equal to some palette entry.
///
/// # Example
///
/// ```
/// use ink_dither::Rgb;
///
/// let orange = Rgb::new(255, 165, 0);
/// assert_eq!(orange, "#FFA500".parse::<Rgb>().unwrap());
/// assert_eq!(orange, "255,165,0".parse::<Rgb>().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to an `f32` channel triple for accumulator arithmetic.
    ///
    /// Channels keep the 0-255 scale; the widened representation exists so
    /// diffused error can push values outside that range without wrapping.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a string.
    ///
    /// Supported formats:
    /// - `#RRGGBB` / `RRGGBB` - 6-digit hex
    /// - `#RGB` / `RGB` - 3-digit hex shorthand (each digit doubled)
    /// - `r,g,b` - decimal triple, each component 0-255
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            let mut channels = [0u8; 3];
            let mut parts = s.split(',');
            for channel in &mut channels {
                let part = parts
                    .next()
                    .ok_or(ParseColorError::InvalidComponentCount)?;
                *channel = part.trim().parse::<u8>()?;
            }
            if parts.next().is_some() {
                return Err(ParseColorError::InvalidComponentCount);
            }
            return Ok(Self::from_bytes(channels));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        // Byte-slicing below requires ASCII; multi-byte input can never be
        // valid hex anyway
        if !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)?;
                let g = u8::from_str_radix(&hex[2..4], 16)?;
                let b = u8::from_str_radix(&hex[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16)?;
                let g = u8::from_str_radix(&hex[1..2], 16)?;
                let b = u8::from_str_radix(&hex[2..3], 16)?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hex_six_digits() {
        let color: Rgb = "#FF8000".parse().unwrap();
        assert_eq!(color, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_parse_hex_without_hash() {
        let color: Rgb = "313838".parse().unwrap();
        assert_eq!(color, Rgb::new(0x31, 0x38, 0x38));
    }

    #[test]
    fn test_parse_hex_shorthand() {
        let color: Rgb = "#F0A".parse().unwrap();
        assert_eq!(color, Rgb::new(255, 0, 170));
    }

    #[test]
    fn test_parse_decimal_triple() {
        let color: Rgb = "49, 40, 56".parse().unwrap();
        assert_eq!(color, Rgb::new(49, 40, 56));
    }

    #[test]
    fn test_parse_invalid_length() {
        let err = "#FFFF".parse::<Rgb>().unwrap_err();
        assert_eq!(err, ParseColorError::InvalidLength);
    }

    #[test]
    fn test_parse_multibyte_input_errors_instead_of_panicking() {
        // "€€" is 6 bytes but 2 chars; byte-slicing it blindly would panic
        // on a non-char boundary instead of returning an error
        assert_eq!("€€".parse::<Rgb>().unwrap_err(), ParseColorError::InvalidLength);
        assert_eq!("#€€".parse::<Rgb>().unwrap_err(), ParseColorError::InvalidLength);
        assert!(matches!(
            crate::Palette::parse("0,0,0;€€"),
            Err(crate::DitherError::ParseColor(_))
        ));
    }

    #[test]
    fn test_parse_invalid_hex_digit() {
        let err = "#GG0000".parse::<Rgb>().unwrap_err();
        assert!(matches!(err, ParseColorError::InvalidComponent(_)));
    }

    #[test]
    fn test_parse_component_out_of_range() {
        // 256 does not fit in a u8
        let err = "256,0,0".parse::<Rgb>().unwrap_err();
        assert!(matches!(err, ParseColorError::InvalidComponent(_)));
    }

    #[test]
    fn test_parse_wrong_component_count() {
        let err = "1,2".parse::<Rgb>().unwrap_err();
        assert_eq!(err, ParseColorError::InvalidComponentCount);
        let err = "1,2,3,4".parse::<Rgb>().unwrap_err();
        assert_eq!(err, ParseColorError::InvalidComponentCount);
    }

    #[test]
    fn test_display_round_trip() {
        let color = Rgb::new(173, 160, 73);
        let parsed: Rgb = color.to_string().parse().unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_to_f32_keeps_byte_scale() {
        let color = Rgb::new(0, 128, 255);
        assert_eq!(color.to_f32(), [0.0, 128.0, 255.0]);
    }
}
