//! Palette type and named presets.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::DitherError;

/// 4-level grayscale for 2-bit e-paper panels.
const GRAYSCALE_4: [Rgb; 4] = [
    Rgb::new(0, 0, 0),
    Rgb::new(85, 85, 85),
    Rgb::new(170, 170, 170),
    Rgb::new(255, 255, 255),
];

/// Measured color states of the WaveShare 7.3" ACeP panel, converted from
/// the lab values the panel actually produces (dark, white, blue, green,
/// red, yellow, orange).
const SEVEN_COLOR: [Rgb; 7] = [
    Rgb::new(49, 40, 56),
    Rgb::new(174, 173, 168),
    Rgb::new(57, 63, 104),
    Rgb::new(48, 101, 68),
    Rgb::new(146, 61, 62),
    Rgb::new(173, 160, 73),
    Rgb::new(160, 83, 65),
];

/// The same seven states as their nominal pure colors.
const SEVEN_COLOR_PURE: [Rgb; 7] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 165, 0),
];

/// Preset names in the order reported by [`Palette::preset_names`].
const PRESET_NAMES: [&str; 3] = ["grayscale_4", "7-color", "7-color-2"];

/// An ordered sequence of colors that dithered output is restricted to.
///
/// Order matters: nearest-color ties resolve to the entry appearing first,
/// so two palettes with the same colors in different order are different
/// palettes. Duplicate entries are tolerated (they are wasteful, not wrong).
///
/// Emptiness is deliberately not rejected here. The empty-palette error
/// belongs to index building and dithering calls, which is where it is
/// surfaced as [`DitherError::InvalidPalette`].
///
/// # Example
///
/// ```
/// use ink_dither::Palette;
///
/// let bw = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
/// assert_eq!(bw.len(), 2);
///
/// let panel = Palette::preset("7-color").unwrap();
/// assert_eq!(panel.len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a list of colors.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Look up a named preset.
    ///
    /// Recognized names: `grayscale_4`, `7-color`, `7-color-2`.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::UnknownPreset`] for any other name.
    pub fn preset(name: &str) -> Result<Self, DitherError> {
        match name {
            "grayscale_4" => Ok(Self::new(GRAYSCALE_4.to_vec())),
            "7-color" => Ok(Self::new(SEVEN_COLOR.to_vec())),
            "7-color-2" => Ok(Self::new(SEVEN_COLOR_PURE.to_vec())),
            other => Err(DitherError::UnknownPreset(other.to_string())),
        }
    }

    /// Names of the available presets.
    pub fn preset_names() -> &'static [&'static str] {
        &PRESET_NAMES
    }

    /// Create a palette from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::ParseColor`] if any string is malformed.
    pub fn from_hex(colors: &[&str]) -> Result<Self, DitherError> {
        let colors = colors
            .iter()
            .map(|s| s.parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(colors))
    }

    /// Parse a custom palette string of the form `r,g,b;r,g,b;...`.
    ///
    /// This is the explicit-color-list format of the configuration surface.
    /// Hex entries (`#RRGGBB`) are accepted in the same position.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::ParseColor`] if any entry is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use ink_dither::{Palette, Rgb};
    ///
    /// let palette = Palette::parse("0,0,0;255,255,255;#FF0000").unwrap();
    /// assert_eq!(palette.colors()[2], Rgb::new(255, 0, 0));
    /// ```
    pub fn parse(list: &str) -> Result<Self, DitherError> {
        let colors = list
            .split(';')
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| entry.parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(colors))
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette entries in their defining order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(colors: Vec<Rgb>) -> Self {
        Self::new(colors)
    }
}

impl From<&[Rgb]> for Palette {
    fn from(colors: &[Rgb]) -> Self {
        Self::new(colors.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preset_grayscale_4() {
        let palette = Palette::preset("grayscale_4").unwrap();
        assert_eq!(
            palette.colors(),
            &[
                Rgb::new(0, 0, 0),
                Rgb::new(85, 85, 85),
                Rgb::new(170, 170, 170),
                Rgb::new(255, 255, 255),
            ]
        );
    }

    #[test]
    fn test_preset_seven_color_is_measured_palette() {
        let palette = Palette::preset("7-color").unwrap();
        assert_eq!(palette.len(), 7);
        // Dark state first, white state second
        assert_eq!(palette.colors()[0], Rgb::new(49, 40, 56));
        assert_eq!(palette.colors()[1], Rgb::new(174, 173, 168));
    }

    #[test]
    fn test_preset_seven_color_pure() {
        let palette = Palette::preset("7-color-2").unwrap();
        assert_eq!(palette.colors()[6], Rgb::new(255, 165, 0));
    }

    #[test]
    fn test_unknown_preset_fails_fast() {
        let err = Palette::preset("8-color").unwrap_err();
        assert_eq!(err, DitherError::UnknownPreset("8-color".to_string()));
    }

    #[test]
    fn test_preset_names_cover_all_presets() {
        for &name in Palette::preset_names() {
            assert!(Palette::preset(name).is_ok(), "preset {name} should exist");
        }
    }

    #[test]
    fn test_parse_custom_palette() {
        let palette = Palette::parse("0,0,0;85,85,85;170,170,170;255,255,255").unwrap();
        assert_eq!(palette, Palette::preset("grayscale_4").unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_entry() {
        let err = Palette::parse("0,0,0;nonsense").unwrap_err();
        assert!(matches!(err, DitherError::ParseColor(_)));
    }

    #[test]
    fn test_parse_tolerates_trailing_separator() {
        let palette = Palette::parse("0,0,0;255,255,255;").unwrap();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_serde_round_trip_is_a_plain_color_list() {
        let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 165, 0)]);
        let json = serde_json::to_string(&palette).unwrap();
        // transparent: a palette serializes as its color list, nothing more
        assert_eq!(json, r#"[{"r":0,"g":0,"b":0},{"r":255,"g":165,"b":0}]"#);
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn test_duplicates_are_tolerated() {
        let black = Rgb::new(0, 0, 0);
        let palette = Palette::new(vec![black, black]);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_empty_palette_is_constructible() {
        // The InvalidPalette error surfaces at index build / dither time
        let palette = Palette::new(Vec::new());
        assert!(palette.is_empty());
    }
}
