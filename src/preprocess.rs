//! Pre-processing contract.
//!
//! Resizing and cropping happen before dithering, in the caller's decode
//! pipeline; the engine only ever sees a buffer already at target size.
//! What this crate owns is the enumerated resize policy of the
//! configuration surface, so orchestration code can parse, validate and
//! pass the policy along without inventing its own names.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DitherError;

/// Resize policy applied by the caller's pre-processing step.
///
/// The contract with the dithering engine is only that pre-processing
/// produces an exact `target_width x target_height` buffer; how the source
/// image gets there is this policy's business.
///
/// Parses from `stretch`, `fit`, `fill-crop` and `center-crop`. The legacy
/// aliases `fill` (for fill-crop) and `cut` (for center-crop) are accepted
/// so existing frame configurations keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeMode {
    /// Scale to the target dimensions, ignoring aspect ratio.
    Stretch,
    /// Scale to fit within the target, preserving aspect ratio; the result
    /// may be smaller than the target in one dimension.
    Fit,
    /// Scale to cover the target, preserving aspect ratio, then center-crop
    /// the overflow (default).
    #[default]
    FillCrop,
    /// Center-crop to the target without scaling (upscaling only when the
    /// source is smaller than the target).
    CenterCrop,
}

impl ResizeMode {
    /// The configuration name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            ResizeMode::Stretch => "stretch",
            ResizeMode::Fit => "fit",
            ResizeMode::FillCrop => "fill-crop",
            ResizeMode::CenterCrop => "center-crop",
        }
    }
}

impl FromStr for ResizeMode {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stretch" => Ok(ResizeMode::Stretch),
            "fit" => Ok(ResizeMode::Fit),
            "fill-crop" | "fill" => Ok(ResizeMode::FillCrop),
            "center-crop" | "cut" => Ok(ResizeMode::CenterCrop),
            other => Err(DitherError::UnknownResizeMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_round_trip() {
        for mode in [
            ResizeMode::Stretch,
            ResizeMode::Fit,
            ResizeMode::FillCrop,
            ResizeMode::CenterCrop,
        ] {
            assert_eq!(mode.name().parse::<ResizeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!("fill".parse::<ResizeMode>().unwrap(), ResizeMode::FillCrop);
        assert_eq!("cut".parse::<ResizeMode>().unwrap(), ResizeMode::CenterCrop);
    }

    #[test]
    fn test_unknown_mode_is_a_config_error() {
        let err = "tile".parse::<ResizeMode>().unwrap_err();
        assert_eq!(err, DitherError::UnknownResizeMode("tile".to_string()));
    }

    #[test]
    fn test_serde_uses_config_names() {
        assert_eq!(
            serde_json::to_string(&ResizeMode::FillCrop).unwrap(),
            "\"fill-crop\""
        );
        assert_eq!(
            serde_json::to_string(&ResizeMode::CenterCrop).unwrap(),
            "\"center-crop\""
        );
        let mode: ResizeMode = serde_json::from_str("\"stretch\"").unwrap();
        assert_eq!(mode, ResizeMode::Stretch);
    }

    #[test]
    fn test_default_is_fill_crop() {
        assert_eq!(ResizeMode::default(), ResizeMode::FillCrop);
    }
}
