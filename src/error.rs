//! Unified error type for the crate.
//!
//! Every failure is a precondition violation detected before any pixel is
//! processed; there are no partial results and nothing to retry. Messages
//! identify the violated precondition without exposing internals.

use thiserror::Error;

use crate::color::ParseColorError;

/// Errors surfaced by palette construction, index building and dithering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DitherError {
    /// An empty palette was supplied to index build or a dithering call.
    #[error("palette cannot be empty")]
    InvalidPalette,

    /// The pixel buffer has zero width or zero height.
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
    },

    /// The pixel data does not match the declared buffer dimensions.
    #[error("pixel count mismatch: dimensions require {expected} pixels, got {actual}")]
    PixelCountMismatch {
        /// Pixels required by width * height
        expected: usize,
        /// Pixels actually supplied
        actual: usize,
    },

    /// A kernel was requested by a name that does not exist.
    #[error("unknown dithering kernel: {0:?}")]
    UnknownKernel(String),

    /// A palette preset was requested by a name that does not exist.
    #[error("unknown palette preset: {0:?}")]
    UnknownPreset(String),

    /// A resize policy was requested by a name that does not exist.
    #[error("unknown resize mode: {0:?}")]
    UnknownResizeMode(String),

    /// A color string failed to parse.
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
