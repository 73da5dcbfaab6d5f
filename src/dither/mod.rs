//! Error diffusion dithering engine.
//!
//! The engine walks a [`PixelBuffer`] in raster order (top-to-bottom,
//! left-to-right), quantizes each pixel to the nearest palette color and
//! spreads the residual error to not-yet-processed neighbors according to a
//! diffusion kernel. The traversal order is load-bearing: it determines
//! which neighbors have already been finalized and which still accept
//! diffused error, so there is no serpentine variant and no parallelism.
//!
//! Two kernels are provided, [`FloydSteinberg`] and [`Stucki`], both thin
//! wrappers over the shared [`dither_with_kernel`] core via the [`Dither`]
//! trait. [`DiffusionKernel`] selects between them by name.

mod floyd_steinberg;
mod kernel;
mod stucki;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG, STUCKI};
pub use stucki::Stucki;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::DitherError;
use crate::palette::PaletteIndex;

/// Kernel selection for the configuration surface.
///
/// Parses from the configuration names `floyd_steinberg` and `stucki`
/// (a hyphenated `floyd-steinberg` is accepted too).
///
/// # Example
///
/// ```
/// use ink_dither::DiffusionKernel;
///
/// let kernel: DiffusionKernel = "stucki".parse().unwrap();
/// assert_eq!(kernel, DiffusionKernel::Stucki);
/// assert!("atkinson".parse::<DiffusionKernel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffusionKernel {
    /// Floyd-Steinberg: 4 neighbors, total weight 16.
    FloydSteinberg,
    /// Stucki: 12 neighbors over 3 rows, total weight 42 (default).
    #[default]
    Stucki,
}

impl DiffusionKernel {
    /// The diffusion table this selection names.
    pub fn table(self) -> &'static Kernel {
        match self {
            DiffusionKernel::FloydSteinberg => &FLOYD_STEINBERG,
            DiffusionKernel::Stucki => &STUCKI,
        }
    }

    /// The configuration name of this kernel.
    pub fn name(self) -> &'static str {
        match self {
            DiffusionKernel::FloydSteinberg => "floyd_steinberg",
            DiffusionKernel::Stucki => "stucki",
        }
    }
}

impl FromStr for DiffusionKernel {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floyd_steinberg" | "floyd-steinberg" => Ok(DiffusionKernel::FloydSteinberg),
            "stucki" => Ok(DiffusionKernel::Stucki),
            other => Err(DitherError::UnknownKernel(other.to_string())),
        }
    }
}

/// Trait for error diffusion dithering algorithms.
///
/// Implementors provide a specific diffusion kernel; the quantization loop
/// itself is shared. Dithering mutates the buffer in place and guarantees
/// that on success every pixel equals one of the indexed palette's entries.
pub trait Dither {
    /// Dither a pixel buffer against a prebuilt palette index.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidDimensions`] if the buffer has zero
    /// width or height. No pixel is touched on error.
    fn dither(&self, buffer: &mut PixelBuffer, index: &PaletteIndex) -> Result<(), DitherError>;
}

/// Sliding window of per-channel error rows.
///
/// Stores only the rows the diffusion kernel can reach (`max_dy + 1`)
/// instead of a full-image accumulator plane. Values are `f32` on the 0-255
/// channel scale and are allowed to drift outside that range; the nearest
/// palette entry of an out-of-range accumulator is still well defined.
#[derive(Debug)]
pub(crate) struct ErrorBuffer {
    /// rows[0] is the current row, rows[1] the next, and so on.
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    pub(crate) fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Error accumulated so far for pixel `x` of the current row.
    #[inline]
    pub(crate) fn accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error for a future pixel. Out-of-bounds targets are silently
    /// skipped: no wraparound, no redistribution.
    #[inline]
    pub(crate) fn add(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            let cell = &mut self.rows[row_offset][x];
            for c in 0..3 {
                cell[c] += error[c];
            }
        }
    }

    /// Rotate the window forward one row; the vacated row is zeroed.
    pub(crate) fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Shared error diffusion core, parameterized by kernel.
///
/// For each pixel in raster order:
/// 1. accumulated = original value + error diffused in from prior pixels
/// 2. quantize the accumulated value via the palette index
/// 3. write the quantized color back; it is final and never revisited
/// 4. spread `residual * weight / divisor` to each in-bounds kernel offset
pub(crate) fn dither_with_kernel(
    buffer: &mut PixelBuffer,
    index: &PaletteIndex,
    kernel: &Kernel,
) -> Result<(), DitherError> {
    let width = buffer.width();
    let height = buffer.height();
    if width == 0 || height == 0 {
        return Err(DitherError::InvalidDimensions { width, height });
    }

    tracing::debug!(
        width,
        height,
        colors = index.len(),
        divisor = kernel.divisor,
        "dithering buffer"
    );

    let divisor = kernel.divisor as f32;
    let mut errors = ErrorBuffer::new(width, kernel.max_dy + 1);

    for y in 0..height {
        for x in 0..width {
            let carried = errors.accumulated(x);
            let original = buffer.get(x, y).to_f32();
            let accumulated = [
                original[0] + carried[0],
                original[1] + carried[1],
                original[2] + carried[2],
            ];

            let nearest_idx = index.nearest_index(accumulated);
            let quantized = index.color(nearest_idx);
            buffer.set(x, y, quantized);

            let q = quantized.to_f32();
            let residual = [
                accumulated[0] - q[0],
                accumulated[1] - q[1],
                accumulated[2] - q[2],
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y + dy as usize;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    let scale = weight as f32 / divisor;
                    errors.add(
                        nx as usize,
                        dy as usize,
                        [residual[0] * scale, residual[1] * scale, residual[2] * scale],
                    );
                }
            }
        }
        errors.advance_row();
    }

    Ok(())
}
