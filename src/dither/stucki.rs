//! Stucki error diffusion.

use crate::buffer::PixelBuffer;
use crate::error::DitherError;
use crate::palette::PaletteIndex;

use super::{dither_with_kernel, Dither, STUCKI};

/// Stucki error diffusion dithering.
///
/// Spreads error over 12 neighbors across 3 rows (total weight 42), giving
/// smoother gradients than Floyd-Steinberg on the sparse palettes of color
/// e-paper panels. This is the default kernel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub struct Stucki;

impl Dither for Stucki {
    fn dither(&self, buffer: &mut PixelBuffer, index: &PaletteIndex) -> Result<(), DitherError> {
        dither_with_kernel(buffer, index, &STUCKI)
    }
}
