//! Public API: the [`Ditherer`] builder and the free-function surface.

mod builder;

pub use builder::Ditherer;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::dither::{dither_with_kernel, DiffusionKernel};
use crate::error::DitherError;
use crate::palette::{Palette, PaletteIndex};

/// Dither a pixel buffer in place against a palette.
///
/// Builds a [`PaletteIndex`] for this call; callers dithering many buffers
/// against the same palette should use [`Ditherer`], which builds the index
/// once and reuses it.
///
/// On success every pixel in the buffer equals one of the palette's entries.
///
/// # Errors
///
/// - [`DitherError::InvalidPalette`] if the palette is empty
/// - [`DitherError::InvalidDimensions`] if the buffer has zero width or height
///
/// Both are detected before any pixel is modified.
///
/// # Example
///
/// ```
/// use ink_dither::{dither, DiffusionKernel, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::preset("grayscale_4").unwrap();
/// let mut buffer = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128));
/// dither(&mut buffer, &palette, DiffusionKernel::Stucki).unwrap();
///
/// assert!(buffer.pixels().iter().all(|p| palette.colors().contains(p)));
/// ```
pub fn dither(
    buffer: &mut PixelBuffer,
    palette: &Palette,
    kernel: DiffusionKernel,
) -> Result<(), DitherError> {
    let index = PaletteIndex::build(palette)?;
    dither_with_kernel(buffer, &index, kernel.table())
}

/// Find the palette entry nearest to a single color.
///
/// Exposed for callers that need one-off lookups (e.g. palette preview
/// rendering) without running a full dithering pass. Ties resolve to the
/// entry appearing first in the palette's order.
///
/// # Errors
///
/// Returns [`DitherError::InvalidPalette`] if the palette is empty.
pub fn nearest_color(color: Rgb, palette: &Palette) -> Result<Rgb, DitherError> {
    let index = PaletteIndex::build(palette)?;
    Ok(index.nearest(color))
}
