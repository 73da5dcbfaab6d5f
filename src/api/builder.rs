//! Ditherer builder -- the ergonomic entry point for repeated dithering.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::dither::{dither_with_kernel, DiffusionKernel};
use crate::error::DitherError;
use crate::palette::{Palette, PaletteIndex};
use crate::preprocess::ResizeMode;

/// Reusable dithering pipeline for one palette.
///
/// Builds the nearest-color index once at construction and reuses it for
/// every buffer, which is the intended pattern for photo-frame style callers
/// that push many frames through the same panel palette. After construction
/// the ditherer is read-only; it can be shared by concurrent dithering calls
/// on different buffers.
///
/// The kernel defaults to [`DiffusionKernel::Stucki`] and the resize policy
/// to [`ResizeMode::FillCrop`]. The resize policy is carried for the
/// caller's pre-processing step; this crate expects buffers to arrive
/// already at target size.
///
/// # Example
///
/// ```
/// use ink_dither::{DiffusionKernel, Ditherer, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::preset("grayscale_4").unwrap();
/// let ditherer = Ditherer::new(palette)
///     .unwrap()
///     .kernel(DiffusionKernel::FloydSteinberg);
///
/// let mut buffer = PixelBuffer::filled(4, 4, Rgb::new(200, 90, 40));
/// ditherer.dither(&mut buffer).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    palette: Palette,
    index: PaletteIndex,
    kernel: DiffusionKernel,
    resize: ResizeMode,
}

impl Ditherer {
    /// Create a ditherer for the given palette, building its index.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidPalette`] if the palette is empty.
    pub fn new(palette: Palette) -> Result<Self, DitherError> {
        let index = PaletteIndex::build(&palette)?;
        Ok(Self {
            palette,
            index,
            kernel: DiffusionKernel::default(),
            resize: ResizeMode::default(),
        })
    }

    /// Create a ditherer from a named palette preset.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::UnknownPreset`] for unrecognized names.
    pub fn from_preset(name: &str) -> Result<Self, DitherError> {
        Self::new(Palette::preset(name)?)
    }

    /// Select the diffusion kernel.
    #[inline]
    pub fn kernel(mut self, kernel: DiffusionKernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the resize policy advertised to the caller's pre-processing.
    #[inline]
    pub fn resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize = mode;
        self
    }

    /// The palette this ditherer quantizes to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The selected diffusion kernel.
    #[inline]
    pub fn selected_kernel(&self) -> DiffusionKernel {
        self.kernel
    }

    /// The resize policy the caller's pre-processing should apply before
    /// handing buffers to [`dither`](Self::dither).
    #[inline]
    pub fn resize_policy(&self) -> ResizeMode {
        self.resize
    }

    /// Dither a buffer in place with the configured kernel.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidDimensions`] for a zero-area buffer.
    pub fn dither(&self, buffer: &mut PixelBuffer) -> Result<(), DitherError> {
        dither_with_kernel(buffer, &self.index, self.kernel.table())
    }

    /// Nearest palette entry to a single color (e.g. for palette previews).
    #[inline]
    pub fn nearest_color(&self, color: Rgb) -> Rgb {
        self.index.nearest(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_rejects_empty_palette() {
        let err = Ditherer::new(Palette::new(Vec::new())).unwrap_err();
        assert_eq!(err, DitherError::InvalidPalette);
    }

    #[test]
    fn test_from_preset_unknown_name() {
        let err = Ditherer::from_preset("sepia").unwrap_err();
        assert_eq!(err, DitherError::UnknownPreset("sepia".to_string()));
    }

    #[test]
    fn test_defaults() {
        let ditherer = Ditherer::from_preset("grayscale_4").unwrap();
        assert_eq!(ditherer.selected_kernel(), DiffusionKernel::Stucki);
        assert_eq!(ditherer.resize_policy(), ResizeMode::FillCrop);
    }

    #[test]
    fn test_builder_is_reusable_across_buffers() {
        let ditherer = Ditherer::from_preset("grayscale_4").unwrap();
        let mut first = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128));
        let mut second = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128));
        ditherer.dither(&mut first).unwrap();
        ditherer.dither(&mut second).unwrap();
        assert_eq!(first, second, "same input, same ditherer, same output");
    }

    #[test]
    fn test_nearest_color_on_builder() {
        let ditherer = Ditherer::from_preset("grayscale_4").unwrap();
        assert_eq!(
            ditherer.nearest_color(Rgb::new(90, 80, 86)),
            Rgb::new(85, 85, 85)
        );
    }

    #[test]
    fn test_kernel_selection_changes_output() {
        let stucki = Ditherer::from_preset("grayscale_4").unwrap();
        let fs = Ditherer::from_preset("grayscale_4")
            .unwrap()
            .kernel(DiffusionKernel::FloydSteinberg);

        // A gradient gives the kernels room to diverge
        let pixels: Vec<Rgb> = (0..64)
            .map(|i| {
                let v = (i * 4) as u8;
                Rgb::new(v, v, v)
            })
            .collect();
        let mut a = PixelBuffer::from_pixels(8, 8, pixels.clone()).unwrap();
        let mut b = PixelBuffer::from_pixels(8, 8, pixels).unwrap();
        stucki.dither(&mut a).unwrap();
        fs.dither(&mut b).unwrap();
        assert_ne!(a, b, "different kernels should produce different patterns");
    }
}
