//! Rectangular pixel buffer.
//!
//! [`PixelBuffer`] is a width x height grid of [`Rgb`] values in row-major
//! order. The dithering engine mutates it in place; callers wanting to keep
//! the source image clone the buffer first.

use crate::color::Rgb;
use crate::error::DitherError;

/// A 2D grid of colors, width x height, stored row-major.
///
/// Zero-area buffers can be constructed (e.g. while streaming configuration)
/// but are rejected with [`DitherError::InvalidDimensions`] when handed to
/// the dithering engine.
///
/// # Example
///
/// ```
/// use ink_dither::{PixelBuffer, Rgb};
///
/// let mut buffer = PixelBuffer::filled(2, 2, Rgb::new(128, 128, 128));
/// buffer.set(1, 0, Rgb::new(255, 255, 255));
/// assert_eq!(buffer.get(1, 0), Rgb::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer filled with a single color.
    pub fn filled(width: usize, height: usize, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Create a buffer from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::PixelCountMismatch`] if `pixels.len()` is not
    /// exactly `width * height`.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Rgb>,
    ) -> Result<Self, DitherError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DitherError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the buffer.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = color;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Consume the buffer and return its pixel data.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }
}
