//! Floyd-Steinberg error diffusion.
//!
//! The classic kernel: four neighbors, total weight 16, one row of
//! look-ahead. Cheap and good enough for most photographic content.

use crate::buffer::PixelBuffer;
use crate::error::DitherError;
use crate::palette::PaletteIndex;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, buffer: &mut PixelBuffer, index: &PaletteIndex) -> Result<(), DitherError> {
        dither_with_kernel(buffer, index, &FLOYD_STEINBERG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::palette::Palette;
    use pretty_assertions::assert_eq;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn bw_index() -> PaletteIndex {
        PaletteIndex::build(&Palette::new(vec![BLACK, WHITE])).unwrap()
    }

    #[test]
    fn test_checkerboard_is_a_fixed_point() {
        // Every pixel already equals a palette entry, so each residual is
        // zero and nothing diffuses: output must equal input exactly.
        let pixels = vec![BLACK, WHITE, WHITE, BLACK];
        let mut buffer = PixelBuffer::from_pixels(2, 2, pixels.clone()).unwrap();
        FloydSteinberg.dither(&mut buffer, &bw_index()).unwrap();
        assert_eq!(buffer.pixels(), &pixels[..]);
    }

    #[test]
    fn test_solid_black_stays_black() {
        let mut buffer = PixelBuffer::filled(4, 4, BLACK);
        FloydSteinberg.dither(&mut buffer, &bw_index()).unwrap();
        assert!(buffer.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_mid_gray_mixes_black_and_white() {
        let mut buffer = PixelBuffer::filled(8, 8, Rgb::new(128, 128, 128));
        FloydSteinberg.dither(&mut buffer, &bw_index()).unwrap();

        let white = buffer.pixels().iter().filter(|&&p| p == WHITE).count();
        let black = buffer.pixels().iter().filter(|&&p| p == BLACK).count();
        assert_eq!(white + black, 64, "every pixel must be a palette entry");
        assert!(white > 0 && black > 0, "mid-gray must dither, not flood");

        // Full error propagation keeps the average near the input level
        let ratio = white as f32 / 64.0;
        assert!(
            (ratio - 128.0 / 255.0).abs() < 0.15,
            "white ratio {ratio} should approximate 128/255"
        );
    }

    #[test]
    fn test_first_pixel_error_reaches_right_neighbor() {
        // 160 quantizes to white (residual -95); the right neighbor receives
        // -95 * 7/16 ~= -41.6, pushing its accumulated value to ~118.4,
        // which quantizes to black. The pattern is fully determined.
        let mut buffer = PixelBuffer::filled(2, 1, Rgb::new(160, 160, 160));
        FloydSteinberg.dither(&mut buffer, &bw_index()).unwrap();
        assert_eq!(buffer.get(0, 0), WHITE);
        assert_eq!(buffer.get(1, 0), BLACK);
    }
}
