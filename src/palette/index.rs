//! Nearest-color index over a palette.

use crate::color::Rgb;
use crate::error::DitherError;
use crate::palette::Palette;

/// A queryable nearest-neighbor structure over one palette's colors.
///
/// Built once per palette and reused across all queries against it -- one
/// lookup per pixel during dithering, so construction cost is paid once per
/// image (or once per palette when the index is cached across frames).
///
/// Internally this is a linear scan over precomputed `f32` points. For
/// realistic e-paper palettes (<= 16 colors) that beats any spatial index,
/// and unlike most index libraries it gives a guaranteed tie-break: when
/// several entries are at equal minimal distance, the one appearing first
/// in the palette's original order wins. Reproducible output depends on
/// that guarantee.
///
/// After [`build`](Self::build) the index is read-only and can be shared by
/// concurrent dithering passes over different images using the same palette.
/// [`ensure`](Self::ensure) rebuilds it transparently when the caller starts
/// supplying a palette with different content.
#[derive(Debug, Clone)]
pub struct PaletteIndex {
    /// Palette entries in their defining order (also the tie-break order).
    colors: Vec<Rgb>,
    /// The same entries widened to f32 for distance arithmetic.
    points: Vec<[f32; 3]>,
}

/// Squared Euclidean distance between two channel triples.
///
/// Only the ordering of distances matters for nearest-color search, so the
/// square root is never taken.
#[inline]
fn distance_squared(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

impl PaletteIndex {
    /// Build an index for the given palette.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidPalette`] if the palette is empty.
    pub fn build(palette: &Palette) -> Result<Self, DitherError> {
        if palette.is_empty() {
            return Err(DitherError::InvalidPalette);
        }
        tracing::debug!(colors = palette.len(), "building nearest-color index");
        let colors = palette.colors().to_vec();
        let points = colors.iter().map(|c| c.to_f32()).collect();
        Ok(Self { colors, points })
    }

    /// Returns true if this index was built from a palette with exactly
    /// this content (colors and order).
    pub fn is_for(&self, palette: &Palette) -> bool {
        self.colors == palette.colors()
    }

    /// Rebuild the index if `palette` differs in content from the palette
    /// it was last built from. Comparison is by content, not identity, so
    /// a caller passing an equal palette every frame pays nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidPalette`] if `palette` is empty; the
    /// existing index is left untouched in that case.
    pub fn ensure(&mut self, palette: &Palette) -> Result<(), DitherError> {
        if !self.is_for(palette) {
            *self = Self::build(palette)?;
        }
        Ok(())
    }

    /// Number of indexed colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: empty palettes are rejected at build time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The indexed color at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// Index of the palette entry nearest to an accumulator value.
    ///
    /// The query point may lie outside the 0-255 channel range; diffused
    /// error routinely pushes accumulated values past both ends. The strict
    /// `<` comparison makes the first entry at minimal distance win.
    #[inline]
    pub fn nearest_index(&self, point: [f32; 3]) -> usize {
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;
        for (i, &candidate) in self.points.iter().enumerate() {
            let dist = distance_squared(point, candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx
    }

    /// The palette entry nearest to a color.
    #[inline]
    pub fn nearest(&self, color: Rgb) -> Rgb {
        self.colors[self.nearest_index(color.to_f32())]
    }
}
