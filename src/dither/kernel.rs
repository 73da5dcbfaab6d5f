//! Error diffusion kernel definitions.
//!
//! A kernel is a fixed table of (dx, dy, weight) offsets describing how the
//! quantization residual of one pixel spreads to its not-yet-processed
//! neighbors. All offsets point right on the current row or anywhere on the
//! rows below: in raster order those are exactly the pixels that have not
//! been finalized yet.

/// An error diffusion kernel.
///
/// Each in-bounds neighbor at `(x + dx, y + dy)` receives
/// `residual * weight / divisor`. Neighbors outside the buffer are skipped,
/// so boundary pixels legitimately lose part of the error mass; the weights
/// are never renormalized to compensate.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries.
    ///
    /// - `dx`: horizontal offset, may be negative (only on rows below)
    /// - `dy`: vertical offset, always >= 0, and dx > 0 when dy == 0
    /// - `weight`: numerator of the diffused error fraction
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights. The entries' weights sum to
    /// exactly this value, so an interior pixel propagates 100% of its
    /// residual.
    pub divisor: u8,

    /// Maximum dy in `entries`; the error window needs `max_dy + 1` rows.
    pub max_dy: usize,
}

/// Floyd-Steinberg kernel.
///
/// Distributes error to 4 neighbors, total weight 16.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

/// Stucki kernel.
///
/// Distributes error to 12 neighbors over 3 rows, total weight 42. The wide
/// spread gives smoother gradients than Floyd-Steinberg on sparse e-paper
/// palettes at the cost of touching more neighbors per pixel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
    max_dy: 2,
};
