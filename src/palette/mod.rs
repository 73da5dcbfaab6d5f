//! Palette types and nearest-color search.
//!
//! [`Palette`] is the fixed, ordered set of allowed output colors;
//! [`PaletteIndex`] answers nearest-color queries against one.

mod index;
#[allow(clippy::module_inception)]
mod palette;

pub use index::PaletteIndex;
pub use palette::Palette;
