//! ink-dither: palette dithering for e-paper displays
//!
//! This library approximates full-color raster images with the small fixed
//! palettes of e-paper panels via error diffusion dithering. Two diffusion
//! kernels are provided (Floyd-Steinberg and Stucki), along with nearest
//! palette-color search and the named panel palettes of common displays.
//!
//! # Quick Start
//!
//! ```
//! use ink_dither::{dither, DiffusionKernel, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::preset("grayscale_4").unwrap();
//! let mut buffer = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128));
//!
//! dither(&mut buffer, &palette, DiffusionKernel::Stucki).unwrap();
//!
//! // Every output pixel is exactly one of the palette's entries
//! assert!(buffer.pixels().iter().all(|p| palette.colors().contains(p)));
//! ```
//!
//! For repeated work against the same palette, build a [`Ditherer`] once:
//!
//! ```
//! use ink_dither::{DiffusionKernel, Ditherer, PixelBuffer, Rgb};
//!
//! let ditherer = Ditherer::from_preset("7-color")
//!     .unwrap()
//!     .kernel(DiffusionKernel::FloydSteinberg);
//!
//! let mut frame = PixelBuffer::filled(8, 8, Rgb::new(90, 120, 200));
//! ditherer.dither(&mut frame).unwrap();
//! ```
//!
//! # How error diffusion works
//!
//! Pixels are processed in raster order (top-to-bottom, left-to-right).
//! Each pixel's accumulated value -- its original color plus whatever error
//! earlier pixels diffused into it -- is quantized to the nearest palette
//! entry, and the residual is spread to the not-yet-processed neighbors
//! according to the kernel's weight table. The order is load-bearing: it is
//! what guarantees a pixel is finalized before any neighbor reads from it,
//! which also makes the pass inherently sequential.
//!
//! Nearest-color search uses squared Euclidean distance in raw RGB channel
//! space with a deterministic tie-break (first entry in palette order), so
//! two runs over the same input produce byte-identical output.
//!
//! Diffusion targets outside the buffer are silently dropped; boundary
//! pixels lose a little error mass rather than having the remaining weights
//! renormalized. This matches the common treatment in the dithering
//! literature.
//!
//! # What this crate does not do
//!
//! Image decode/encode, resizing and cropping, and CLI handling live in the
//! caller. The engine expects a fully materialized RGB buffer already at
//! the target resolution; [`ResizeMode`] names the pre-processing policies
//! the configuration surface recognizes, but applying them is the caller's
//! job. There is no alpha support and no perceptual color-space matching.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod error;
pub mod palette;
pub mod preprocess;


pub use api::{dither, nearest_color, Ditherer};
pub use buffer::PixelBuffer;
pub use color::{ParseColorError, Rgb};
pub use dither::{DiffusionKernel, Dither, FloydSteinberg, Kernel, Stucki};
pub use error::DitherError;
pub use palette::{Palette, PaletteIndex};
pub use preprocess::ResizeMode;
