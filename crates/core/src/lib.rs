#![no_std]

//! `texfont-core` provides core primitives for the `texfont` crates.
//!
//! A font raster is a grid of fixed-size square cells holding one glyph each.
//! Every stage of the pipeline reads that grid through [RasterSource] and
//! locates cells through [GridGeometry].

extern crate alloc;

mod grid;
mod mask;
mod profile;

pub use grid::{CellOrigin, GridGeometry};
pub use mask::GlyphMask;
pub use profile::FontProfile;

/// Classification of a single raster pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pixel {
    /// The font's foreground color.
    Ink,
    /// Anything else: background, grid lines, guide and baseline markers.
    Background,
}

/// A grid raster which can be queried pixel by pixel.
///
/// Implementors must classify coordinates outside the image as
/// [Pixel::Background] rather than failing, so glyphs touching the image
/// edge can still be scanned.
pub trait RasterSource {
    /// Width of the raster, in pixels.
    fn width(&self) -> u32;
    /// Height of the raster, in pixels.
    fn height(&self) -> u32;
    /// Classify the pixel at the given absolute coordinate.
    fn pixel_at(&self, x: i64, y: i64) -> Pixel;

    /// Is the given coordinate inside the raster?
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }
}

impl<T: RasterSource + ?Sized> RasterSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel_at(&self, x: i64, y: i64) -> Pixel {
        (**self).pixel_at(x, y)
    }
}
