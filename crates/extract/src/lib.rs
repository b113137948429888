//! `texfont-extract` turns cells of a grid raster into glyph masks and
//! derives the font-wide metrics that depend on glyph shapes.
//!
//! Both operations scan the same window of a cell: `profile.height` rows
//! starting at [GridGeometry::scan_top], across the full cell width. Ink
//! outside that window is ignored.

use texfont_core::{CellOrigin, FontProfile, GlyphMask, GridGeometry, Pixel, RasterSource};

mod axis;
mod glyph;

pub use axis::{CALIBRATION_GLYPH, axis_offset, round_half_away_from_zero};
pub use glyph::extract;

/// Scan the window of the cell at `origin`, returning a cell-wide mask of
/// `profile.height` rows with the ink found there.
pub fn scan_window<R: RasterSource + ?Sized>(
    raster: &R,
    grid: &GridGeometry,
    origin: CellOrigin,
    profile: &FontProfile,
) -> GlyphMask {
    let top = grid.scan_top(origin, profile);
    let mut window = GlyphMask::blank(grid.cell_size, profile.height);

    for row in 0..profile.height {
        for col in 0..grid.cell_size {
            if raster.pixel_at(origin.x + col as i64, top + row as i64) == Pixel::Ink {
                window.set_ink(col, row);
            }
        }
    }

    window
}
