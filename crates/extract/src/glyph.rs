use texfont_core::{CellOrigin, FontProfile, GlyphMask, GridGeometry, RasterSource};

use crate::scan_window;

/// Extract the glyph in the cell at `origin` as a padded mask.
///
/// The mask is cropped horizontally to the visible ink, followed by
/// `profile.padding` blank columns. Vertically it always covers the full
/// `profile.height`. A cell with no ink yields [GlyphMask::empty].
pub fn extract<R: RasterSource + ?Sized>(
    raster: &R,
    grid: &GridGeometry,
    origin: CellOrigin,
    profile: &FontProfile,
) -> GlyphMask {
    let window = scan_window(raster, grid, origin, profile);

    let Some((min_x, max_x)) = column_bounds(&window) else {
        log::debug!(
            "No ink in cell at ({}, {}), emitting empty glyph",
            origin.x,
            origin.y
        );
        return GlyphMask::empty(profile.height);
    };

    let content_width = max_x - min_x + 1;
    let mut mask = GlyphMask::blank(content_width + profile.padding, profile.height);

    for row in 0..profile.height {
        for col in 0..content_width {
            if window.is_ink(min_x + col, row) {
                mask.set_ink(col, row);
            }
        }
    }

    mask
}

/// Leftmost and rightmost columns holding ink.
fn column_bounds(window: &GlyphMask) -> Option<(u32, u32)> {
    let mut inked =
        (0..window.width()).filter(|&x| (0..window.height()).any(|y| window.is_ink(x, y)));

    let first = inked.next()?;
    let last = inked.last().unwrap_or(first);

    Some((first, last))
}
