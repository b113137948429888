use texfont_core::{FontProfile, GlyphMask, GridGeometry, RasterSource};

use crate::scan_window;

/// Glyph whose vertical center defines the axis offset: `+`.
pub const CALIBRATION_GLYPH: u32 = '+' as u32;

/// Distance, in pixels, from the baseline up to the vertical center of the
/// glyph at `calibration_index`.
///
/// If that cell has no ink, falls back to half the glyph height.
pub fn axis_offset<R: RasterSource + ?Sized>(
    raster: &R,
    grid: &GridGeometry,
    profile: &FontProfile,
    calibration_index: u32,
) -> i32 {
    let origin = grid.cell_origin(calibration_index);
    let window = scan_window(raster, grid, origin, profile);

    let Some((min_y, max_y)) = row_bounds(&window) else {
        let fallback = (profile.height / 2) as i32;
        log::warn!(
            "Calibration glyph {} of profile {} has no ink, using heuristic axis offset {}",
            calibration_index,
            profile.id,
            fallback
        );
        return fallback;
    };

    let center = (min_y + max_y) as f64 / 2.0;

    round_half_away_from_zero(profile.baseline as f64 - center)
}

/// Round to the nearest integer, with ties going away from zero.
///
/// Centers of glyphs spanning an even number of rows land on a half pixel,
/// so ties are common here.
pub fn round_half_away_from_zero(value: f64) -> i32 {
    value.round() as i32
}

/// Topmost and bottommost rows holding ink.
fn row_bounds(window: &GlyphMask) -> Option<(u32, u32)> {
    let mut inked = window
        .rows()
        .enumerate()
        .filter(|(_, row)| row.contains(&true))
        .map(|(y, _)| y as u32);

    let first = inked.next()?;
    let last = inked.last().unwrap_or(first);

    Some((first, last))
}
