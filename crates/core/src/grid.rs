use crate::FontProfile;

/// Top-left pixel coordinate of a glyph cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellOrigin {
    pub x: i64,
    pub y: i64,
}

/// Layout of the glyph grid, shared by every font raster.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    /// Width and height of a cell, in pixels.
    pub cell_size: u32,
    /// Number of cells per grid row.
    pub columns: u32,
    /// Row within each cell carrying the baseline guide marker.
    pub guide_row: u32,
}

impl GridGeometry {
    /// The layout every `texfont` raster is drawn on: 16 columns of 20px
    /// cells, with the baseline guide on the 16th row of each cell.
    pub const STANDARD: GridGeometry = GridGeometry {
        cell_size: 20,
        columns: 16,
        guide_row: 15,
    };

    /// Locate the cell holding the glyph at `index`.
    ///
    /// Cells are laid out row-major starting from index zero.
    pub fn cell_origin(&self, index: u32) -> CellOrigin {
        let size = self.cell_size as i64;

        CellOrigin {
            x: (index % self.columns) as i64 * size,
            y: (index / self.columns) as i64 * size,
        }
    }

    /// First raster row scanned for a cell under the given profile.
    ///
    /// The profile's own baseline row is lined up with the grid's guide row,
    /// so fonts of different heights share one raster layout. Every scan of a
    /// cell must start here.
    pub fn scan_top(&self, origin: CellOrigin, profile: &FontProfile) -> i64 {
        origin.y + self.guide_row as i64 - profile.baseline as i64
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}
