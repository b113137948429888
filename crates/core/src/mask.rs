use alloc::vec;
use alloc::vec::Vec;

/// Rendered bitmap of one glyph.
///
/// Every row has exactly [GlyphMask::width] cells, and there are always
/// exactly [GlyphMask::height] rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl GlyphMask {
    /// Width of the glyph emitted for cells without any ink.
    pub const EMPTY_WIDTH: u32 = 4;

    /// A mask with no ink at all.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// The mask used for any cell without ink, such as the space glyph.
    pub fn empty(height: u32) -> Self {
        Self::blank(Self::EMPTY_WIDTH, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mark the cell at column `x`, row `y` as ink. Out of range cells are ignored.
    pub fn set_ink(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.cells[(y * self.width + x) as usize] = true;
        }
    }

    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.cells[(y * self.width + x) as usize]
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: u32) -> &[bool] {
        let start = (y * self.width) as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        (0..self.height).map(|y| self.row(y))
    }

    pub fn is_blank(&self) -> bool {
        !self.cells.contains(&true)
    }
}
