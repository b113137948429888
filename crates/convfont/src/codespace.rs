use texfont_symbols::{Symbol, SymbolTables};

/// First code point of the calibration block.
pub const FIRST_CALIBRATION: u32 = 1;
/// First printable ASCII code point.
pub const FIRST_ASCII: u32 = 32;
/// First code point above ASCII.
pub const FIRST_EXTENDED: u32 = 128;
/// The space character, which is named rather than given a Unicode identity.
pub const SPACE: u32 = 32;

/// Highest code point of an 8-bit code page, plus one.
const CODE_SPACE_END: u32 = 256;

/// What a code point of the font holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    Calibration(Symbol),
    /// Blank glyph keeping the code space contiguous.
    Filler,
    /// Printable ASCII; the code point is the character.
    Ascii,
    Extended(Symbol),
}

/// The ordered partition of a font's code points into blocks.
#[derive(Debug, Copy, Clone)]
pub struct CodeSpace<'a> {
    calibration: &'a [Symbol],
    extended: &'a [Symbol],
}

impl<'a> CodeSpace<'a> {
    /// Lay out the code space for the given tables.
    ///
    /// Symbols which would spill into the ASCII block, or past the end of the
    /// 8-bit code page, are left out.
    pub fn new(tables: SymbolTables<'a>) -> Self {
        let calibration_room = (FIRST_ASCII - FIRST_CALIBRATION) as usize;
        let extended_room = (CODE_SPACE_END - FIRST_EXTENDED) as usize;

        Self {
            calibration: &tables.calibration[..tables.calibration.len().min(calibration_room)],
            extended: &tables.extended[..tables.extended.len().min(extended_room)],
        }
    }

    /// First code point past the last glyph.
    pub fn end(&self) -> u32 {
        FIRST_EXTENDED + self.extended.len() as u32
    }

    /// Every code point from 1 to [CodeSpace::end], in order, with its slot.
    pub fn slots(&self) -> impl Iterator<Item = (u32, Slot)> + 'a {
        let filler_start = FIRST_CALIBRATION + self.calibration.len() as u32;

        let calibration = (FIRST_CALIBRATION..)
            .zip(self.calibration.iter())
            .map(|(index, symbol)| (index, Slot::Calibration(*symbol)));
        let filler = (filler_start..FIRST_ASCII).map(|index| (index, Slot::Filler));
        let ascii = (FIRST_ASCII..FIRST_EXTENDED).map(|index| (index, Slot::Ascii));
        let extended = (FIRST_EXTENDED..)
            .zip(self.extended.iter())
            .map(|(index, symbol)| (index, Slot::Extended(*symbol)));

        calibration.chain(filler).chain(ascii).chain(extended)
    }
}
