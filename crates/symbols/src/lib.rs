#![no_std]

//! `texfont-symbols` holds the identity tables for the glyph blocks of a
//! `texfont` raster which are not plain ASCII.
//!
//! The tables live as data files under `data/` and are compiled in by the
//! build script, so adding a symbol never touches any code.

include!(concat!(env!("OUT_DIR"), "/symbol_tables.rs"));

/// One entry of a symbol table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Unicode scalar value this glyph represents, if it has one.
    pub unicode: Option<u32>,
    /// Short name, e.g. `alpha`.
    pub label: &'static str,
}

/// The ordered identity tables used to lay out a font's code space.
#[derive(Debug, Copy, Clone)]
pub struct SymbolTables<'a> {
    /// Glyphs placed right after code point zero.
    pub calibration: &'a [Symbol],
    /// Glyphs placed from code point 128 upward.
    pub extended: &'a [Symbol],
}

impl SymbolTables<'static> {
    /// The tables shipped with this crate.
    pub const BUILTIN: SymbolTables<'static> = SymbolTables {
        calibration: &CALIBRATION_SYMBOLS,
        extended: &EXTENDED_SYMBOLS,
    };
}

impl Default for SymbolTables<'static> {
    fn default() -> Self {
        Self::BUILTIN
    }
}
