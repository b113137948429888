//! `texfont-convfont` drives glyph extraction over a whole raster and
//! serializes the result as a font description for the `convfont` compiler.
//!
//! The compiler needs a contiguous code space starting at 1 and is sensitive
//! to record order, so records are always emitted in code point order:
//!
//! - calibration symbols from 1,
//! - blank filler glyphs up to 31,
//! - printable ASCII from 32 to 127,
//! - extended symbols from 128.
//!
//! ```no_run
//! use texfont_convfont::build_document;
//! use texfont_core::{FontProfile, GridGeometry};
//! use texfont_raster::RasterImage;
//! use texfont_symbols::SymbolTables;
//!
//! let raster = RasterImage::open("tools/tex_guide_16px.bmp").unwrap();
//! let profile = FontProfile::new("main", 16, 13, 1);
//! let document = build_document(
//!     &raster,
//!     &GridGeometry::STANDARD,
//!     &profile,
//!     SymbolTables::BUILTIN,
//!     "tools/tex_guide_16px.bmp",
//! );
//! print!("{}", document.to_text());
//! ```

mod codespace;
mod document;
mod writer;

pub use codespace::{CodeSpace, FIRST_ASCII, FIRST_CALIBRATION, FIRST_EXTENDED, SPACE, Slot};
pub use document::{CODE_PAGE, FontDocument, GlyphRecord, Header, Identity, cap_height};
pub use writer::build_document;
