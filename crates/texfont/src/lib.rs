//! `texfont` builds calculator font packs from bitmap fonts drawn on a grid.
//!
//! Each font style is described by a [FontProfile]. For every profile the
//! pipeline reads the style's raster, extracts one glyph per grid cell,
//! writes a `convfont` font description and finally compiles and packages
//! it with the external `convfont` and `convbin` tools.
//!
//! ```no_run
//! use texfont::{Config, export};
//!
//! let config = Config::default();
//! let profiles: Vec<_> = config.profiles.iter().collect();
//!
//! for outcome in export(&config, &profiles) {
//!     println!("{}: {:?}", outcome.profile, outcome.result);
//! }
//! ```

mod config;
mod pipeline;
pub mod profiles;

pub use config::Config;
pub use pipeline::{Error, Outcome, build, export, export_and_build, export_profile};
pub use texfont_convfont::{FontDocument, GlyphRecord, build_document};
pub use texfont_core::{FontProfile, GlyphMask, GridGeometry};
pub use texfont_extract::{axis_offset, extract};
pub use texfont_pack::{SystemRunner, ToolNames, ToolOutput, ToolRunner};
pub use texfont_raster::RasterImage;
pub use texfont_symbols::SymbolTables;
