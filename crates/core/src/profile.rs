use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Everything needed to turn one font style's raster into a font pack.
///
/// Profiles are plain configuration and are never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontProfile {
    /// Short identifier, e.g. `main`.
    pub id: String,
    /// File name of the grid raster, relative to the asset directory.
    #[serde(default)]
    pub raster: String,
    /// File name of the generated font description.
    #[serde(default)]
    pub document: String,
    /// File name of the intermediate binary font produced by the compiler.
    #[serde(default)]
    pub blob: String,
    /// Name of the packaged archive.
    #[serde(default)]
    pub pack_name: String,
    /// Human-readable font name.
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Extra style arguments passed to the font compiler.
    #[serde(default)]
    pub style_flags: Vec<String>,
    /// Glyph height, in pixels. Every glyph is exactly this tall.
    pub height: u32,
    /// Row of the baseline, counted from the top of the glyph.
    pub baseline: u32,
    /// Blank columns appended to the right of each glyph.
    #[serde(default)]
    pub padding: u32,
}

impl FontProfile {
    /// A profile with the given metrics and file names derived from `id`.
    pub fn new(id: &str, height: u32, baseline: u32, padding: u32) -> Self {
        Self {
            id: id.to_string(),
            raster: alloc::format!("{id}.bmp"),
            document: alloc::format!("{id}.txt"),
            blob: alloc::format!("{id}.bin"),
            pack_name: id.to_string(),
            display_name: id.to_string(),
            description: String::new(),
            style_flags: Vec::new(),
            height,
            baseline,
            padding,
        }
    }
}
