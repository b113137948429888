use texfont_core::{FontProfile, GlyphMask};

/// Character encoding declared in every document.
pub const CODE_PAGE: &str = "Win-1252";

/// Cell written for ink in a row of glyph data.
const INK: char = '#';
/// Cell written for anything else.
const BLANK: char = ' ';

/// Font-wide metrics written before the glyph data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Where the glyphs were read from.
    pub source: String,
    pub height: u32,
    pub double_width: bool,
    pub code_page: &'static str,
    pub baseline: u32,
    pub cap_height: u32,
    /// Carries the axis offset: the distance from the baseline to the center
    /// of the calibration glyph.
    pub x_height: i32,
    pub space_above: u32,
    pub space_below: u32,
}

impl Header {
    pub fn new(profile: &FontProfile, source: &str, axis_offset: i32) -> Self {
        Self {
            source: source.to_owned(),
            height: profile.height,
            double_width: false,
            code_page: CODE_PAGE,
            baseline: profile.baseline,
            cap_height: cap_height(profile.height),
            x_height: axis_offset,
            space_above: 0,
            space_below: 0,
        }
    }
}

/// Cap height derived from the glyph height: 70%, rounded half up.
///
/// Computed in 64 bits so any configured height is accepted.
pub fn cap_height(height: u32) -> u32 {
    let rounded = (u64::from(height) * 7 + 5) / 10;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// How a glyph is identified to the compiler.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Identity {
    Name(&'static str),
    Unicode(u32),
}

/// One glyph entry of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    pub code_point: u32,
    pub identity: Option<Identity>,
    pub mask: GlyphMask,
}

impl GlyphRecord {
    /// A blank placeholder glyph with no identity.
    pub fn filler(code_point: u32, height: u32) -> Self {
        Self {
            code_point,
            identity: None,
            mask: GlyphMask::empty(height),
        }
    }
}

/// A complete font description, ready to be handed to `convfont`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDocument {
    pub header: Header,
    /// Glyphs in emission order.
    pub records: Vec<GlyphRecord>,
}

impl FontDocument {
    /// Serialize the document in the `convfont` text format.
    pub fn to_text(&self) -> String {
        let mut out = generate_header(&self.header);

        for record in &self.records {
            out.push_str(&generate_record(record));
        }

        out
    }
}

fn generate_header(header: &Header) -> String {
    let mut out = String::new();

    out.push_str("convfont\n");
    out.push_str(&format!(": Generated from {}\n", header.source));
    out.push_str(&format!("Height: {}\n", header.height));
    out.push_str(&format!("Double width: {}\n", header.double_width));
    out.push_str(&format!("Code page: {}\n", header.code_page));
    out.push_str(&format!("Baseline: {}\n", header.baseline));
    out.push_str(&format!("Cap height: {}\n", header.cap_height));
    out.push_str(&format!("x-height: {}\n", header.x_height));
    out.push_str(&format!("Space above: {}\n", header.space_above));
    out.push_str(&format!("Space below: {}\n", header.space_below));
    out.push_str("Font Data:\n");

    out
}

fn generate_record(record: &GlyphRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("Code point: {}\n", record.code_point));

    match record.identity {
        Some(Identity::Name(name)) => out.push_str(&format!("Name: {}\n", name)),
        Some(Identity::Unicode(cp)) => out.push_str(&format!("Unicode: U+{:08X}\n", cp)),
        None => {}
    }

    out.push_str(&format!("Width: {}\n", record.mask.width()));
    out.push_str("Data:\n");

    for row in record.mask.rows() {
        out.extend(row.iter().map(|&ink| if ink { INK } else { BLANK }));
        out.push('\n');
    }

    out.push('\n');

    out
}
