//! Print a line of text rendered with the glyphs extracted from a raster.
//!
//! ```text
//! cargo run --example preview -- tools/tex_guide_16px.bmp "a+b=c"
//! ```

use texfont::{FontDocument, GlyphRecord, GridGeometry, RasterImage, SymbolTables, profiles};

fn find_glyph(document: &FontDocument, character: char) -> Option<&GlyphRecord> {
    document
        .records
        .iter()
        .find(|record| record.code_point == character as u32)
}

fn render_line(document: &FontDocument, text: &str) -> Vec<String> {
    let mut lines = vec![String::new(); document.header.height as usize];

    for character in text.chars() {
        let Some(glyph) = find_glyph(document, character) else {
            eprintln!("No glyph for {:?}", character);
            continue;
        };

        for (line, row) in lines.iter_mut().zip(glyph.mask.rows()) {
            line.extend(row.iter().map(|&ink| if ink { '#' } else { '.' }));
        }
    }

    lines
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "tools/tex_guide_16px.bmp".to_owned());
    let text = args.next().unwrap_or_else(|| "x+y=z".to_owned());

    let raster = RasterImage::open(&path)?;
    let profile = profiles::main();

    let document = texfont::build_document(
        &raster,
        &GridGeometry::STANDARD,
        &profile,
        SymbolTables::BUILTIN,
        &path,
    );

    println!(
        "{} ({}px, baseline {}, axis {}px)",
        profile.display_name,
        document.header.height,
        document.header.baseline,
        document.header.x_height
    );

    for (y, line) in render_line(&document, &text).iter().enumerate() {
        let marker = if y as u32 == document.header.baseline { '<' } else { ' ' };
        println!("{}{}", line, marker);
    }

    Ok(())
}
