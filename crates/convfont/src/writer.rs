use texfont_core::{FontProfile, GridGeometry, RasterSource};
use texfont_extract::{CALIBRATION_GLYPH, axis_offset, extract};
use texfont_symbols::SymbolTables;

use crate::codespace::{CodeSpace, SPACE, Slot};
use crate::document::{FontDocument, GlyphRecord, Header, Identity};

/// Extract every glyph of `raster` under `profile` into a font description.
///
/// `source` identifies the raster in the document header. The result depends
/// only on the arguments, so identical inputs always serialize to identical
/// bytes.
pub fn build_document<R: RasterSource + ?Sized>(
    raster: &R,
    grid: &GridGeometry,
    profile: &FontProfile,
    tables: SymbolTables<'_>,
    source: &str,
) -> FontDocument {
    let axis = axis_offset(raster, grid, profile, CALIBRATION_GLYPH);
    log::info!(
        "Axis offset for {} (based on '+'): {}px from baseline",
        profile.id,
        axis
    );

    let records = CodeSpace::new(tables)
        .slots()
        .map(|(code_point, slot)| match identity(code_point, slot) {
            Identified::Filler => GlyphRecord::filler(code_point, profile.height),
            Identified::Glyph(identity) => GlyphRecord {
                code_point,
                identity,
                mask: extract(raster, grid, grid.cell_origin(code_point), profile),
            },
        })
        .collect();

    FontDocument {
        header: Header::new(profile, source, axis),
        records,
    }
}

enum Identified {
    Filler,
    Glyph(Option<Identity>),
}

fn identity(code_point: u32, slot: Slot) -> Identified {
    match slot {
        Slot::Filler => Identified::Filler,
        Slot::Ascii if code_point == SPACE => Identified::Glyph(Some(Identity::Name("Space"))),
        Slot::Ascii => Identified::Glyph(Some(Identity::Unicode(code_point))),
        Slot::Calibration(symbol) | Slot::Extended(symbol) => {
            Identified::Glyph(symbol.unicode.map(Identity::Unicode))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texfont_raster::RasterImage;
    use texfont_symbols::Symbol;

    const WIDTH: u32 = 320;
    const HEIGHT: u32 = 240;

    /// A single-channel raster with rectangles of ink painted into cells.
    struct Sheet {
        data: Vec<u8>,
    }

    impl Sheet {
        fn new() -> Self {
            Self {
                data: vec![0; (WIDTH * HEIGHT) as usize],
            }
        }

        /// Paint an inclusive rectangle in cell-relative coordinates.
        fn paint(mut self, index: u32, cols: (u32, u32), rows: (u32, u32)) -> Self {
            let origin = GridGeometry::STANDARD.cell_origin(index);

            for y in rows.0..=rows.1 {
                for x in cols.0..=cols.1 {
                    let px = origin.x as u32 + x;
                    let py = origin.y as u32 + y;
                    self.data[(py * WIDTH + px) as usize] = RasterImage::INK_INDEX;
                }
            }

            self
        }

        /// Mark the guide row of every cell, the way real rasters carry it.
        fn with_guides(mut self) -> Self {
            for y in (GridGeometry::STANDARD.guide_row..HEIGHT).step_by(20) {
                for x in 0..WIDTH {
                    self.data[(y * WIDTH + x) as usize] = 2;
                }
            }

            self
        }

        fn raster(self) -> RasterImage {
            RasterImage::from_indexed(WIDTH, HEIGHT, self.data).unwrap()
        }
    }

    fn main_profile() -> FontProfile {
        FontProfile::new("main", 16, 13, 1)
    }

    fn record(document: &FontDocument, code_point: u32) -> &GlyphRecord {
        document
            .records
            .iter()
            .find(|record| record.code_point == code_point)
            .unwrap()
    }

    fn sample_raster() -> RasterImage {
        Sheet::new()
            .with_guides()
            // '+': window rows 4-8 for a 13px baseline
            .paint(43, (8, 8), (6, 10))
            .paint(43, (6, 10), (8, 8))
            // 'A'
            .paint(65, (2, 9), (5, 15))
            // stray ink in the space and filler cells
            .paint(32, (4, 6), (8, 9))
            .paint(20, (1, 12), (3, 15))
            // alpha
            .paint(128, (3, 7), (9, 15))
            .raster()
    }

    #[test]
    fn header_metrics() {
        let document = build_document(
            &sample_raster(),
            &GridGeometry::STANDARD,
            &main_profile(),
            SymbolTables::BUILTIN,
            "tools/tex_guide_16px.bmp",
        );

        assert_eq!(document.header.source, "tools/tex_guide_16px.bmp");
        assert_eq!(document.header.height, 16);
        assert_eq!(document.header.baseline, 13);
        assert_eq!(document.header.cap_height, 11);
        assert_eq!(document.header.x_height, 7);
        assert!(!document.header.double_width);
    }

    #[test]
    fn glyph_records() {
        let document = build_document(
            &sample_raster(),
            &GridGeometry::STANDARD,
            &main_profile(),
            SymbolTables::BUILTIN,
            "sample",
        );

        let a = record(&document, 65);
        assert_eq!(a.identity, Some(Identity::Unicode(65)));
        assert_eq!(a.mask.width(), 9);
        // the padding column stays blank
        assert!(a.mask.rows().all(|row| !row[8]));
        assert_eq!(a.mask.rows().filter(|row| row.contains(&true)).count(), 11);

        let space = record(&document, 32);
        assert_eq!(space.identity, Some(Identity::Name("Space")));

        let alpha = record(&document, 128);
        assert_eq!(alpha.identity, Some(Identity::Unicode(0x03B1)));
        assert_eq!(alpha.mask.width(), 6);

        let union = record(&document, 1);
        assert_eq!(union.identity, Some(Identity::Unicode(0x222A)));
        assert_eq!(union.mask.width(), 4);
        assert!(union.mask.is_blank());
    }

    #[test]
    fn filler_block_is_always_blank() {
        let document = build_document(
            &sample_raster(),
            &GridGeometry::STANDARD,
            &main_profile(),
            SymbolTables::BUILTIN,
            "sample",
        );

        for code_point in 17..32 {
            let filler = record(&document, code_point);

            assert_eq!(filler.identity, None);
            assert_eq!(filler.mask.width(), 4);
            assert_eq!(filler.mask.height(), 16);
            assert!(filler.mask.is_blank());
        }

        let text = document.to_text();
        assert!(text.contains("Code point: 20\nWidth: 4\nData:\n    \n"));
        assert!(text.contains("Code point: 32\nName: Space\nWidth: "));
        assert!(!text.contains("Unicode: U+00000020"));
    }

    #[test]
    fn records_hold_their_shape() {
        let raster = sample_raster();

        for profile in [main_profile(), FontProfile::new("script", 12, 10, 1)] {
            let document = build_document(
                &raster,
                &GridGeometry::STANDARD,
                &profile,
                SymbolTables::BUILTIN,
                "sample",
            );

            let indices: Vec<u32> = document.records.iter().map(|r| r.code_point).collect();
            assert_eq!(indices, (1..128 + 61).collect::<Vec<u32>>());

            for record in &document.records {
                assert_eq!(record.mask.rows().count(), profile.height as usize);
                assert!(
                    record
                        .mask
                        .rows()
                        .all(|row| row.len() == record.mask.width() as usize)
                );
            }
        }
    }

    #[test]
    fn output_is_deterministic() {
        let profile = main_profile();

        let first = build_document(
            &sample_raster(),
            &GridGeometry::STANDARD,
            &profile,
            SymbolTables::BUILTIN,
            "sample",
        )
        .to_text();
        let second = build_document(
            &sample_raster(),
            &GridGeometry::STANDARD,
            &profile,
            SymbolTables::BUILTIN,
            "sample",
        )
        .to_text();

        assert_eq!(first, second);
    }

    #[test]
    fn symbols_without_identity_have_no_identity_line() {
        static CALIBRATION: [Symbol; 2] = [
            Symbol {
                unicode: Some(0x2200),
                label: "forall",
            },
            Symbol {
                unicode: None,
                label: "reserved",
            },
        ];

        let document = build_document(
            &Sheet::new().raster(),
            &GridGeometry::STANDARD,
            &main_profile(),
            SymbolTables {
                calibration: &CALIBRATION,
                extended: &[],
            },
            "sample",
        );

        assert_eq!(document.records.len(), 127);
        assert_eq!(record(&document, 2).identity, None);
        assert_eq!(record(&document, 3), &GlyphRecord::filler(3, 16));
        assert!(
            document
                .to_text()
                .contains("Code point: 2\nWidth: 4\nData:\n")
        );
    }

    #[test_log::test]
    fn blank_raster_still_yields_a_document() {
        let document = build_document(
            &Sheet::new().raster(),
            &GridGeometry::STANDARD,
            &main_profile(),
            SymbolTables::BUILTIN,
            "blank",
        );

        assert_eq!(document.header.x_height, 8);
        assert!(document.records.iter().all(|record| record.mask.is_blank()));
    }
}
