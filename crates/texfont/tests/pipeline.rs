use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use texfont::{
    Config, Error, FontProfile, GridGeometry, ToolOutput, ToolRunner, build, export,
    export_and_build,
};

/// Recreate an empty scratch directory for one test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("texfont-it-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Draw a raster the way the real ones look: black cells, gray grid lines,
/// a red guide row, and white glyphs.
fn draw_raster(path: &Path) {
    let grid = GridGeometry::STANDARD;
    let mut image = RgbImage::new(320, 240);

    for y in 0..240 {
        for x in 0..320 {
            if y % grid.cell_size == grid.guide_row {
                image.put_pixel(x, y, Rgb([255, 0, 0]));
            } else if x % grid.cell_size == grid.cell_size - 1 {
                image.put_pixel(x, y, Rgb([128, 128, 128]));
            }
        }
    }

    let mut paint = |index: u32, cols: (u32, u32), rows: (u32, u32)| {
        let origin = grid.cell_origin(index);
        for y in rows.0..=rows.1 {
            for x in cols.0..=cols.1 {
                image.put_pixel(
                    origin.x as u32 + x,
                    origin.y as u32 + y,
                    Rgb([255, 255, 255]),
                );
            }
        }
    };

    // '+'
    paint(43, (8, 8), (6, 10));
    paint(43, (6, 10), (8, 8));
    // 'A'
    paint(65, (2, 9), (5, 15));
    // 'g' with a descender below the guide row
    paint(103, (3, 7), (9, 17));

    image.save(path).unwrap();
}

fn profile(id: &str, height: u32, baseline: u32) -> FontProfile {
    FontProfile {
        raster: format!("{}.png", id),
        pack_name: format!("Pack{}", id),
        ..FontProfile::new(id, height, baseline, 1)
    }
}

fn config(dir: &Path) -> Config {
    Config {
        asset_dir: dir.to_owned(),
        out_dir: dir.join("out"),
        keep_bin: false,
        tools: Default::default(),
        profiles: vec![profile("main", 16, 13), profile("script", 12, 10)],
    }
}

/// Stands in for convfont and convbin, producing the files they would.
#[derive(Default)]
struct FakeTools {
    missing: bool,
    calls: RefCell<Vec<String>>,
}

impl ToolRunner for FakeTools {
    fn locate(&self, _tool: &str) -> bool {
        !self.missing
    }

    fn run(&self, tool: &str, args: &[String]) -> Result<ToolOutput, texfont_pack::PackError> {
        self.calls.borrow_mut().push(tool.to_owned());

        let output = match tool {
            "convfont" => args.last(),
            _ => args.iter().skip_while(|arg| *arg != "-o").nth(1),
        };
        if let Some(output) = output {
            fs::write(output, tool).unwrap();
        }

        Ok(ToolOutput {
            status: Some(0),
            ..Default::default()
        })
    }
}

#[test_log::test]
fn export_writes_one_document_per_profile() {
    let dir = scratch("export");
    draw_raster(&dir.join("main.png"));
    draw_raster(&dir.join("script.png"));
    let config = config(&dir);

    let profiles: Vec<&FontProfile> = config.profiles.iter().collect();
    let outcomes = export(&config, &profiles);

    assert!(outcomes.iter().all(|outcome| outcome.is_ok()));

    let main = fs::read_to_string(dir.join("main.txt")).unwrap();
    let script = fs::read_to_string(dir.join("script.txt")).unwrap();

    assert!(main.starts_with("convfont\n: Generated from "));
    assert!(main.contains("Height: 16\n"));
    assert!(main.contains("Cap height: 11\n"));
    assert!(main.contains("x-height: 7\n"));
    assert!(main.contains("Code point: 65\nUnicode: U+00000041\nWidth: 9\nData:\n"));
    assert!(main.contains("Code point: 128\nUnicode: U+000003B1\n"));
    assert_eq!(main.matches("Code point: ").count(), 188);

    // Both baselines sit on the guide row, so the axis offset agrees. The
    // script window clips the last row of 'g' but not its width.
    assert!(script.contains("Height: 12\n"));
    assert!(script.contains("Baseline: 10\n"));
    assert!(script.contains("Cap height: 8\n"));
    assert!(script.contains("x-height: 7\n"));
    assert!(script.contains("Code point: 103\nUnicode: U+00000067\nWidth: 6\n"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn export_is_deterministic() {
    let dir = scratch("determinism");
    draw_raster(&dir.join("main.png"));
    let config = config(&dir);
    let main = &config.profiles[0];

    let first = texfont::export_profile(&config, main).unwrap();
    let first = fs::read(first).unwrap();
    let second = texfont::export_profile(&config, main).unwrap();
    let second = fs::read(second).unwrap();

    assert_eq!(first, second);

    fs::remove_dir_all(&dir).unwrap();
}

#[test_log::test]
fn missing_raster_fails_only_its_profile() {
    let dir = scratch("missing");
    draw_raster(&dir.join("main.png"));
    let config = config(&dir);

    let profiles: Vec<&FontProfile> = config.profiles.iter().collect();
    let outcomes = export(&config, &profiles);

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_ok());
    assert_eq!(outcomes[1].profile, "script");
    assert!(matches!(
        outcomes[1].result,
        Err(Error::Raster(texfont_raster::RasterError::Missing { .. }))
    ));
    assert!(dir.join("main.txt").exists());
    assert!(!dir.join("script.txt").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn export_and_build_produces_archives() {
    let dir = scratch("all");
    draw_raster(&dir.join("main.png"));
    draw_raster(&dir.join("script.png"));
    let config = config(&dir);
    let tools = FakeTools::default();

    let profiles: Vec<&FontProfile> = config.profiles.iter().collect();
    let outcomes = export_and_build(&config, &tools, &profiles).unwrap();

    let archives: Vec<PathBuf> = outcomes
        .into_iter()
        .map(|outcome| outcome.result.unwrap())
        .collect();
    assert_eq!(
        archives,
        vec![
            dir.join("out").join("Packmain.8xv"),
            dir.join("out").join("Packscript.8xv"),
        ]
    );
    assert!(archives.iter().all(|archive| archive.exists()));
    assert!(!dir.join("main.bin").exists());
    assert_eq!(
        *tools.calls.borrow(),
        vec!["convfont", "convbin", "convfont", "convbin"]
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_tools_leave_no_output() {
    let dir = scratch("no-tools");
    draw_raster(&dir.join("main.png"));
    let config = config(&dir);
    let tools = FakeTools {
        missing: true,
        ..Default::default()
    };

    let profiles: Vec<&FontProfile> = config.profiles.iter().collect();
    let result = export_and_build(&config, &tools, &profiles);

    assert!(matches!(
        result,
        Err(Error::Pack(texfont_pack::PackError::MissingTool { .. }))
    ));
    assert!(!dir.join("main.txt").exists());
    assert!(tools.calls.borrow().is_empty());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn build_packs_each_profile_and_keeps_binaries() {
    let dir = scratch("build");
    let mut config = config(&dir);
    config.keep_bin = true;
    let tools = FakeTools::default();

    let profiles: Vec<&FontProfile> = config.profiles.iter().collect();
    let outcomes = build(&config, &tools, &profiles).unwrap();

    // The fake compiler does not need the description, so both packs build.
    assert!(outcomes.iter().all(|outcome| outcome.is_ok()));
    assert!(dir.join("main.bin").exists());

    fs::remove_dir_all(&dir).unwrap();
}
