//! The font styles shipped with `texfont`.

use texfont_core::FontProfile;

/// The main 16px math font.
pub fn main() -> FontProfile {
    FontProfile {
        id: "main".to_owned(),
        raster: "tex_guide_16px.bmp".to_owned(),
        document: "tex_main.txt".to_owned(),
        blob: "tex_main.bin".to_owned(),
        pack_name: "TeXFonts".to_owned(),
        display_name: "TeX Main".to_owned(),
        description: "Main 16px Math Font".to_owned(),
        style_flags: flags(&["-w", "normal", "-s", "sans-serif"]),
        height: 16,
        baseline: 13,
        padding: 1,
    }
}

/// The 12px script font used for sub- and superscripts.
pub fn script() -> FontProfile {
    FontProfile {
        id: "script".to_owned(),
        raster: "tex_script_12px_guided.bmp".to_owned(),
        document: "tex_script.txt".to_owned(),
        blob: "tex_script.bin".to_owned(),
        pack_name: "TeXScrpt".to_owned(),
        display_name: "TeX Script".to_owned(),
        description: "Script 12px Math Font".to_owned(),
        style_flags: flags(&["-w", "normal"]),
        height: 12,
        baseline: 10,
        padding: 1,
    }
}

/// Every built-in profile, in build order.
pub fn builtin() -> Vec<FontProfile> {
    vec![main(), script()]
}

fn flags(flags: &[&str]) -> Vec<String> {
    flags.iter().map(|flag| flag.to_string()).collect()
}
