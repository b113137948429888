use std::{fs, path::PathBuf};

/// Glyphs available below the first printable ASCII code point.
const MAX_CALIBRATION: usize = 31;
/// Glyphs available above ASCII in an 8-bit code page.
const MAX_EXTENDED: usize = 128;

#[derive(Debug, Clone)]
struct Entry {
    pub unicode: Option<u32>,
    pub label: String,
}

impl Entry {
    /// Parse a single `0xHHHH label` or `- label` line.
    fn from_line(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();

        let code = parts.next().ok_or("missing code point")?;
        let label = parts.next().ok_or("missing label")?.to_owned();

        if let Some(extra) = parts.next() {
            return Err(format!("unexpected trailing field {:?}", extra));
        }

        let unicode = match code {
            "-" => None,
            hex => {
                let digits = hex
                    .strip_prefix("0x")
                    .ok_or_else(|| format!("code point {:?} must start with 0x", hex))?;
                let value = u32::from_str_radix(digits, 16)
                    .map_err(|_| format!("invalid code point {:?}", hex))?;
                char::from_u32(value)
                    .ok_or_else(|| format!("{:?} is not a Unicode scalar value", hex))?;
                Some(value)
            }
        };

        Ok(Self { unicode, label })
    }
}

/// Load a symbol table file.
fn load_table(file: &str, name: &str) -> Vec<Entry> {
    let mut entries = Vec::new();

    for (lineno, line) in file.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((content, _comment)) => content,
            None => line,
        }
        .trim();

        if line.is_empty() {
            continue;
        }

        match Entry::from_line(line) {
            Ok(entry) => entries.push(entry),
            Err(err) => panic!("{} line {}: {}", name, lineno + 1, err),
        }
    }

    entries
}

/// Generate the table definition Rust code that will be included in the crate.
fn generate_rust(table: &[Entry], name: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "static {}_SYMBOLS: [Symbol; {}] = [\n",
        name,
        table.len()
    ));

    for entry in table {
        let unicode = match entry.unicode {
            Some(cp) => format!("Some(0x{:04X})", cp),
            None => "None".to_owned(),
        };

        out.push_str(&format!(
            "    Symbol {{ unicode: {}, label: {:?} }},\n",
            unicode, entry.label
        ));
    }

    out.push_str("];\n\n");

    out
}

fn main() {
    let calibration = load_table(
        &fs::read_to_string("data/calibration.txt").unwrap(),
        "calibration.txt",
    );
    let extended = load_table(
        &fs::read_to_string("data/extended.txt").unwrap(),
        "extended.txt",
    );

    if calibration.len() > MAX_CALIBRATION {
        panic!(
            "calibration table has {} entries, at most {} fit below ASCII",
            calibration.len(),
            MAX_CALIBRATION
        );
    }

    if extended.len() > MAX_EXTENDED {
        panic!(
            "extended table has {} entries, at most {} fit above ASCII",
            extended.len(),
            MAX_EXTENDED
        );
    }

    let mut out = generate_rust(&calibration, "CALIBRATION");
    out.push_str(&generate_rust(&extended, "EXTENDED"));

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("symbol_tables.rs");

    fs::write(out_file, out).unwrap();

    println!("cargo:rerun-if-changed=data/calibration.txt");
    println!("cargo:rerun-if-changed=data/extended.txt");
}
