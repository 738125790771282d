//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// A decoded RGBA8 image
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedPng {
    /// Alpha of the first pixel in row `y`
    pub fn row_alpha(&self, y: u32) -> u8 {
        self.pixels[(y * self.width * 4 + 3) as usize]
    }
}

/// Assert the file is a valid RGBA8 PNG and decode it
pub fn assert_rgba_png(path: &Path) -> DecodedPng {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder.read_info().expect("valid PNG header");

    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels).expect("valid PNG frame");

    assert_eq!(info.color_type, png::ColorType::Rgba, "Expected RGBA color");
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "Expected 8-bit depth");
    pixels.truncate(info.buffer_size());

    DecodedPng {
        width: info.width,
        height: info.height,
        pixels,
    }
}

/// Extract `(name, hex)` pairs from a generated Lua color table, asserting
/// the surrounding structure on the way.
pub fn assert_lua_table(text: &str, table_name: &str) -> Vec<(String, String)> {
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(format!("local {table_name} = {{").as_str()));

    let mut entries = Vec::new();
    for line in lines.by_ref() {
        if line == "}" {
            break;
        }
        let inner = line
            .strip_prefix("    [\"")
            .and_then(|rest| rest.strip_suffix("\","))
            .unwrap_or_else(|| panic!("Malformed table entry: {line:?}"));
        let (name, hex) = inner
            .split_once("\"] = \"")
            .unwrap_or_else(|| panic!("Malformed table entry: {line:?}"));
        entries.push((name.to_string(), hex.to_string()));
    }

    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some(format!("return {table_name}").as_str()));
    assert_eq!(lines.next(), None);
    assert!(text.ends_with('\n'), "Table should end with a newline");
    entries
}
