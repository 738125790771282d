//! OKLCH stylesheet → Lua color table.
//!
//! Reads a file of `--color-<name>: oklch(...)` declarations and writes a
//! Lua module returning a `name → "rrggbb"` table, in input order.

use crate::error::ColorTableError;
use crate::services::css_parser::convert_css_line;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Ordered mapping of color names to lowercase hex strings.
///
/// Re-inserting a name replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    entries: IndexMap<String, String>,
}

/// Outcome of a successful [`convert_file`] run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    /// Number of entries in the written table (after duplicate names collapse)
    pub converted: usize,
    /// Where the table was written
    pub output: PathBuf,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from stylesheet text. Lines that do not hold a
    /// convertible `--color-*` declaration are skipped.
    pub fn from_css_str(text: &str) -> Self {
        let mut table = Self::new();
        let mut skipped = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match convert_css_line(line) {
                Some((name, hex)) => table.insert(name, hex),
                None => skipped += 1,
            }
        }

        tracing::debug!(
            entries = table.len(),
            skipped,
            "Parsed color declarations"
        );
        table
    }

    /// Insert or replace a color.
    pub fn insert(&mut self, name: String, hex: String) {
        self.entries.insert(name, hex);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the table as a Lua module.
    ///
    /// Keys are written verbatim between double quotes, as parsed.
    pub fn to_lua(&self, table_name: &str) -> String {
        let mut out = format!("local {table_name} = {{\n");
        for (name, hex) in self.iter() {
            out.push_str(&format!("    [\"{name}\"] = \"{hex}\",\n"));
        }
        out.push_str(&format!("}}\n\nreturn {table_name}\n"));
        out
    }
}

/// Convert the stylesheet at `input` and write the Lua table to `output`.
pub fn convert_file(
    input: &Path,
    output: &Path,
    table_name: &str,
) -> Result<ConversionReport, ColorTableError> {
    let text = std::fs::read_to_string(input).map_err(|source| ColorTableError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let table = ColorTable::from_css_str(&text);

    std::fs::write(output, table.to_lua(table_name)).map_err(|source| {
        ColorTableError::WriteOutput {
            path: output.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(
        entries = table.len(),
        input = %input.display(),
        output = %output.display(),
        "Wrote color table"
    );

    Ok(ConversionReport {
        converted: table.len(),
        output: output.to_path_buf(),
    })
}
