//! Parsing of `--color-*` custom properties holding `oklch()` values.
//!
//! Both parsers are total: input that does not match yields `None`, never an
//! error. Callers skip such lines.

use oklch_convert::Oklch;
use regex::Regex;
use std::sync::OnceLock;

/// `--color-<name>: oklch(...);`, anchored at the start of the line.
/// Anything after the terminating `;` is ignored.
fn css_declaration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^--color-(\S+):\s+(oklch\(.+?\));").expect("valid CSS declaration regex")
    })
}

/// `oklch(<L>% <C> <H>)` with unsigned decimal numbers.
fn oklch_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^oklch\(([0-9]+\.?[0-9]*)%\s+([0-9]+\.?[0-9]*)\s+([0-9]+\.?[0-9]*)\)")
            .expect("valid oklch regex")
    })
}

/// Split a CSS line into the color name and its `oklch(...)` value.
///
/// The line is expected to be trimmed already.
pub fn parse_css_line(line: &str) -> Option<(String, String)> {
    let caps = css_declaration_re().captures(line)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// Parse an `oklch(<L>% <C> <H>)` string. L is normalized from percent to 0..=1.
pub fn parse_oklch(value: &str) -> Option<Oklch> {
    let caps = oklch_value_re().captures(value)?;
    let l: f64 = caps[1].parse().ok()?;
    let c: f64 = caps[2].parse().ok()?;
    let h: f64 = caps[3].parse().ok()?;
    Some(Oklch::new(l / 100.0, c, h))
}

/// Parse a CSS line and convert its color, returning `(name, hex)`.
pub fn convert_css_line(line: &str) -> Option<(String, String)> {
    let (name, value) = parse_css_line(line)?;
    let oklch = parse_oklch(&value)?;
    Some((name, oklch.to_rgb8().to_hex()))
}
