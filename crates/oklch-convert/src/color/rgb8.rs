//! 8-bit RGB color type
//!
//! The end of the conversion chain: three `u8` channels and their
//! six-digit hex form.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// An 8-bit sRGB color. Channels are bounded to 0..=255 by their type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Six lowercase hex digits, red then green then blue, no `#` prefix.
    ///
    /// ```
    /// use oklch_convert::Rgb8;
    ///
    /// assert_eq!(Rgb8::new(254, 242, 242).to_hex(), "fef2f2");
    /// assert_eq!(Rgb8::new(0, 10, 255).to_hex(), "000aff");
    /// ```
    pub fn to_hex(self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = ParseColorError;

    /// Parse a hex color string.
    ///
    /// Supports the following formats:
    /// - `RRGGBB` / `#RRGGBB` - 6-digit hex, with or without hash
    /// - `RGB` / `#RGB` - shorthand 3-digit hex (expands to RRGGBB)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// ```
    /// use oklch_convert::Rgb8;
    ///
    /// let pink: Rgb8 = "#FEF2F2".parse().unwrap();
    /// assert_eq!(pink, Rgb8::new(254, 242, 242));
    ///
    /// let red: Rgb8 = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb8::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let mut bytes = [0u8; 3];
        match s.len() {
            3 => {
                // Shorthand: doubling each digit (F -> FF) expands it
                let doubled: String = s.chars().flat_map(|c| [c, c]).collect();
                hex::decode_to_slice(doubled, &mut bytes)?;
            }
            6 => hex::decode_to_slice(s, &mut bytes)?,
            _ => return Err(ParseColorError::InvalidLength),
        }
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }
}
