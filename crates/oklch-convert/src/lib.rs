// Generated color constants carry more digits than f64 needs; keep them as
// published rather than reformatting them.
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

//! oklch-convert: OKLCH to sRGB hex conversion
//!
//! This library turns CSS-style OKLCH colors into 8-bit RGB triples and
//! six-digit hex strings, the form game-addon color tables store.
//!
//! # Quick Start
//!
//! ```
//! use oklch_convert::Oklch;
//!
//! let red = Oklch::new(0.637, 0.237, 25.331);
//! assert_eq!(red.to_rgb8().to_hex(), "fa2f39");
//! ```
//!
//! # Color Spaces
//!
//! | Color Space | Components | Used For |
//! |-------------|------------|----------|
//! | [`Oklch`] | lightness, chroma, hue (degrees) | Input, as written in CSS |
//! | [`Oklab`] | lightness, a, b | Cartesian form of Oklch |
//! | [`LinearRgb`] | r, g, b (linear light) | Matrix output, clamped before encoding |
//! | [`Rgb8`] | r, g, b (0..=255) | Final channels and hex output |
//!
//! ## Pipeline Overview
//!
//! ```text
//! Oklch  (L, C, h in degrees)
//!   |
//!   +--> precision override?  --yes--> Rgb8(254, 242, 242)
//!   |
//!   v
//! Oklab  (a = C cos h, b = C sin h)
//!   |
//!   v
//! LMS'   (inverse M2), cubed
//!   |
//!   v
//! LinearRgb  (inverse M1), clamped to 0..=1
//!   |
//!   v
//! Rgb8   (255 * v^(1/2.2), truncated)
//!   |
//!   v
//! hex    ("rrggbb", lowercase, no prefix)
//! ```
//!
//! ## Gamma
//!
//! The final encoding step uses a plain 2.2 power curve, not the piecewise
//! IEC 61966-2-1 transfer function, and truncates instead of rounding.
//! Generated tables are compared byte-for-byte against earlier output, so
//! both choices are part of the contract.
//!
//! All math is `f64`. Single precision shifts enough channels across an
//! integer boundary to change the generated hex values.

pub mod color;
pub mod error;

pub use color::{LinearRgb, Oklab, Oklch, Rgb8};
pub use error::ParseColorError;
