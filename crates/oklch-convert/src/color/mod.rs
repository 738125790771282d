//! Color types and conversion utilities
//!
//! Each color space gets its own type so a value cannot be fed into the
//! wrong stage of the conversion chain.
//!
//! # Example
//!
//! ```
//! use oklch_convert::{LinearRgb, Oklab, Oklch};
//!
//! let oklch = Oklch::new(0.5, 0.0, 0.0);
//! let oklab = Oklab::from(oklch);
//! let linear = LinearRgb::from(oklab);
//! assert!((linear.r - 0.125).abs() < 1e-9);
//! ```

mod linear_rgb;
mod oklab;
mod oklch;
mod rgb8;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use rgb8::Rgb8;
