//! Linear RGB color type
//!
//! Linear RGB is what the Oklab matrices produce. It is clamped and gamma
//! encoded once, on the way to [`Rgb8`].

use super::rgb8::Rgb8;

/// Exponent of the simple power-law gamma used for the 8-bit encoding.
const GAMMA: f64 = 2.2;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but colors outside the sRGB
/// gamut produce channels below 0.0 or above 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel into 0.0..=1.0.
    ///
    /// This is the only gamut handling performed: channels are clipped
    /// independently, so hue may shift for out-of-gamut colors. A NaN
    /// channel clamps to 1.0, the upper bound.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: clamp_unit(self.r),
            g: clamp_unit(self.g),
            b: clamp_unit(self.b),
        }
    }
}

/// `f64::clamp` passes NaN through; NaN saturates to the upper bound here.
#[inline]
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        1.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

impl From<LinearRgb> for Rgb8 {
    /// Clamp, gamma encode with `v^(1/2.2)`, scale by 255 and truncate.
    ///
    /// ```
    /// use oklch_convert::{LinearRgb, Rgb8};
    ///
    /// let rgb = Rgb8::from(LinearRgb::new(1.5, 0.125, -0.2));
    /// assert_eq!(rgb, Rgb8::new(255, 99, 0));
    /// ```
    fn from(linear: LinearRgb) -> Self {
        let c = linear.clamped();
        Rgb8::new(encode_channel(c.r), encode_channel(c.g), encode_channel(c.b))
    }
}

/// Encode one clamped linear channel. The `as` cast truncates toward zero.
#[inline]
fn encode_channel(v: f64) -> u8 {
    (255.0 * v.powf(1.0 / GAMMA)) as u8
}
