//! Linear RGB color type
//!
//! Linear RGB is proportional to physical light intensity. The XYZ matrix
//! only applies to linear values.

use super::lut::srgb8_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space (sRGB primaries).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity, 0.0..=1.0)
    pub r: f64,
    /// Green channel (linear light intensity, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (linear light intensity, 0.0..=1.0)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode each 8-bit channel through the lookup table.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb8_to_linear(srgb.r),
            g: srgb8_to_linear(srgb.g),
            b: srgb8_to_linear(srgb.b),
        }
    }
}
