//! CIE XYZ and CIELAB color types
//!
//! CIELAB approximates perceptual uniformity: L is lightness, a runs from
//! green to red and b from blue to yellow. Distances between Lab colors are
//! measured with [`ciede2000`](crate::ciede2000).
//!
//! # References
//!
//! IEC 61966-2-1:1999 (sRGB), CIE 15:2004 (Colorimetry)

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// D65 reference white, 2° observer, Y normalized to 1.0
const D65_XN: f64 = 0.95047;
const D65_YN: f64 = 1.00000;
const D65_ZN: f64 = 1.08883;

/// (6/29)^3, the break point of the Lab transfer function
const EPSILON: f64 = 216.0 / 24389.0;
/// (29/3)^3
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIE 1931 XYZ space, relative to D65 with Y = 1.0 for white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<LinearRgb> for Xyz {
    /// Linear sRGB to XYZ using the IEC 61966-2-1 matrix.
    fn from(rgb: LinearRgb) -> Self {
        Self {
            x: 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b,
            y: 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b,
            z: 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b,
        }
    }
}

/// A color in CIELAB space (D65 reference white).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, roughly -128.0..=128.0
/// - `b`: Blue-yellow axis, roughly -128.0..=128.0
///
/// Lab values are plain operands for the distance function. They are not
/// meant to be hashed or compared for equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    ///
    /// # Example
    ///
    /// ```
    /// use cie_lab::Lab;
    ///
    /// let gray = Lab::new(50.0, 0.0, 0.0);
    /// assert_eq!(gray.chroma(), 0.0);
    /// ```
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma magnitude `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }
}

/// Lab companding function
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D65_XN);
        let fy = lab_f(xyz.y / D65_YN);
        let fz = lab_f(xyz.z / D65_ZN);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}

impl From<Srgb> for Lab {
    /// Full pipeline: gamma decode, XYZ, Lab.
    ///
    /// # Example
    ///
    /// ```
    /// use cie_lab::{Lab, Srgb};
    ///
    /// let white = Lab::from(Srgb::from_u8(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 0.01);
    /// assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);
    /// ```
    fn from(srgb: Srgb) -> Self {
        Lab::from(LinearRgb::from(srgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance against the palette crate (different matrix derivation)
    const PALETTE_TOLERANCE: f64 = 0.05;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_black_and_white() {
        let black = Lab::from(Srgb::from_u8(0, 0, 0));
        assert!(approx_eq(black.l, 0.0, 1e-9));
        assert!(approx_eq(black.a, 0.0, 1e-9));
        assert!(approx_eq(black.b, 0.0, 1e-9));

        let white = Lab::from(Srgb::from_u8(255, 255, 255));
        assert!(approx_eq(white.l, 100.0, 0.01), "L = {}", white.l);
        assert!(approx_eq(white.a, 0.0, 0.01), "a = {}", white.a);
        assert!(approx_eq(white.b, 0.0, 0.01), "b = {}", white.b);
    }

    #[test]
    fn test_grays_are_achromatic() {
        for v in [17u8, 64, 128, 200, 250] {
            let lab = Lab::from(Srgb::from_u8(v, v, v));
            assert!(lab.chroma() < 0.01, "gray {v} has chroma {}", lab.chroma());
        }
    }

    #[test]
    fn test_primaries_known_values() {
        // Reference values for sRGB primaries under D65
        let red = Lab::from(Srgb::from_u8(255, 0, 0));
        assert!(approx_eq(red.l, 53.24, 0.05), "red L = {}", red.l);
        assert!(approx_eq(red.a, 80.09, 0.05), "red a = {}", red.a);
        assert!(approx_eq(red.b, 67.20, 0.05), "red b = {}", red.b);

        let blue = Lab::from(Srgb::from_u8(0, 0, 255));
        assert!(approx_eq(blue.l, 32.30, 0.05), "blue L = {}", blue.l);
        assert!(approx_eq(blue.b, -107.86, 0.05), "blue b = {}", blue.b);
    }

    #[test]
    fn test_lab_matches_palette_crate() {
        use palette::white_point::D65;
        use palette::{IntoColor, Lab as PaletteLab, Srgb as PaletteSrgb};

        let test_colors = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (128, 128, 128),
            (166, 123, 91),
            (1, 50, 32),
            (84, 230, 228),
        ];

        for (r, g, b) in test_colors {
            let ours = Lab::from(Srgb::from_u8(r, g, b));

            let theirs: PaletteLab<D65, f64> = PaletteSrgb::new(r, g, b)
                .into_format::<f64>()
                .into_linear()
                .into_color();

            assert!(
                approx_eq(ours.l, theirs.l, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                approx_eq(ours.a, theirs.a, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                approx_eq(ours.b, theirs.b, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }
}
