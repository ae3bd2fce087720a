#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

//! cie-lab: hex sRGB parsing, CIELAB conversion and CIEDE2000
//!
//! This library turns 6-digit hex color codes into CIELAB coordinates and
//! measures the perceptual difference between two Lab colors with the
//! CIEDE2000 formula.
//!
//! # Quick Start
//!
//! ```
//! use cie_lab::{ciede2000, hex_to_lab};
//!
//! let white = hex_to_lab("ffffff").unwrap();
//! let near_white = hex_to_lab("#FFFFFE").unwrap();
//!
//! let distance = ciede2000(white, near_white);
//! assert!(distance > 0.0 && distance < 1.0);
//! ```
//!
//! # Conversion Pipeline
//!
//! ```text
//! "a67b5b"        hex text (optionally '#'-prefixed, any case)
//!     |
//!     v
//! Srgb            8-bit gamma-encoded channels
//!     |
//!     v
//! LinearRgb       gamma decode via 256-entry LUT
//!     |
//!     v
//! Xyz             sRGB primaries, D65 white
//!     |
//!     v
//! Lab             CIELAB relative to D65
//! ```
//!
//! All arithmetic is done in `f64`. The reference white is D65 because the
//! sRGB primaries are defined against it, so no chromatic adaptation step is
//! needed.

mod ciede2000;
mod error;
mod lab;
mod linear_rgb;
mod lut;
mod srgb;

pub use ciede2000::ciede2000;
pub use error::ParseColorError;
pub use lab::{Lab, Xyz};
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;

/// Parse a hex code and convert it straight to CIELAB.
///
/// Accepts the same input as [`Srgb`]'s `FromStr` implementation.
///
/// # Errors
///
/// Returns [`ParseColorError`] if the text is not a 6-digit hex code.
///
/// # Example
///
/// ```
/// let black = cie_lab::hex_to_lab("000000").unwrap();
/// assert!(black.l.abs() < 1e-9);
/// assert!(cie_lab::hex_to_lab("00000").is_err());
/// ```
pub fn hex_to_lab(hex_code: &str) -> Result<Lab, ParseColorError> {
    let srgb: Srgb = hex_code.parse()?;
    Ok(Lab::from(srgb))
}
