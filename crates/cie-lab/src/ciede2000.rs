//! CIEDE2000 color difference (ΔE00)
//!
//! Implements CIE Technical Report 142-2001 following the worked formulation
//! in Sharma, Wu & Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005).
//!
//! Rough reading of the result:
//! - below 1.0: imperceptible
//! - 1.0 to 2.0: perceptible on close inspection
//! - 2.0 to 10.0: noticeable at a glance
//! - above 10.0: clearly different colors

use super::lab::Lab;

/// 25^7, used by the G factor and the rotation term
const POW25_7: f64 = 6_103_515_625.0;

/// Parametric weighting factors (1.0 for reference conditions)
const KL: f64 = 1.0;
const KC: f64 = 1.0;
const KH: f64 = 1.0;

/// Hue angle in degrees, 0.0..360.0. Achromatic colors get 0.0.
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Perceptual distance between two Lab colors.
///
/// The result is non-negative, zero for identical inputs and symmetric in
/// its arguments.
///
/// # Example
///
/// ```
/// use cie_lab::{ciede2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((ciede2000(a, b) - 2.0425).abs() < 1e-4);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    // Step 1: adjusted a', C', h'
    let c_ab_mean = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c_ab_mean_7 = c_ab_mean.powi(7);
    let g = 0.5 * (1.0 - (c_ab_mean_7 / (c_ab_mean_7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * lab1.a;
    let a2p = (1.0 + g) * lab2.a;
    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);
    let h1p = hue_degrees(a1p, lab1.b);
    let h2p = hue_degrees(a2p, lab2.b);

    // Step 2: ΔL', ΔC', ΔH'
    let delta_lp = lab2.l - lab1.l;
    let delta_cp = c2p - c1p;

    let chroma_product = c1p * c2p;
    let delta_hp = if chroma_product == 0.0 {
        0.0
    } else {
        let dh = h2p - h1p;
        if dh > 180.0 {
            dh - 360.0
        } else if dh < -180.0 {
            dh + 360.0
        } else {
            dh
        }
    };
    let delta_big_hp = 2.0 * chroma_product.sqrt() * (delta_hp.to_radians() / 2.0).sin();

    // Step 3: weighting functions
    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_mean = (c1p + c2p) / 2.0;

    let h_mean = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_offset_sq = (l_mean - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * c_mean;
    let sh = 1.0 + 0.015 * c_mean * t;

    // Rotation term for the blue region
    let delta_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let c_mean_7 = c_mean.powi(7);
    let rc = 2.0 * (c_mean_7 / (c_mean_7 + POW25_7)).sqrt();
    let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

    let term_l = delta_lp / (KL * sl);
    let term_c = delta_cp / (KC * sc);
    let term_h = delta_big_hp / (KH * sh);

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h)
        .max(0.0)
        .sqrt()
}
