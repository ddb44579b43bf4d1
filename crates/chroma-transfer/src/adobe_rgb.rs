//! AdobeRGB (1998) transfer function.
//!
//! A pure 2.2 power curve with a short linear toe (slope 32) near black.
//!
//! # Range
//!
//! - Input/Output: [0, 1], not clamped

/// Linear-side breakpoint of the encode curve.
pub const ENCODE_THRESHOLD: f64 = 0.00174;

/// Encoded-side breakpoint of the decode curve.
pub const DECODE_THRESHOLD: f64 = 0.0556;

/// Slope of the linear toe.
pub const SLOPE: f64 = 32.0;

/// Curve exponent.
pub const GAMMA: f64 = 2.2;

/// Decodes AdobeRGB encoded values to linear light.
///
/// ```text
/// if V <= 0.0556: L = V / 32
/// else:           L = V^2.2
/// ```
#[inline]
pub fn decode(v: f64) -> f64 {
    if v <= DECODE_THRESHOLD {
        v / SLOPE
    } else {
        v.powf(GAMMA)
    }
}

/// Encodes linear light to AdobeRGB.
///
/// ```text
/// if L <= 0.00174: V = 32 * L
/// else:            V = L^(1/2.2)
/// ```
#[inline]
pub fn encode(l: f64) -> f64 {
    if l <= ENCODE_THRESHOLD {
        l * SLOPE
    } else {
        l.powf(1.0 / GAMMA)
    }
}
