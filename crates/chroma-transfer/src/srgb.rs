//! sRGB gamma codec.
//!
//! A linear toe near black joins an offset 2.4 power curve; the combination
//! tracks a plain 2.2 gamma closely.
//!
//! # Range
//!
//! - Input/Output: [0, 1], not clamped
//!
//! # Thresholds
//!
//! The decode threshold is the literal `0.04045`, not the encode threshold
//! scaled by the slope (`0.0031308 * 12.92 = 0.040449936`).
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Linear-side breakpoint of the encode curve.
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// Encoded-side breakpoint of the decode curve.
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Slope of the linear segment.
pub const SLOPE: f64 = 12.92;

/// Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::decode;
///
/// let linear = decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(v: f64) -> f64 {
    if v <= DECODE_THRESHOLD {
        v / SLOPE
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::encode;
///
/// let encoded = encode(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(l: f64) -> f64 {
    if l <= ENCODE_THRESHOLD {
        l * SLOPE
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}
