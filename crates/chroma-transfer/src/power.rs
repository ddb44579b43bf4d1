//! Pure power-law gamma curves.
//!
//! `encode(l) = l^(1/gamma)`, `decode(v) = v^gamma`. No linear segment and
//! no guarding: negative input yields NaN for non-integer exponents.

/// Decodes a power-law encoded value: `v^gamma`.
///
/// ```rust
/// use chroma_transfer::power::decode;
///
/// assert!((decode(0.5, 2.2) - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn decode(v: f64, gamma: f64) -> f64 {
    v.powf(gamma)
}

/// Encodes linear light with a power law: `l^(1/gamma)`.
#[inline]
pub fn encode(l: f64, gamma: f64) -> f64 {
    l.powf(1.0 / gamma)
}
