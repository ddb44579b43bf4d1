//! HSV (hue, saturation, value).

use crate::hue::{chromatic_order, hue_from_order, normalize_hue, sector_rgb};
use crate::LinearRgb;

/// Hue in radians [0, 2pi), saturation and value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue (radians)
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value
    pub v: f64,
}

impl Hsv {
    /// Creates a value from components.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Converts from linear RGB.
    ///
    /// Saturation is 0 for black.
    pub fn from_rgb(rgb: LinearRgb) -> Self {
        let order = chromatic_order(rgb);
        let max = order[2].value;
        let chroma = max - order[0].value;
        let s = if max == 0.0 { 0.0 } else { chroma / max };
        Self::new(normalize_hue(hue_from_order(&order, chroma)), s, max)
    }

    /// Converts to linear RGB.
    pub fn to_rgb(self) -> LinearRgb {
        let chroma = self.v * self.s;
        sector_rgb(self.h, chroma, self.v - chroma)
    }
}
