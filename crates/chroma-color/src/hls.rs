//! HLS (hue, lightness, saturation).

use crate::hue::{chromatic_order, hue_from_order, normalize_hue, sector_rgb};
use crate::LinearRgb;

/// Hue in radians [0, 2pi), lightness and saturation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hls {
    /// Hue (radians)
    pub h: f64,
    /// Lightness
    pub l: f64,
    /// Saturation
    pub s: f64,
}

impl Hls {
    /// Creates a value from components.
    #[inline]
    pub const fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }

    /// Converts from linear RGB.
    ///
    /// Saturation is 0 for achromatic input.
    pub fn from_rgb(rgb: LinearRgb) -> Self {
        let order = chromatic_order(rgb);
        let (min, max) = (order[0].value, order[2].value);
        let chroma = max - min;
        let l = (max + min) / 2.0;
        let s = if chroma == 0.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * l - 1.0).abs())
        };
        Self::new(normalize_hue(hue_from_order(&order, chroma)), l, s)
    }

    /// Converts to linear RGB.
    pub fn to_rgb(self) -> LinearRgb {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        sector_rgb(self.h, chroma, self.l - chroma / 2.0)
    }
}
