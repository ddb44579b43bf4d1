//! Single-channel gray.

use std::fmt;

use crate::LinearRgb;

/// Luma coefficients used to collapse RGB to gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LumaWeights {
    /// BT.601: 0.299, 0.587, 0.114
    #[default]
    Rec601,
    /// BT.709: 0.2126, 0.7152, 0.0722
    Rec709,
}

impl LumaWeights {
    /// Red, green and blue coefficients.
    pub const fn weights(self) -> [f64; 3] {
        match self {
            Self::Rec601 => [0.299, 0.587, 0.114],
            Self::Rec709 => [0.2126, 0.7152, 0.0722],
        }
    }

    /// Weighted sum of the channels.
    #[inline]
    pub fn luma(self, rgb: LinearRgb) -> f64 {
        let [wr, wg, wb] = self.weights();
        wr * rgb.r + wg * rgb.g + wb * rgb.b
    }
}

impl fmt::Display for LumaWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rec601 => f.write_str("Rec.601"),
            Self::Rec709 => f.write_str("Rec.709"),
        }
    }
}

/// Gray level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gray {
    /// Level
    pub v: f64,
}

impl Gray {
    /// Creates a gray level.
    #[inline]
    pub const fn new(v: f64) -> Self {
        Self { v }
    }

    /// Converts from RGB with Rec.601 weights.
    #[inline]
    pub fn from_rgb(rgb: LinearRgb) -> Self {
        Self::from_rgb_with(rgb, LumaWeights::default())
    }

    /// Converts from RGB with the given weights.
    #[inline]
    pub fn from_rgb_with(rgb: LinearRgb, weights: LumaWeights) -> Self {
        Self::new(weights.luma(rgb))
    }

    /// Replicates the level into every channel.
    #[inline]
    pub fn to_rgb(self) -> LinearRgb {
        LinearRgb::new(self.v, self.v, self.v)
    }
}
