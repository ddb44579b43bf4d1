//! Subtractive CMY and CMYK.

use crate::LinearRgb;

/// Cyan, magenta, yellow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmy {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
}

impl Cmy {
    /// Creates a value from components.
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64) -> Self {
        Self { c, m, y }
    }

    /// Complements each RGB channel.
    #[inline]
    pub fn from_rgb(rgb: LinearRgb) -> Self {
        Self::new(1.0 - rgb.r, 1.0 - rgb.g, 1.0 - rgb.b)
    }

    /// Complements each channel back to RGB.
    #[inline]
    pub fn to_rgb(self) -> LinearRgb {
        LinearRgb::new(1.0 - self.c, 1.0 - self.m, 1.0 - self.y)
    }

    /// Extracts black as the minimum channel.
    #[inline]
    pub fn to_cmyk(self) -> Cmyk {
        Cmyk::from_cmy(self)
    }
}

/// Cyan, magenta, yellow, black.
///
/// # Example
///
/// ```rust
/// use chroma_color::{Cmy, Cmyk};
///
/// let k = Cmyk::from_cmy(Cmy::new(1.0, 1.0, 1.0));
/// assert_eq!(k, Cmyk::new(0.0, 0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
    /// Black
    pub k: f64,
}

impl Cmyk {
    /// Creates a value from components.
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Extracts `k = min(c, m, y)` and rescales the rest by `1 - k`.
    ///
    /// Full black (`k >= 1`) leaves nothing to rescale; C, M and Y are 0.
    pub fn from_cmy(cmy: Cmy) -> Self {
        let k = cmy.c.min(cmy.m).min(cmy.y);
        if k >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, k);
        }
        let s = 1.0 - k;
        Self::new((cmy.c - k) / s, (cmy.m - k) / s, (cmy.y - k) / s, k)
    }

    /// Folds black back into each channel.
    pub fn to_cmy(self) -> Cmy {
        let s = 1.0 - self.k;
        Cmy::new(self.c * s + self.k, self.m * s + self.k, self.y * s + self.k)
    }

    /// Converts from linear RGB through CMY.
    #[inline]
    pub fn from_rgb(rgb: LinearRgb) -> Self {
        Self::from_cmy(Cmy::from_rgb(rgb))
    }

    /// Converts to linear RGB through CMY.
    #[inline]
    pub fn to_rgb(self) -> LinearRgb {
        self.to_cmy().to_rgb()
    }
}
