//! Analog YUV (BT.601 weights).

use crate::LinearRgb;

/// Red luma weight.
pub const WR: f64 = 0.299;
/// Green luma weight.
pub const WG: f64 = 0.587;
/// Blue luma weight.
pub const WB: f64 = 0.114;
/// Maximum |U|.
pub const U_MAX: f64 = 0.436;
/// Maximum |V|.
pub const V_MAX: f64 = 0.615;

/// Luma and two color-difference channels.
///
/// ```rust
/// use chroma_color::{LinearRgb, Yuv};
///
/// let yuv = Yuv::from_rgb(LinearRgb::WHITE);
/// assert!((yuv.y - 1.0).abs() < 1e-12);
/// assert!(yuv.u.abs() < 1e-12 && yuv.v.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Yuv {
    /// Luma
    pub y: f64,
    /// Blue difference
    pub u: f64,
    /// Red difference
    pub v: f64,
}

impl Yuv {
    /// Creates a value from components.
    #[inline]
    pub const fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }

    /// Converts from linear RGB.
    pub fn from_rgb(rgb: LinearRgb) -> Self {
        let y = WR * rgb.r + WG * rgb.g + WB * rgb.b;
        let u = U_MAX * (rgb.b - y) / (1.0 - WB);
        let v = V_MAX * (rgb.r - y) / (1.0 - WR);
        Self::new(y, u, v)
    }

    /// Converts to linear RGB.
    pub fn to_rgb(self) -> LinearRgb {
        let b = self.y + self.u * (1.0 - WB) / U_MAX;
        let r = self.y + self.v * (1.0 - WR) / V_MAX;
        let g = (self.y - WR * r - WB * b) / WG;
        LinearRgb::new(r, g, b)
    }
}
