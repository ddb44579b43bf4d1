//! CIE L*a*b* encoding.
//!
//! # Formula
//!
//! ```text
//! f(t) = t^(1/3)                 if t > (6/29)^3
//!        (kappa * t + 16) / 116  otherwise, kappa = (29/3)^3
//!
//! L = 116 * f(Y/Yn) - 16
//! a = 500 * (f(X/Xn) - f(Y/Yn))
//! b = 200 * (f(Y/Yn) - f(Z/Zn))
//! ```
//!
//! The inverse uses the same breakpoint expressed on the `f` side (6/29),
//! so encode and decode are exact inverses on both segments.

use chroma_math::{Vec3, D50};
use chroma_primaries::{Profile, SRGB_D50};

use crate::{ColorResult, LinearRgb, Xyz};

/// Cube-root / linear breakpoint on the `t` side: (6/29)^3.
pub const EPSILON: f64 = 216.0 / 24389.0;

/// Slope of the linear segment times 116: (29/3)^3.
pub const KAPPA: f64 = 24389.0 / 27.0;

/// Breakpoint on the `f` side: 6/29.
const DELTA: f64 = 6.0 / 29.0;

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(u: f64) -> f64 {
    if u > DELTA {
        u * u * u
    } else {
        (116.0 * u - 16.0) / KAPPA
    }
}

/// Encodes XYZ relative to `white` into `[L, a, b]`.
pub(crate) fn encode(xyz: Vec3, white: Vec3) -> [f64; 3] {
    let t = xyz / white;
    let (fx, fy, fz) = (f(t.x), f(t.y), f(t.z));
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Decodes `[L, a, b]` relative to `white` into XYZ.
pub(crate) fn decode(lab: [f64; 3], white: Vec3) -> Vec3 {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = fy + lab[1] / 500.0;
    let fz = fy - lab[2] / 200.0;
    Vec3::new(f_inv(fx), f_inv(fy), f_inv(fz)) * white
}

/// Which white point a CIELab encoding is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabReference {
    /// Adapt to D50 before encoding (canonical).
    #[default]
    D50,
    /// Encode relative to the XYZ value's own white.
    Current,
}

/// CIE L*a*b* value relative to `white`.
///
/// # Example
///
/// ```rust
/// use chroma_color::{Lab, LinearRgb};
/// use chroma_primaries::SRGB;
///
/// let lab = LinearRgb::WHITE.to_lab(&SRGB)?;
/// assert!((lab.l - 100.0).abs() < 1e-9);
/// assert!(lab.a.abs() < 1e-9 && lab.b.abs() < 1e-9);
/// # Ok::<(), chroma_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (reference white)
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
    /// Reference white
    pub white: Vec3,
}

impl Lab {
    /// Creates a value from components and a white point.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64, white: Vec3) -> Self {
        Self { l, a, b, white }
    }

    /// Creates a value relative to D50.
    #[inline]
    pub const fn d50(l: f64, a: f64, b: f64) -> Self {
        Self::new(l, a, b, D50)
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Decodes to XYZ relative to the stored white.
    pub fn to_xyz(self) -> Xyz {
        Xyz::from_vec3(decode(self.to_array(), self.white), self.white)
    }

    /// Converts to linear RGB in the sRGB D50 profile.
    pub fn to_rgb(self) -> ColorResult<LinearRgb> {
        self.to_rgb_in(&SRGB_D50)
    }

    /// Converts to linear RGB in `profile`, adapting white points as needed.
    pub fn to_rgb_in(self, profile: &Profile) -> ColorResult<LinearRgb> {
        self.to_xyz().to_rgb(profile)
    }

    /// Re-expresses this value relative to D50.
    pub fn to_d50(self) -> Self {
        if self.white == D50 {
            return self;
        }
        self.to_xyz().to_lab()
    }

    /// CIE76 color difference: Euclidean distance in D50 Lab.
    ///
    /// ```rust
    /// use chroma_color::Lab;
    ///
    /// let a = Lab::d50(50.0, 0.0, 0.0);
    /// let b = Lab::d50(53.0, 4.0, 0.0);
    /// assert!((a.delta_e76(&b) - 5.0).abs() < 1e-12);
    /// ```
    pub fn delta_e76(&self, other: &Self) -> f64 {
        let p = self.to_d50();
        let q = other.to_d50();
        ((p.l - q.l).powi(2) + (p.a - q.a).powi(2) + (p.b - q.b).powi(2)).sqrt()
    }
}
