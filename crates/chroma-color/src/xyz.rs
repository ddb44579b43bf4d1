//! CIE XYZ values tagged with their reference white.

use chroma_math::{adapt_with, AdaptationMethod, Vec3, D50};
use chroma_primaries::{xyz_to_rgb_matrix, Profile};
use tracing::trace;

use crate::{lab, ColorResult, Lab, LabReference, LinearRgb};

/// CIE XYZ tristimulus value relative to `white`.
///
/// Two values are only combinable when their white points are equal
/// component-wise; [`Xyz::adapt_to`] re-expresses a value under another
/// white.
///
/// # Example
///
/// ```rust
/// use chroma_color::Xyz;
/// use chroma_math::{D50, D65};
///
/// let xyz = Xyz::new(0.4, 0.35, 0.2, D65);
/// let adapted = xyz.adapt_to(D50);
/// assert_eq!(adapted.white, D50);
/// assert_eq!(xyz.white, D65);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X
    pub x: f64,
    /// Y (luminance)
    pub y: f64,
    /// Z
    pub z: f64,
    /// Reference white (Xn, 1, Zn)
    pub white: Vec3,
}

impl Xyz {
    /// Creates a value from tristimulus components and a white point.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, white: Vec3) -> Self {
        Self { x, y, z, white }
    }

    /// Creates a value from a vector and a white point.
    #[inline]
    pub const fn from_vec3(v: Vec3, white: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, white)
    }

    /// Tristimulus components as a vector.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// True when `other` shares this value's white point.
    #[inline]
    pub fn same_white(&self, other: &Self) -> bool {
        self.white == other.white
    }

    /// Re-expresses this value under `white` with Bradford adaptation.
    ///
    /// Returns `self` unchanged when the white points are already equal.
    pub fn adapt_to(self, white: Vec3) -> Self {
        self.adapt_to_with(AdaptationMethod::Bradford, white)
    }

    /// Re-expresses this value under `white` with `method`.
    pub fn adapt_to_with(self, method: AdaptationMethod, white: Vec3) -> Self {
        if self.white == white {
            return self;
        }
        Self::from_vec3(adapt_with(method, self.to_vec3(), self.white, white), white)
    }

    /// Converts to linear RGB in `profile`.
    ///
    /// Adapts to the profile's white first when the white points differ,
    /// then solves with the inverse of the profile's RGB to XYZ matrix.
    pub fn to_rgb(self, profile: &Profile) -> ColorResult<LinearRgb> {
        let m = xyz_to_rgb_matrix(profile)?;
        if self.white != profile.white {
            trace!(profile = %profile.name, from = ?self.white, "adapting XYZ to profile white");
        }
        let xyz = self.adapt_to(profile.white);
        Ok(LinearRgb::from_vec3(m * xyz.to_vec3()))
    }

    /// Encodes as CIELab relative to D50, adapting first if needed.
    pub fn to_lab(self) -> Lab {
        self.to_lab_with(LabReference::D50)
    }

    /// Encodes as CIELab using the given reference mode.
    pub fn to_lab_with(self, reference: LabReference) -> Lab {
        let xyz = match reference {
            LabReference::D50 => self.adapt_to(D50),
            LabReference::Current => self,
        };
        let [l, a, b] = lab::encode(xyz.to_vec3(), xyz.white);
        Lab::new(l, a, b, xyz.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_math::{C, D65, E};
    use chroma_primaries::{SRGB, SRGB_D50};

    #[test]
    fn test_adapt_same_white_is_identity() {
        let xyz = Xyz::new(0.3, 0.4, 0.5, D65);
        assert_eq!(xyz.adapt_to(D65), xyz);
    }

    #[test]
    fn test_adapt_white_maps_to_white() {
        let white = Xyz::from_vec3(D65, D65).adapt_to(D50);
        assert!(white.to_vec3().max_abs_diff(D50) < 1e-12);
    }

    #[test]
    fn test_adapt_roundtrip() {
        for v in [Vec3::new(0.2, 0.3, 0.4), Vec3::new(0.9, 0.1, 0.05), Vec3::new(0.0, 0.0, 0.0)] {
            for white in [C, E, D50] {
                let xyz = Xyz::from_vec3(v, D65);
                let back = xyz.adapt_to(white).adapt_to(D65);
                assert!(back.to_vec3().max_abs_diff(v) < 1e-12);
                assert_eq!(back.white, D65);
            }
        }
    }

    #[test]
    fn test_to_rgb_adapts() {
        // D65 white rendered into a D50 profile comes out as linear white
        let rgb = Xyz::from_vec3(D65, D65).to_rgb(&SRGB_D50).unwrap();
        assert!(rgb.to_vec3().max_abs_diff(Vec3::ONE) < 1e-4);
    }

    #[test]
    fn test_to_rgb_same_white() {
        let rgb = Xyz::from_vec3(D65, D65).to_rgb(&SRGB).unwrap();
        assert!(rgb.to_vec3().max_abs_diff(Vec3::ONE) < 1e-12);
    }

    #[test]
    fn test_lab_current_keeps_white() {
        let lab = Xyz::new(0.3, 0.4, 0.5, D65).to_lab_with(LabReference::Current);
        assert_eq!(lab.white, D65);
        let lab = Xyz::new(0.3, 0.4, 0.5, D65).to_lab();
        assert_eq!(lab.white, D50);
    }
}
