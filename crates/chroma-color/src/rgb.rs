//! Linear and gamma-encoded RGB values.

use chroma_math::Vec3;
use chroma_primaries::{rgb_to_xyz_matrix, Profile};
use chroma_transfer::Curve;

use crate::{ColorResult, Lab, Xyz};

/// Linear-light RGB.
///
/// Channels are nominally in [0, 1] but nothing clamps them.
///
/// # Example
///
/// ```rust
/// use chroma_color::LinearRgb;
/// use chroma_primaries::SRGB;
///
/// let xyz = LinearRgb::new(1.0, 1.0, 1.0).to_xyz(&SRGB)?;
/// assert!((xyz.y - 1.0).abs() < 1e-12);
/// # Ok::<(), chroma_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRgb {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl LinearRgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Linear white (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a value from channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as a vector.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Creates a value from a vector.
    #[inline]
    pub const fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Largest channel minus smallest channel.
    #[inline]
    pub fn chroma(self) -> f64 {
        let v = self.to_vec3();
        v.max_element() - v.min_element()
    }

    /// Converts to XYZ under `profile`, tagged with the profile's white.
    pub fn to_xyz(self, profile: &Profile) -> ColorResult<Xyz> {
        let m = rgb_to_xyz_matrix(profile)?;
        Ok(Xyz::from_vec3(m * self.to_vec3(), profile.white))
    }

    /// Converts to CIELab (D50) through XYZ under `profile`.
    pub fn to_lab(self, profile: &Profile) -> ColorResult<Lab> {
        Ok(self.to_xyz(profile)?.to_lab())
    }

    /// Encodes the channels with `curve`.
    #[inline]
    pub fn encode(self, curve: Curve) -> GammaRgb {
        GammaRgb::from_linear(self, curve)
    }
}

impl From<[f64; 3]> for LinearRgb {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<LinearRgb> for [f64; 3] {
    fn from(rgb: LinearRgb) -> Self {
        rgb.to_array()
    }
}

/// Gamma-encoded RGB, carrying the curve it was encoded with.
///
/// # Example
///
/// ```rust
/// use chroma_color::{GammaRgb, LinearRgb};
/// use chroma_transfer::Curve;
///
/// let encoded = GammaRgb::new(0.5, 0.5, 0.5, Curve::Srgb);
/// let linear = encoded.to_linear();
/// assert!((linear.r - 0.214).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GammaRgb {
    /// Encoded red
    pub r: f64,
    /// Encoded green
    pub g: f64,
    /// Encoded blue
    pub b: f64,
    /// Curve used to encode the channels
    pub curve: Curve,
}

impl GammaRgb {
    /// Creates a value from encoded channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, curve: Curve) -> Self {
        Self { r, g, b, curve }
    }

    /// Encodes linear RGB with `curve`.
    pub fn from_linear(rgb: LinearRgb, curve: Curve) -> Self {
        let [r, g, b] = curve.encode_rgb(rgb.to_array());
        Self::new(r, g, b, curve)
    }

    /// Decodes to linear RGB with the stored curve.
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb::from(self.curve.decode_rgb([self.r, self.g, self.b]))
    }

    /// Re-encodes with another curve.
    pub fn with_curve(self, curve: Curve) -> Self {
        if curve == self.curve {
            return self;
        }
        Self::from_linear(self.to_linear(), curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_transfer::srgb;

    #[test]
    fn test_chroma() {
        assert_eq!(LinearRgb::new(0.2, 0.9, 0.5).chroma(), 0.9 - 0.2);
        assert_eq!(LinearRgb::WHITE.chroma(), 0.0);
    }

    #[test]
    fn test_encode_decode() {
        let rgb = LinearRgb::new(0.2, 0.5, 0.8);
        for curve in [Curve::Srgb, Curve::AdobeRgb, Curve::Power(1.8)] {
            let back = rgb.encode(curve).to_linear();
            assert!(back.to_vec3().max_abs_diff(rgb.to_vec3()) < 1e-12, "{curve}");
        }
    }

    #[test]
    fn test_encode_uses_curve() {
        let g = LinearRgb::new(0.5, 0.25, 0.0).encode(Curve::Srgb);
        assert_eq!(g.r, srgb::encode(0.5));
        assert_eq!(g.g, srgb::encode(0.25));
        assert_eq!(g.curve, Curve::Srgb);
    }

    #[test]
    fn test_with_curve() {
        let g = GammaRgb::new(0.5, 0.5, 0.5, Curve::Srgb);
        assert_eq!(g.with_curve(Curve::Srgb), g);
        let a = g.with_curve(Curve::AdobeRgb);
        assert!(a.to_linear().to_vec3().max_abs_diff(g.to_linear().to_vec3()) < 1e-12);
    }
}
