//! `f64` triple used for every three-channel quantity.
//!
//! The same type carries linear RGB, XYZ tristimulus values, white points,
//! cone responses and normalized chromaticities. Arithmetic is
//! component-wise, which is what per-channel scaling during adaptation and
//! white-relative Lab encoding need.
//!
//! ```rust
//! use chroma_math::{Vec3, D65};
//!
//! let relative = Vec3::new(0.47523, 0.5, 0.54453) / D65;
//! assert!(relative.max_abs_diff(Vec3::new(0.5, 0.5, 0.5)) < 1e-12);
//! ```

use std::ops::{Add, Div, Index, Mul, Sub};

/// Three `f64` components.
///
/// Equality is exact per component. White points are compared this way to
/// decide whether chromatic adaptation is needed at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// First component (R, X, L or chromaticity x)
    pub x: f64,
    /// Second component (G, Y, M or chromaticity y)
    pub y: f64,
    /// Third component (B, Z, S or chromaticity z)
    pub z: f64,
}

impl Vec3 {
    /// (0, 0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// (1, 1, 1); linear RGB white.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Chromaticity (x, y) lifted to a normalized triple with z = 1 - x - y.
    ///
    /// ```rust
    /// use chroma_math::Vec3;
    ///
    /// let red = Vec3::from_xy(0.64, 0.33);
    /// assert!((red.sum() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0 - x - y)
    }

    /// Scalar product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Vector product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// x + y + z
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Smallest component.
    #[inline]
    pub fn min_element(self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Largest component.
    #[inline]
    pub fn max_element(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Largest per-component distance to `other`.
    #[inline]
    pub fn max_abs_diff(self, other: Self) -> f64 {
        let d = self - other;
        d.x.abs().max(d.y.abs()).max(d.z.abs())
    }

    /// True when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to [`glam::DVec3`].
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::from_array(self.to_array())
    }

    /// Converts from [`glam::DVec3`].
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::from_array(v.to_array())
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 has 3 components, got index {i}"),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise product.
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

/// Component-wise quotient.
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xy_is_normalized() {
        let v = Vec3::from_xy(0.3, 0.6);
        assert_eq!((v.x, v.y), (0.3, 0.6));
        assert!((v.z - 0.1).abs() < 1e-15);
        assert!((v.sum() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_componentwise_ops() {
        let p = Vec3::new(2.0, 4.0, 8.0);
        let q = Vec3::new(1.0, 2.0, 4.0);

        assert_eq!(p - q, q);
        assert_eq!(q + q, p);
        assert_eq!(p / q, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(q * q, Vec3::new(1.0, 4.0, 16.0));
        assert_eq!(0.5 * p, q);
        assert_eq!(p.max_abs_diff(q), 4.0);
    }

    #[test]
    fn test_dot_and_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::ONE), 6.0);
    }

    #[test]
    fn test_extremes() {
        let v = Vec3::new(0.7, -0.2, 0.4);
        assert_eq!(v.min_element(), -0.2);
        assert_eq!(v.max_element(), 0.7);
        assert_eq!(v[2], 0.4);
        assert!(!Vec3::new(1.0, f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec3::new(0.25, 0.5, 0.75);
        let g: glam::DVec3 = v.into();
        assert_eq!(Vec3::from(g), v);
    }
}
