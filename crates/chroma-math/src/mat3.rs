//! 3x3 `f64` matrices.
//!
//! Storage is row-major and matrices act on column vectors, so `M * v`
//! takes the dot product of each row with `v`. Profile matrices are
//! built column-wise from primaries with [`Mat3::from_col_vecs`].
//!
//! Inversion and [`Mat3::solve`] refuse matrices whose determinant is
//! below [`SINGULAR_EPSILON`] in magnitude or not finite.
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! let m = Mat3::diagonal(2.0, 3.0, 4.0);
//! let v = m.solve(Vec3::new(2.0, 3.0, 4.0)).unwrap();
//! assert_eq!(v, Vec3::ONE);
//! ```

use std::ops::{Index, Mul};

use crate::Vec3;

/// Determinants with a smaller magnitude are treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Row-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Rows
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// All zeros.
    pub const ZERO: Self = Self::from_rows([[0.0; 3]; 3]);

    /// Identity.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Creates a matrix from rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from columns.
    #[inline]
    pub const fn from_cols(c: [[f64; 3]; 3]) -> Self {
        Self::from_rows([
            [c[0][0], c[1][0], c[2][0]],
            [c[0][1], c[1][1], c[2][1]],
            [c[0][2], c[1][2], c[2][2]],
        ])
    }

    /// Creates a matrix whose columns are `c0`, `c1`, `c2`.
    #[inline]
    pub const fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Diagonal matrix.
    #[inline]
    pub const fn diagonal(a: f64, b: f64, c: f64) -> Self {
        Self::from_rows([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
    }

    /// Diagonal matrix holding `d`.
    #[inline]
    pub const fn from_diagonal(d: Vec3) -> Self {
        Self::diagonal(d.x, d.y, d.z)
    }

    /// Row `i`.
    #[inline]
    pub const fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Column `i`.
    #[inline]
    pub const fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Per-column sums.
    #[inline]
    pub fn col_sums(&self) -> Vec3 {
        self.row(0) + self.row(1) + self.row(2)
    }

    /// Transpose.
    #[inline]
    pub const fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Determinant, as the scalar triple product of the rows.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.row(0).dot(self.row(1).cross(self.row(2)))
    }

    /// True when the determinant is not finite or below [`SINGULAR_EPSILON`].
    #[inline]
    pub fn is_singular(&self) -> bool {
        let det = self.determinant();
        !det.is_finite() || det.abs() < SINGULAR_EPSILON
    }

    /// Inverse, or `None` when singular.
    ///
    /// Columns of the inverse are cross products of row pairs over the
    /// determinant.
    ///
    /// ```rust
    /// use chroma_math::Mat3;
    ///
    /// let inv = Mat3::diagonal(2.0, 4.0, 8.0).inverse().unwrap();
    /// assert_eq!(inv, Mat3::diagonal(0.5, 0.25, 0.125));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        if self.is_singular() {
            return None;
        }
        let (r0, r1, r2) = (self.row(0), self.row(1), self.row(2));
        let k = 1.0 / self.determinant();
        Some(Self::from_col_vecs(r1.cross(r2) * k, r2.cross(r0) * k, r0.cross(r1) * k))
    }

    /// Solves `self * x = b` by Cramer's rule, or `None` when singular.
    ///
    /// Each unknown is the determinant with its column replaced by `b`,
    /// over the determinant of `self`.
    pub fn solve(&self, b: Vec3) -> Option<Vec3> {
        if self.is_singular() {
            return None;
        }
        let (c0, c1, c2) = (self.col(0), self.col(1), self.col(2));
        let det = self.determinant();
        Some(Vec3::new(
            b.dot(c1.cross(c2)) / det,
            c0.dot(b.cross(c2)) / det,
            c0.dot(c1.cross(b)) / det,
        ))
    }

    /// Largest element-wise distance to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        (0..3)
            .map(|i| self.row(i).max_abs_diff(other.row(i)))
            .fold(0.0, f64::max)
    }

    /// True when no element is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        (0..3).all(|i| self.row(i).is_finite())
    }

    /// Converts to [`glam::DMat3`] (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.transpose().m)
    }

    /// Converts from [`glam::DMat3`].
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_col_vecs(self * rhs.col(0), self * rhs.col(1), self * rhs.col(2))
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // det = 1
    fn sample() -> Mat3 {
        Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]])
    }

    #[test]
    fn test_layout() {
        let m = sample();
        assert_eq!(m.row(2), Vec3::new(5.0, 6.0, 0.0));
        assert_eq!(m.col(2), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(m[1][2], 4.0);
        assert_eq!(Mat3::from_col_vecs(m.col(0), m.col(1), m.col(2)), m);
        assert_eq!(m.transpose().row(0), m.col(0));
    }

    #[test]
    fn test_determinant() {
        assert!((sample().determinant() - 1.0).abs() < 1e-12);
        assert_eq!(Mat3::diagonal(2.0, 3.0, 4.0).determinant(), 24.0);
    }

    #[test]
    fn test_inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).max_abs_diff(&Mat3::IDENTITY) < 1e-12);
        assert!((inv * m).max_abs_diff(&Mat3::IDENTITY) < 1e-12);
        assert_eq!(inv.m[0], [-24.0, 18.0, 5.0]);
    }

    #[test]
    fn test_solve() {
        let m = sample();
        let x = Vec3::new(0.2, -0.7, 1.3);
        assert!(m.solve(m * x).unwrap().max_abs_diff(x) < 1e-12);
    }

    #[test]
    fn test_singular() {
        // Second row is twice the first
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.is_singular());
        assert!(m.inverse().is_none());
        assert!(m.solve(Vec3::ONE).is_none());

        let nan = Mat3::diagonal(f64::NAN, 1.0, 1.0);
        assert!(nan.is_singular());
        assert!(!nan.is_finite());
    }

    #[test]
    fn test_col_sums() {
        assert_eq!(sample().col_sums(), Vec3::new(6.0, 9.0, 7.0));
    }

    #[test]
    fn test_product_order() {
        let scale = Mat3::diagonal(2.0, 1.0, 1.0);
        let swap = Mat3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let v = Vec3::new(1.0, 10.0, 100.0);
        // (A * B) v == A (B v)
        assert_eq!((scale * swap) * v, scale * (swap * v));
        assert_eq!((scale * swap) * v, Vec3::new(20.0, 1.0, 100.0));
    }

    #[test]
    fn test_glam_interop() {
        let m = sample();
        let g = m.to_glam();
        let v = Vec3::new(0.1, 0.2, 0.3);
        assert!(Vec3::from(g * v.to_glam()).max_abs_diff(m * v) < 1e-15);
        assert_eq!(Mat3::from_glam(g), m);
    }
}
