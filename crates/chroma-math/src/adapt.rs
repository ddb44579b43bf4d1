//! Chromatic adaptation between reference whites.
//!
//! Matrices and functions for re-expressing XYZ values relative to a
//! different reference white point.
//!
//! # Supported Methods
//!
//! - [`AdaptationMethod::Bradford`] - default, used by all color conversions
//! - [`AdaptationMethod::Cat02`] - from the CIECAM02 appearance model
//! - [`AdaptationMethod::VonKries`] - Hunt-Pointer-Estevez cone response
//! - [`AdaptationMethod::XyzScaling`] - plain per-component scaling
//!
//! The cone-response matrices are literal constants. Their inverses are
//! computed once, on first use, and shared afterwards.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{adaptation_matrix, D65, D50};
//!
//! let d65_to_d50 = adaptation_matrix(D65, D50);
//! let white = d65_to_d50 * D65;
//! assert!(white.max_abs_diff(D50) < 1e-12);
//! ```

use std::sync::LazyLock;

use tracing::trace;

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ white points, Y = 1)
// ============================================================================

/// D65, noon daylight.
///
/// Reference white of sRGB and AdobeRGB.
pub const D65: Vec3 = Vec3::new(0.95046, 1.0, 1.08906);

/// D50, the CIELab reference white.
///
/// Lab values from the default conversion path are relative to it.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant C (average daylight, used by NTSC 1953).
pub const C: Vec3 = Vec3::new(0.98074, 1.0, 1.18232);

/// E, equal-energy white of CIE 1931 RGB.
pub const E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// D55.
pub const D55: Vec3 = Vec3::new(0.95682, 1.0, 0.92149);

/// A, incandescent.
pub const A: Vec3 = Vec3::new(1.09850, 1.0, 0.35585);

// ============================================================================
// Cone response matrices
// ============================================================================

/// Bradford XYZ to sharpened-cone matrix (Lam, 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries (Hunt-Pointer-Estevez) cone response matrix.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// CAT02 matrix from the CIECAM02 color appearance model.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

fn invert_constant(m: &Mat3) -> Mat3 {
    m.inverse().expect("cone response matrices are invertible")
}

static BRADFORD_INV: LazyLock<Mat3> = LazyLock::new(|| invert_constant(&BRADFORD));
static VON_KRIES_INV: LazyLock<Mat3> = LazyLock::new(|| invert_constant(&VON_KRIES));
static CAT02_INV: LazyLock<Mat3> = LazyLock::new(|| invert_constant(&CAT02));

/// Chromatic adaptation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdaptationMethod {
    /// Bradford (Lam 1985).
    #[default]
    Bradford,
    /// CIECAM02 CAT02.
    Cat02,
    /// Von Kries with Hunt-Pointer-Estevez cone fundamentals.
    VonKries,
    /// Direct scaling of X, Y and Z.
    XyzScaling,
}

impl AdaptationMethod {
    /// Cone response matrix of this method.
    pub fn matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::Cat02 => CAT02,
            Self::VonKries => VON_KRIES,
            Self::XyzScaling => Mat3::IDENTITY,
        }
    }

    /// Inverse of [`AdaptationMethod::matrix`], computed once per process.
    pub fn inverse(self) -> Mat3 {
        match self {
            Self::Bradford => *BRADFORD_INV,
            Self::Cat02 => *CAT02_INV,
            Self::VonKries => *VON_KRIES_INV,
            Self::XyzScaling => Mat3::IDENTITY,
        }
    }
}

// ============================================================================
// Adaptation Functions
// ============================================================================

/// Computes the Bradford adaptation matrix between two white points.
///
/// Applied to an XYZ value relative to `src_white`, the result yields the
/// corresponding XYZ value relative to `dst_white`. Identical white points
/// (component-wise) give [`Mat3::IDENTITY`] without any arithmetic.
///
/// # Example
///
/// ```rust
/// use chroma_math::{adaptation_matrix, Mat3, D65};
///
/// assert_eq!(adaptation_matrix(D65, D65), Mat3::IDENTITY);
/// ```
pub fn adaptation_matrix(src_white: Vec3, dst_white: Vec3) -> Mat3 {
    adaptation_matrix_with(AdaptationMethod::Bradford, src_white, dst_white)
}

/// Computes an adaptation matrix between two white points with `method`.
///
/// `result = M^-1 * diag(dst_cone / src_cone) * M`
pub fn adaptation_matrix_with(method: AdaptationMethod, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    if src_white == dst_white {
        trace!(?method, "adaptation skipped, white points identical");
        return Mat3::IDENTITY;
    }

    let cone = method.matrix();
    let src_cone = cone * src_white;
    let dst_cone = cone * dst_white;
    let scale = Mat3::from_diagonal(dst_cone / src_cone);

    trace!(?method, ?src_white, ?dst_white, "adaptation matrix");
    method.inverse() * scale * cone
}

/// Adapts an XYZ value from `src_white` to `dst_white` with Bradford.
///
/// Returns `xyz` unchanged when the white points are identical.
pub fn adapt(xyz: Vec3, src_white: Vec3, dst_white: Vec3) -> Vec3 {
    adapt_with(AdaptationMethod::Bradford, xyz, src_white, dst_white)
}

/// Adapts an XYZ value from `src_white` to `dst_white` with `method`.
pub fn adapt_with(method: AdaptationMethod, xyz: Vec3, src_white: Vec3, dst_white: Vec3) -> Vec3 {
    if src_white == dst_white {
        return xyz;
    }
    adaptation_matrix_with(method, src_white, dst_white) * xyz
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITES: [Vec3; 4] = [C, D50, D65, E];
    const METHODS: [AdaptationMethod; 4] = [
        AdaptationMethod::Bradford,
        AdaptationMethod::Cat02,
        AdaptationMethod::VonKries,
        AdaptationMethod::XyzScaling,
    ];

    #[test]
    fn test_cone_matrices_are_regular() {
        for m in [BRADFORD, VON_KRIES, CAT02] {
            assert!(!m.is_singular());
            assert!(m.determinant().abs() > 0.5, "{m:?}");
            assert_eq!(invert_constant(&m), m.inverse().unwrap());
        }
    }

    #[test]
    fn test_inverse_is_exact() {
        for method in METHODS {
            let product = method.inverse() * method.matrix();
            assert!(product.max_abs_diff(&Mat3::IDENTITY) < 1e-13, "{method:?}");
        }
    }

    #[test]
    fn test_same_white_is_identity() {
        for w in WHITES {
            assert_eq!(adaptation_matrix(w, w), Mat3::IDENTITY);
        }
    }

    #[test]
    fn test_white_maps_to_white() {
        for method in METHODS {
            for src in WHITES {
                for dst in WHITES {
                    let m = adaptation_matrix_with(method, src, dst);
                    assert!((m * src).max_abs_diff(dst) < 1e-12, "{method:?} {src:?} -> {dst:?}");
                }
            }
        }
    }

    #[test]
    fn test_known_d65_to_d50() {
        // Lindbloom's Bradford D65 -> D50 matrix, rounded to 4 decimals
        let m = adaptation_matrix(D65, D50);
        let expected = Mat3::from_rows([
            [1.0478, 0.0229, -0.0501],
            [0.0295, 0.9905, -0.0171],
            [-0.0092, 0.0151, 0.7519],
        ]);
        assert!(m.max_abs_diff(&expected) < 5e-4);
    }

    #[test]
    fn test_roundtrip() {
        let there = adaptation_matrix(D65, D50);
        let back = adaptation_matrix(D50, D65);
        assert!((back * there).max_abs_diff(&Mat3::IDENTITY) < 1e-12);
    }

    #[test]
    fn test_adapt_fast_path_returns_input() {
        let xyz = Vec3::new(0.123456789, 0.2, 0.3);
        assert_eq!(adapt(xyz, D50, D50), xyz);
    }

    #[test]
    fn test_illuminants() {
        for w in [A, C, D50, D55, D65, E] {
            assert_eq!(w.y, 1.0);
        }
    }
}
