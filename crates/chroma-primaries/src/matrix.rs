//! RGB <-> XYZ matrix derivation and decomposition.

use chroma_math::{adaptation_matrix_with, AdaptationMethod, Mat3, Vec3};
use tracing::{debug, warn};

use crate::{PrimariesError, PrimariesResult, Profile};

fn degenerate(profile: &Profile) -> PrimariesError {
    warn!(profile = %profile.name, "degenerate primaries");
    PrimariesError::DegenerateProfile {
        name: profile.name.to_string(),
    }
}

/// Computes the RGB to XYZ matrix for a profile.
///
/// # Algorithm
///
/// 1. Place the red, green and blue chromaticities as the columns of `P`
/// 2. Solve `P * S = W` for the per-primary scale factors `S`
/// 3. Scale each column: `M = P * diag(S)`
///
/// Linear white (1, 1, 1) then maps to the white point, and each pure
/// primary to its chromaticity scaled by its share of the white.
///
/// # Errors
///
/// [`PrimariesError::DegenerateProfile`] when the primaries are linearly
/// dependent.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{rgb_to_xyz_matrix, SRGB};
/// use chroma_math::{Vec3, D65};
///
/// let m = rgb_to_xyz_matrix(&SRGB).unwrap();
/// assert!((m * Vec3::ONE).max_abs_diff(D65) < 1e-12);
/// ```
pub fn rgb_to_xyz_matrix(profile: &Profile) -> PrimariesResult<Mat3> {
    let p = Mat3::from_col_vecs(profile.red, profile.green, profile.blue);
    let s = p.solve(profile.white).ok_or_else(|| degenerate(profile))?;
    let m = p * Mat3::from_diagonal(s);
    if !m.is_finite() {
        return Err(degenerate(profile));
    }

    debug!(profile = %profile.name, ?s, "derived RGB->XYZ matrix");
    Ok(m)
}

/// Computes the XYZ to RGB matrix for a profile.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(profile: &Profile) -> PrimariesResult<Mat3> {
    rgb_to_xyz_matrix(profile)?
        .inverse()
        .ok_or_else(|| degenerate(profile))
}

/// Recovers the profile a RGB to XYZ matrix was derived from.
///
/// The white point is `M * (1, 1, 1)`; each primary is the matching column
/// of `M` divided by its column sum.
///
/// # Errors
///
/// [`PrimariesError::DegenerateProfile`] when a column sums to zero.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{decompose, rgb_to_xyz_matrix, ADOBE_RGB};
///
/// let m = rgb_to_xyz_matrix(&ADOBE_RGB).unwrap();
/// let p = decompose(&m).unwrap();
/// assert!(p.green.max_abs_diff(ADOBE_RGB.green) < 1e-12);
/// ```
pub fn decompose(matrix: &Mat3) -> PrimariesResult<Profile> {
    let sums = matrix.col_sums();
    if sums.to_array().iter().any(|t| *t == 0.0 || !t.is_finite()) {
        return Err(PrimariesError::DegenerateProfile {
            name: "decomposed".to_string(),
        });
    }

    let white = *matrix * Vec3::ONE;
    let primaries = *matrix * Mat3::from_diagonal(Vec3::ONE / sums);
    debug!(?white, "decomposed RGB->XYZ matrix");

    Ok(Profile::new(
        "decomposed",
        white,
        primaries.col(0),
        primaries.col(1),
        primaries.col(2),
    ))
}

/// Computes a matrix converting linear RGB in `src` to linear RGB in `dst`.
///
/// The conversion goes through XYZ: `RGB_src -> XYZ -> (adapt) -> RGB_dst`.
/// Adaptation is skipped when both profiles share the same white point.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{rgb_to_rgb_matrix, SRGB, SRGB_D50};
/// use chroma_math::{AdaptationMethod, Vec3};
///
/// let m = rgb_to_rgb_matrix(&SRGB, &SRGB_D50, AdaptationMethod::Bradford).unwrap();
/// let white = m * Vec3::ONE;
/// assert!(white.max_abs_diff(Vec3::ONE) < 1e-4);
/// ```
pub fn rgb_to_rgb_matrix(src: &Profile, dst: &Profile, method: AdaptationMethod) -> PrimariesResult<Mat3> {
    let to_xyz = rgb_to_xyz_matrix(src)?;
    let adapt = adaptation_matrix_with(method, src.white, dst.white);
    let from_xyz = xyz_to_rgb_matrix(dst)?;
    Ok(from_xyz * adapt * to_xyz)
}
