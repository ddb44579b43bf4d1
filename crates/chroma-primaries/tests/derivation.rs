//! Matrix derivation and decomposition across the built-in profile table.

use approx::assert_abs_diff_eq;
use chroma_math::{Mat3, Vec3, D65};
use chroma_primaries::{decompose, rgb_to_xyz_matrix, Profile, ProfileId, PrimariesError, SRGB};

fn assert_vec_eq(a: Vec3, b: Vec3, eps: f64) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
    assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
    assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
}

#[test]
fn decompose_reproduces_every_builtin_profile() {
    for id in ProfileId::ALL {
        let profile = id.profile();
        let m = rgb_to_xyz_matrix(profile).unwrap();
        let back = decompose(&m).unwrap();

        assert_vec_eq(back.white, profile.white, 1e-12);
        for (got, want) in back.rgb_points().into_iter().zip(profile.rgb_points()) {
            assert_vec_eq(got, want, 1e-12);
        }
    }
}

#[test]
fn decompose_user_profile() {
    let wide = Profile::from_xy("wide", D65, (0.708, 0.292), (0.170, 0.797), (0.131, 0.046));
    let m = rgb_to_xyz_matrix(&wide).unwrap();
    let back = decompose(&m).unwrap();
    assert_vec_eq(back.red, wide.red, 1e-12);
    assert_vec_eq(back.blue, wide.blue, 1e-12);
}

#[test]
fn srgb_white_is_d65() {
    let white = rgb_to_xyz_matrix(&SRGB).unwrap() * Vec3::ONE;
    assert_vec_eq(white, Vec3::new(0.95046, 1.0, 1.08906), 1e-12);
}

#[test]
fn primaries_scale_by_luminance_share() {
    // Y row of the matrix holds the luminance of each primary; they sum to 1
    for id in ProfileId::ALL {
        let m = rgb_to_xyz_matrix(id.profile()).unwrap();
        assert_abs_diff_eq!(m.row(1).sum(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn degenerate_matrix_is_an_error_not_nan() {
    let flat = Profile::new("flat", D65, Vec3::new(0.3, 0.3, 0.4), Vec3::new(0.3, 0.3, 0.4), Vec3::new(0.2, 0.2, 0.6));
    match rgb_to_xyz_matrix(&flat) {
        Err(PrimariesError::DegenerateProfile { name }) => assert_eq!(name, "flat"),
        other => panic!("expected DegenerateProfile, got {other:?}"),
    }
    assert!(decompose(&Mat3::ZERO).is_err());
}

#[test]
fn unnormalized_primaries_are_scaled_onto_the_chromaticity_plane() {
    let [r, g, b] = SRGB.rgb_points();
    let tiny = Profile::new("tiny", SRGB.white, r * 1e-5, g * 2e-5, b * 3e-5);
    for (got, want) in tiny.rgb_points().into_iter().zip(SRGB.rgb_points()) {
        assert_vec_eq(got, want, 1e-15);
    }

    let m = rgb_to_xyz_matrix(&tiny).unwrap();
    assert!(m.max_abs_diff(&rgb_to_xyz_matrix(&SRGB).unwrap()) < 1e-12);
}
