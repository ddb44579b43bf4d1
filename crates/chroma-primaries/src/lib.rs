//! # chroma-primaries
//!
//! Color profiles (white point + primaries) and RGB/XYZ matrix derivation.
//!
//! # Included Profiles
//!
//! | Profile | White | Typical use |
//! |---------|-------|-------------|
//! | [`SRGB`] | D65 | Web, consumer displays; the Standard profile |
//! | [`ADOBE_RGB`] | D65 | Print, photography |
//! | [`CIE_RGB`] | E | CIE 1931 reference |
//! | [`NTSC`] | C | Legacy broadcast |
//! | [`SRGB_D50`] | D50 | sRGB adapted for Lab round trips |
//! | [`ADOBE_RGB_D50`] | D50 | AdobeRGB adapted to D50 |
//!
//! # Usage
//!
//! ```rust
//! use chroma_primaries::{ProfileId, rgb_to_xyz_matrix};
//! use chroma_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(ProfileId::Standard.profile())?;
//! let xyz = matrix * Vec3::new(1.0, 0.0, 0.0);
//! # Ok::<(), chroma_primaries::PrimariesError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - Matrix operations and adaptation
//! - [`chroma-transfer`] - Conventional curve per profile
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Derivation events
//!
//! # Used By
//!
//! - `chroma-color` - XYZ/RGB and Lab conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod matrix;
mod profile;

pub use error::{PrimariesError, PrimariesResult};
pub use matrix::{decompose, rgb_to_rgb_matrix, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
pub use profile::{
    blue_point, green_point, red_point, rgb_points, white_point, Profile, ProfileId, ADOBE_RGB,
    ADOBE_RGB_D50, CIE_RGB, NTSC, SRGB, SRGB_D50,
};
