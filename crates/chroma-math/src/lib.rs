//! # chroma-math
//!
//! Math primitives for colorimetric conversions.
//!
//! - [`Mat3`] - 3x3 matrices with inverse and linear solve
//! - [`Vec3`] - 3D vectors for XYZ/RGB/LMS triplets
//! - Chromatic adaptation ([`adaptation_matrix`], [`AdaptationMethod`])
//! - Standard illuminant white points ([`D50`], [`D65`], [`C`], [`E`], ...)
//!
//! # Design
//!
//! All arithmetic is `f64`. Matrices are **row-major** and act on
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! // Columns are scaled primaries; linear white lands on their sum
//! let m = Mat3::from_col_vecs(
//!     Vec3::new(0.4, 0.2, 0.02),
//!     Vec3::new(0.35, 0.72, 0.12),
//!     Vec3::new(0.2, 0.08, 0.95),
//! );
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! assert!(m.solve(white).unwrap().max_abs_diff(Vec3::ONE) < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with `DVec3` / `DMat3`
//! - [`tracing`] - adaptation trace events
//!
//! # Used By
//!
//! - `chroma-primaries` - RGB/XYZ matrix derivation
//! - `chroma-color` - color value conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
mod adapt;

pub use mat3::*;
pub use vec3::*;
pub use adapt::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
