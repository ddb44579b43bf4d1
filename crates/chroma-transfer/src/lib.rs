//! # chroma-transfer
//!
//! Gamma codecs converting between linear light and encoded RGB channels.
//!
//! # Supported Curves
//!
//! | Module | Curve | Range |
//! |--------|-------|-------|
//! | [`srgb`] | IEC 61966-2-1 piecewise | [0, 1] |
//! | [`adobe_rgb`] | AdobeRGB (1998), 2.2 with linear toe | [0, 1] |
//! | [`power`] | Pure power law | [0, 1] |
//!
//! [`Curve`] selects one of them at runtime.
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! let linear = srgb::decode(0.5);
//! let encoded = srgb::encode(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! Nothing is clamped. Out-of-range input goes straight through the formulas,
//! and negative input to a fractional power produces NaN.
//!
//! # Used By
//!
//! - `chroma-color` - gamma-encoded RGB values

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
pub mod adobe_rgb;
pub mod power;
mod curve;

pub use curve::Curve;
pub use srgb::{decode as srgb_decode, encode as srgb_encode};
pub use adobe_rgb::{decode as adobe_rgb_decode, encode as adobe_rgb_encode};
