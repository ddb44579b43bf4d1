//! # chroma-color
//!
//! Color value types and conversions between them.
//!
//! - **RGB** - linear and gamma-encoded ([`LinearRgb`], [`GammaRgb`])
//! - **CIE** - XYZ with an explicit white point, L*a*b* ([`Xyz`], [`Lab`])
//! - **Peripheral models** - CMY, CMYK, HSV, HLS, YUV, gray
//! - **Sum type** - [`Color`] dispatching through [`RgbConvert`]
//!
//! # Architecture
//!
//! ```text
//!                 chroma-color
//!                      |
//!          +-----------+-----------+
//!          |                       |
//!   chroma-primaries        chroma-transfer
//!          |                       |
//!          +-----------+-----------+
//!                      |
//!                 chroma-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_color::prelude::*;
//!
//! // Decode an sRGB pixel, move it into AdobeRGB and re-encode
//! let pixel = GammaRgb::new(0.5, 0.3, 0.2, Curve::Srgb);
//! let adobe = convert_encoded(pixel, &SRGB, &ADOBE_RGB, Curve::AdobeRgb)?;
//!
//! // CIELab of the same pixel (D50)
//! let lab = pixel.to_linear().to_lab(&SRGB)?;
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! # let _ = adobe;
//! # Ok::<(), ColorError>(())
//! ```
//!
//! # Conversion paths
//!
//! | From | To | Path |
//! |------|----|------|
//! | `LinearRgb` | `Xyz` | profile matrix, tagged with profile white |
//! | `Xyz` | `LinearRgb` | adapt to profile white, inverse matrix |
//! | `Xyz` | `Lab` | adapt to D50, CIELab encode |
//! | `Lab` | `LinearRgb` | decode, then sRGB D50 by default |
//! | others | `LinearRgb` | closed-form formulas |
//!
//! # Dependencies
//!
//! - [`chroma-math`] - Vectors, matrices, chromatic adaptation
//! - [`chroma-transfer`] - Gamma curves
//! - [`chroma-primaries`] - Profiles and matrix derivation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cmy;
mod color;
mod error;
mod gray;
mod hls;
mod hsv;
mod rgb;
mod xyz;
mod yuv;
pub mod convert;
pub mod hue;
pub mod lab;

pub use cmy::{Cmy, Cmyk};
pub use color::{Color, ColorKind};
pub use convert::{convert, convert_encoded, convert_rgb, convert_rgb_with, RgbConvert};
pub use error::{ColorError, ColorResult};
pub use gray::{Gray, LumaWeights};
pub use hls::Hls;
pub use hsv::Hsv;
pub use lab::{Lab, LabReference};
pub use rgb::{GammaRgb, LinearRgb};
pub use xyz::Xyz;
pub use yuv::Yuv;

// Re-export sub-crates for convenience
pub use chroma_math as math;
pub use chroma_primaries as primaries;
pub use chroma_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        convert, convert_encoded, convert_rgb, Cmy, Cmyk, Color, ColorError, ColorKind, ColorResult,
        GammaRgb, Gray, Hls, Hsv, Lab, LabReference, LinearRgb, LumaWeights, RgbConvert, Xyz, Yuv,
    };

    pub use chroma_math::{AdaptationMethod, Mat3, Vec3, D50, D65};
    pub use chroma_primaries::{Profile, ProfileId, ADOBE_RGB, SRGB, SRGB_D50};
    pub use chroma_transfer::Curve;
}
