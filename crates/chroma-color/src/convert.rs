//! Conversion through linear RGB.
//!
//! Every color model converts to and from [`LinearRgb`]; [`RgbConvert`]
//! captures that pair so any two models can be bridged with [`convert`].
//! CIE models (XYZ, Lab) go through the Standard profile, which is sRGB.
//!
//! # Example
//!
//! ```rust
//! use chroma_color::{convert, Hsv, LinearRgb, Yuv};
//!
//! let hsv = Hsv::from_rgb(LinearRgb::new(0.2, 0.5, 0.8));
//! let yuv: Yuv = convert(&hsv)?;
//! assert!((yuv.y - (0.299 * 0.2 + 0.587 * 0.5 + 0.114 * 0.8)).abs() < 1e-12);
//! # Ok::<(), chroma_color::ColorError>(())
//! ```

use chroma_math::AdaptationMethod;
use chroma_primaries::{rgb_to_rgb_matrix, Profile, ProfileId};
use chroma_transfer::Curve;
use tracing::trace;

use crate::{Cmy, Cmyk, ColorResult, GammaRgb, Gray, Hls, Hsv, Lab, LinearRgb, Xyz, Yuv};

/// Conversion to and from linear RGB.
pub trait RgbConvert: Sized {
    /// Converts this value to linear RGB.
    fn to_linear_rgb(&self) -> ColorResult<LinearRgb>;

    /// Builds a value of this model from linear RGB.
    fn from_linear_rgb(rgb: &LinearRgb) -> ColorResult<Self>;
}

/// Converts between any two models through linear RGB.
pub fn convert<S: RgbConvert, T: RgbConvert>(src: &S) -> ColorResult<T> {
    T::from_linear_rgb(&src.to_linear_rgb()?)
}

fn standard() -> &'static Profile {
    ProfileId::Standard.profile()
}

impl RgbConvert for LinearRgb {
    fn to_linear_rgb(&self) -> ColorResult<LinearRgb> {
        Ok(*self)
    }

    fn from_linear_rgb(rgb: &LinearRgb) -> ColorResult<Self> {
        Ok(*rgb)
    }
}

/// Encodes with the Standard profile's curve (sRGB).
impl RgbConvert for GammaRgb {
    fn to_linear_rgb(&self) -> ColorResult<LinearRgb> {
        Ok(self.to_linear())
    }

    fn from_linear_rgb(rgb: &LinearRgb) -> ColorResult<Self> {
        Ok(GammaRgb::from_linear(*rgb, ProfileId::Standard.curve()))
    }
}

/// Implements [`RgbConvert`] for infallible `from_rgb` / `to_rgb` pairs.
macro_rules! impl_rgb_convert {
    ($($t:ty),+ $(,)?) => {$(
        impl RgbConvert for $t {
            fn to_linear_rgb(&self) -> ColorResult<LinearRgb> {
                Ok(self.to_rgb())
            }

            fn from_linear_rgb(rgb: &LinearRgb) -> ColorResult<Self> {
                Ok(<$t>::from_rgb(*rgb))
            }
        }
    )+};
}

impl_rgb_convert!(Cmy, Cmyk, Hsv, Hls, Yuv, Gray);

/// Uses the Standard profile, adapting when the value's white differs.
impl RgbConvert for Xyz {
    fn to_linear_rgb(&self) -> ColorResult<LinearRgb> {
        self.to_rgb(standard())
    }

    fn from_linear_rgb(rgb: &LinearRgb) -> ColorResult<Self> {
        rgb.to_xyz(standard())
    }
}

/// Lab is produced from the Standard profile relative to D50 and always
/// decoded into sRGB D50, matching [`Lab::to_rgb`].
impl RgbConvert for Lab {
    fn to_linear_rgb(&self) -> ColorResult<LinearRgb> {
        self.to_rgb()
    }

    fn from_linear_rgb(rgb: &LinearRgb) -> ColorResult<Self> {
        rgb.to_lab(standard())
    }
}

/// Converts linear RGB from `src` to `dst` with Bradford adaptation.
///
/// # Example
///
/// ```rust
/// use chroma_color::{convert_rgb, LinearRgb};
/// use chroma_primaries::{ADOBE_RGB, SRGB};
///
/// let rgb = LinearRgb::new(0.5, 0.3, 0.2);
/// let adobe = convert_rgb(rgb, &SRGB, &ADOBE_RGB)?;
/// let back = convert_rgb(adobe, &ADOBE_RGB, &SRGB)?;
/// assert!((back.r - rgb.r).abs() < 1e-12);
/// # Ok::<(), chroma_color::ColorError>(())
/// ```
pub fn convert_rgb(rgb: LinearRgb, src: &Profile, dst: &Profile) -> ColorResult<LinearRgb> {
    convert_rgb_with(AdaptationMethod::Bradford, rgb, src, dst)
}

/// Converts linear RGB from `src` to `dst` with the given adaptation method.
pub fn convert_rgb_with(
    method: AdaptationMethod,
    rgb: LinearRgb,
    src: &Profile,
    dst: &Profile,
) -> ColorResult<LinearRgb> {
    if src == dst {
        return Ok(rgb);
    }
    trace!(src = %src.name, dst = %dst.name, ?method, "converting RGB between profiles");
    let m = rgb_to_rgb_matrix(src, dst, method)?;
    Ok(LinearRgb::from_vec3(m * rgb.to_vec3()))
}

/// Full pipeline for encoded RGB: decode, change profile, encode with `curve`.
///
/// ```rust
/// use chroma_color::{convert_encoded, GammaRgb};
/// use chroma_primaries::{SRGB, SRGB_D50};
/// use chroma_transfer::Curve;
///
/// let white = GammaRgb::new(1.0, 1.0, 1.0, Curve::Srgb);
/// let out = convert_encoded(white, &SRGB, &SRGB_D50, Curve::Srgb)?;
/// assert!((out.g - 1.0).abs() < 1e-3);
/// # Ok::<(), chroma_color::ColorError>(())
/// ```
pub fn convert_encoded(rgb: GammaRgb, src: &Profile, dst: &Profile, curve: Curve) -> ColorResult<GammaRgb> {
    let linear = convert_rgb(rgb.to_linear(), src, dst)?;
    Ok(linear.encode(curve))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_primaries::{ADOBE_RGB, CIE_RGB, NTSC, SRGB, SRGB_D50};

    #[test]
    fn test_linear_identity() {
        let rgb = LinearRgb::new(0.5, 0.3, 0.2);
        assert_eq!(convert::<_, LinearRgb>(&rgb).unwrap(), rgb);
    }

    #[test]
    fn test_gamma_uses_standard_curve() {
        let g = GammaRgb::from_linear_rgb(&LinearRgb::new(0.2, 0.2, 0.2)).unwrap();
        assert_eq!(g.curve, Curve::Srgb);
    }

    #[test]
    fn test_every_model_roundtrips() {
        let rgb = LinearRgb::new(0.2, 0.5, 0.8);

        fn check<T: RgbConvert>(rgb: LinearRgb) {
            let v = T::from_linear_rgb(&rgb).unwrap();
            let back = v.to_linear_rgb().unwrap();
            assert!(
                back.to_vec3().max_abs_diff(rgb.to_vec3()) < 1e-9,
                "{}",
                std::any::type_name::<T>()
            );
        }

        check::<GammaRgb>(rgb);
        check::<Cmy>(rgb);
        check::<Cmyk>(rgb);
        check::<Hsv>(rgb);
        check::<Hls>(rgb);
        check::<Yuv>(rgb);
        check::<Xyz>(rgb);
    }

    #[test]
    fn test_lab_decodes_into_srgb_d50() {
        let rgb = LinearRgb::new(0.2, 0.5, 0.8);
        let lab = Lab::from_linear_rgb(&rgb).unwrap();
        let back = lab.to_linear_rgb().unwrap();

        assert_eq!(back, lab.to_rgb().unwrap());
        let expected = lab.to_xyz().to_rgb(&SRGB_D50).unwrap();
        assert!(back.to_vec3().max_abs_diff(expected.to_vec3()) < 1e-12);
        // Encoded under sRGB, decoded under sRGB D50
        let drift = back.to_vec3().max_abs_diff(rgb.to_vec3());
        assert!(drift > 1e-7 && drift < 1e-3, "{drift}");
    }

    #[test]
    fn test_convert_rgb_identity() {
        let rgb = LinearRgb::new(0.5, 0.3, 0.2);
        assert_eq!(convert_rgb(rgb, &SRGB, &SRGB).unwrap(), rgb);
    }

    #[test]
    fn test_convert_rgb_white_stays_white() {
        for dst in [&SRGB_D50, &CIE_RGB, &NTSC, &ADOBE_RGB] {
            let white = convert_rgb(LinearRgb::WHITE, &SRGB, dst).unwrap();
            assert!(white.to_vec3().max_abs_diff(LinearRgb::WHITE.to_vec3()) < 1e-3, "{dst}");
        }
    }

    #[test]
    fn test_convert_rgb_roundtrip() {
        let rgb = LinearRgb::new(0.5, 0.3, 0.2);
        for method in [AdaptationMethod::Bradford, AdaptationMethod::Cat02, AdaptationMethod::VonKries] {
            let ntsc = convert_rgb_with(method, rgb, &SRGB, &NTSC).unwrap();
            let back = convert_rgb_with(method, ntsc, &NTSC, &SRGB).unwrap();
            assert!(back.to_vec3().max_abs_diff(rgb.to_vec3()) < 1e-12, "{method:?}");
        }
    }
}
