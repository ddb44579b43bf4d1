//! Closed sum type over every color model.

use std::fmt;

use chroma_primaries::{Profile, ProfileId};

use crate::{
    convert::RgbConvert, Cmy, Cmyk, ColorResult, GammaRgb, Gray, Hls, Hsv, Lab, LinearRgb, Xyz, Yuv,
};

/// Which model a [`Color`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    /// [`LinearRgb`]
    LinearRgb,
    /// [`GammaRgb`]
    GammaRgb,
    /// [`Cmy`]
    Cmy,
    /// [`Cmyk`]
    Cmyk,
    /// [`Hsv`]
    Hsv,
    /// [`Hls`]
    Hls,
    /// [`Yuv`]
    Yuv,
    /// [`Gray`]
    Gray,
    /// [`Xyz`]
    Xyz,
    /// [`Lab`]
    Lab,
}

impl ColorKind {
    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinearRgb => "linear RGB",
            Self::GammaRgb => "gamma RGB",
            Self::Cmy => "CMY",
            Self::Cmyk => "CMYK",
            Self::Hsv => "HSV",
            Self::Hls => "HLS",
            Self::Yuv => "YUV",
            Self::Gray => "gray",
            Self::Xyz => "XYZ",
            Self::Lab => "CIELab",
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color value in any supported model.
///
/// Every conversion goes through linear RGB. XYZ uses the Standard profile
/// (sRGB) unless a profile is passed explicitly; Lab decodes into sRGB D50.
///
/// # Example
///
/// ```rust
/// use chroma_color::{Color, Cmyk, LinearRgb};
///
/// let red = Color::from(LinearRgb::new(1.0, 0.0, 0.0));
/// let cmyk = red.to_cmyk()?;
/// assert_eq!(cmyk, Cmyk::new(0.0, 1.0, 1.0, 0.0));
/// # Ok::<(), chroma_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Linear-light RGB
    LinearRgb(LinearRgb),
    /// Gamma-encoded RGB
    GammaRgb(GammaRgb),
    /// Subtractive CMY
    Cmy(Cmy),
    /// Subtractive CMYK
    Cmyk(Cmyk),
    /// Hue, saturation, value
    Hsv(Hsv),
    /// Hue, lightness, saturation
    Hls(Hls),
    /// Luma plus color difference
    Yuv(Yuv),
    /// Gray level
    Gray(Gray),
    /// CIE XYZ
    Xyz(Xyz),
    /// CIE L*a*b*
    Lab(Lab),
}

impl Color {
    /// The model this value is in.
    pub const fn kind(&self) -> ColorKind {
        match self {
            Self::LinearRgb(_) => ColorKind::LinearRgb,
            Self::GammaRgb(_) => ColorKind::GammaRgb,
            Self::Cmy(_) => ColorKind::Cmy,
            Self::Cmyk(_) => ColorKind::Cmyk,
            Self::Hsv(_) => ColorKind::Hsv,
            Self::Hls(_) => ColorKind::Hls,
            Self::Yuv(_) => ColorKind::Yuv,
            Self::Gray(_) => ColorKind::Gray,
            Self::Xyz(_) => ColorKind::Xyz,
            Self::Lab(_) => ColorKind::Lab,
        }
    }

    /// Converts to linear RGB.
    pub fn to_linear_rgb(&self) -> ColorResult<LinearRgb> {
        match self {
            Self::LinearRgb(c) => c.to_linear_rgb(),
            Self::GammaRgb(c) => c.to_linear_rgb(),
            Self::Cmy(c) => c.to_linear_rgb(),
            Self::Cmyk(c) => c.to_linear_rgb(),
            Self::Hsv(c) => c.to_linear_rgb(),
            Self::Hls(c) => c.to_linear_rgb(),
            Self::Yuv(c) => c.to_linear_rgb(),
            Self::Gray(c) => c.to_linear_rgb(),
            Self::Xyz(c) => c.to_linear_rgb(),
            Self::Lab(c) => c.to_linear_rgb(),
        }
    }

    /// Converts to any model implementing [`RgbConvert`].
    ///
    /// ```rust
    /// use chroma_color::{Color, Hsv, LinearRgb};
    ///
    /// let hsv: Hsv = Color::from(LinearRgb::new(0.0, 0.0, 0.5)).convert()?;
    /// assert_eq!(hsv.v, 0.5);
    /// # Ok::<(), chroma_color::ColorError>(())
    /// ```
    pub fn convert<T: RgbConvert>(&self) -> ColorResult<T> {
        T::from_linear_rgb(&self.to_linear_rgb()?)
    }

    /// Converts to XYZ.
    ///
    /// XYZ and Lab values keep their own white; everything else is
    /// interpreted as linear RGB in `profile`.
    pub fn to_xyz(&self, profile: &Profile) -> ColorResult<Xyz> {
        match self {
            Self::Xyz(c) => Ok(*c),
            Self::Lab(c) => Ok(c.to_xyz()),
            other => other.to_linear_rgb()?.to_xyz(profile),
        }
    }

    /// Converts to CIELab relative to D50.
    pub fn to_lab(&self) -> ColorResult<Lab> {
        match self {
            Self::Lab(c) => Ok(c.to_d50()),
            Self::Xyz(c) => Ok(c.to_lab()),
            other => other.to_linear_rgb()?.to_lab(ProfileId::Standard.profile()),
        }
    }

    /// Converts to gamma-encoded RGB with the sRGB curve.
    pub fn to_gamma_rgb(&self) -> ColorResult<GammaRgb> {
        self.convert()
    }

    /// Converts to CMY.
    pub fn to_cmy(&self) -> ColorResult<Cmy> {
        self.convert()
    }

    /// Converts to CMYK.
    pub fn to_cmyk(&self) -> ColorResult<Cmyk> {
        match self {
            Self::Cmy(c) => Ok(c.to_cmyk()),
            other => other.convert(),
        }
    }

    /// Converts to HSV.
    pub fn to_hsv(&self) -> ColorResult<Hsv> {
        self.convert()
    }

    /// Converts to HLS.
    pub fn to_hls(&self) -> ColorResult<Hls> {
        self.convert()
    }

    /// Converts to YUV.
    pub fn to_yuv(&self) -> ColorResult<Yuv> {
        self.convert()
    }

    /// Converts to gray with Rec.601 weights.
    pub fn to_gray(&self) -> ColorResult<Gray> {
        self.convert()
    }
}

impl RgbConvert for Color {
    fn to_linear_rgb(&self) -> ColorResult<LinearRgb> {
        Color::to_linear_rgb(self)
    }

    fn from_linear_rgb(rgb: &LinearRgb) -> ColorResult<Self> {
        Ok(Self::LinearRgb(*rgb))
    }
}

macro_rules! impl_from {
    ($($variant:ident),+ $(,)?) => {$(
        impl From<$variant> for Color {
            fn from(c: $variant) -> Self {
                Self::$variant(c)
            }
        }
    )+};
}

impl_from!(LinearRgb, GammaRgb, Cmy, Cmyk, Hsv, Hls, Yuv, Gray, Xyz, Lab);
