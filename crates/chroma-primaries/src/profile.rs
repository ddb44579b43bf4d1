//! Profile definitions and the built-in profile table.
//!
//! A [`Profile`] is a reference white point plus the chromaticities of its
//! red, green and blue primaries. Primaries are normalized triples
//! (x, y, z) with x + y + z = 1; the white point is an XYZ value with Y = 1.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chroma_math::{Vec3, C, D50, D65, E};
use chroma_transfer::Curve;

use crate::{PrimariesError, PrimariesResult};

/// RGB color space definition.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::Profile;
/// use chroma_math::D65;
///
/// let custom = Profile::from_xy("Custom", D65, (0.64, 0.33), (0.30, 0.60), (0.15, 0.06));
/// assert_eq!(custom.white_point(), D65);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Display name.
    pub name: Cow<'static, str>,
    /// Reference white (Xn, 1, Zn).
    pub white: Vec3,
    /// Red primary chromaticity (x, y, z).
    pub red: Vec3,
    /// Green primary chromaticity (x, y, z).
    pub green: Vec3,
    /// Blue primary chromaticity (x, y, z).
    pub blue: Vec3,
}

impl Profile {
    /// Builds a profile from a white point and three primaries.
    ///
    /// Primaries whose components do not sum to 1 are scaled onto the
    /// x + y + z = 1 plane; the white point is kept as given.
    pub fn new(name: impl Into<Cow<'static, str>>, white: Vec3, red: Vec3, green: Vec3, blue: Vec3) -> Self {
        Self {
            name: name.into(),
            white,
            red: normalize_primary(red),
            green: normalize_primary(green),
            blue: normalize_primary(blue),
        }
    }

    /// Builds a profile from xy chromaticities of the primaries.
    ///
    /// Each primary is completed with z = 1 - x - y.
    pub fn from_xy(
        name: impl Into<Cow<'static, str>>,
        white: Vec3,
        red: (f64, f64),
        green: (f64, f64),
        blue: (f64, f64),
    ) -> Self {
        Self::new(
            name,
            white,
            Vec3::from_xy(red.0, red.1),
            Vec3::from_xy(green.0, green.1),
            Vec3::from_xy(blue.0, blue.1),
        )
    }

    /// Reference white point.
    #[inline]
    pub fn white_point(&self) -> Vec3 {
        self.white
    }

    /// Red primary.
    #[inline]
    pub fn red_point(&self) -> Vec3 {
        self.red
    }

    /// Green primary.
    #[inline]
    pub fn green_point(&self) -> Vec3 {
        self.green
    }

    /// Blue primary.
    #[inline]
    pub fn blue_point(&self) -> Vec3 {
        self.blue
    }

    /// Red, green and blue primaries in that order.
    #[inline]
    pub fn rgb_points(&self) -> [Vec3; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Scales `p` to unit component sum. Zero or non-finite sums are left alone.
fn normalize_primary(p: Vec3) -> Vec3 {
    let sum = p.sum();
    if (sum - 1.0).abs() < 1e-12 || sum == 0.0 || !sum.is_finite() {
        p
    } else {
        p / sum
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// Built-in Profiles
// ============================================================================

const fn builtin(name: &'static str, white: Vec3, r: (f64, f64), g: (f64, f64), b: (f64, f64)) -> Profile {
    Profile {
        name: Cow::Borrowed(name),
        white,
        red: Vec3::from_xy(r.0, r.1),
        green: Vec3::from_xy(g.0, g.1),
        blue: Vec3::from_xy(b.0, b.1),
    }
}

/// sRGB / Rec.709 primaries, D65 white.
pub static SRGB: Profile = builtin("sRGB", D65, (0.64, 0.33), (0.30, 0.60), (0.15, 0.06));

/// Adobe RGB (1998) primaries, D65 white.
pub static ADOBE_RGB: Profile = builtin("AdobeRGB", D65, (0.64, 0.33), (0.21, 0.71), (0.15, 0.06));

/// CIE 1931 RGB primaries, equal-energy white.
pub static CIE_RGB: Profile = builtin("CIE RGB", E, (0.7347, 0.2653), (0.2738, 0.7174), (0.1666, 0.0089));

/// NTSC (1953) primaries, illuminant C.
pub static NTSC: Profile = builtin("NTSC", C, (0.67, 0.33), (0.21, 0.71), (0.14, 0.08));

/// sRGB primaries Bradford-adapted to D50.
pub static SRGB_D50: Profile = builtin(
    "sRGB D50",
    D50,
    (0.648431, 0.330856),
    (0.321152, 0.597871),
    (0.155886, 0.066044),
);

/// AdobeRGB primaries Bradford-adapted to D50.
pub static ADOBE_RGB_D50: Profile = builtin(
    "AdobeRGB D50",
    D50,
    (0.648431, 0.330856),
    (0.230154, 0.701572),
    (0.155886, 0.066044),
);

/// Identifier of a built-in profile.
///
/// [`ProfileId::Standard`] is an alias that resolves to sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileId {
    /// Alias for [`ProfileId::Srgb`].
    #[default]
    Standard,
    /// sRGB, D65.
    Srgb,
    /// AdobeRGB (1998), D65.
    AdobeRgb,
    /// CIE 1931 RGB, illuminant E.
    CieRgb,
    /// NTSC (1953), illuminant C.
    Ntsc,
    /// sRGB adapted to D50.
    SrgbD50,
    /// AdobeRGB adapted to D50.
    AdobeRgbD50,
}

impl ProfileId {
    /// Every identifier, aliases included.
    pub const ALL: [ProfileId; 7] = [
        Self::Standard,
        Self::Srgb,
        Self::AdobeRgb,
        Self::CieRgb,
        Self::Ntsc,
        Self::SrgbD50,
        Self::AdobeRgbD50,
    ];

    /// The profile this identifier names.
    pub fn profile(self) -> &'static Profile {
        match self {
            Self::Standard | Self::Srgb => &SRGB,
            Self::AdobeRgb => &ADOBE_RGB,
            Self::CieRgb => &CIE_RGB,
            Self::Ntsc => &NTSC,
            Self::SrgbD50 => &SRGB_D50,
            Self::AdobeRgbD50 => &ADOBE_RGB_D50,
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Srgb => "srgb",
            Self::AdobeRgb => "adobe-rgb",
            Self::CieRgb => "cie-rgb",
            Self::Ntsc => "ntsc",
            Self::SrgbD50 => "srgb-d50",
            Self::AdobeRgbD50 => "adobe-rgb-d50",
        }
    }

    /// Conventional transfer curve for values stored in this profile.
    pub const fn curve(self) -> Curve {
        match self {
            Self::Standard | Self::Srgb | Self::SrgbD50 => Curve::Srgb,
            Self::AdobeRgb | Self::AdobeRgbD50 => Curve::AdobeRgb,
            Self::CieRgb | Self::Ntsc => Curve::Power(2.2),
        }
    }
}

impl From<ProfileId> for &'static Profile {
    fn from(id: ProfileId) -> Self {
        id.profile()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileId {
    type Err = PrimariesError;

    /// Parses a name case-insensitively; `_` and spaces count as `-`.
    fn from_str(s: &str) -> PrimariesResult<Self> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let key = match key.as_str() {
            "adobergb" => "adobe-rgb",
            "adobergb-d50" => "adobe-rgb-d50",
            "ciergb" => "cie-rgb",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|id| id.name() == key)
            .ok_or_else(|| PrimariesError::UnknownProfile(s.to_string()))
    }
}

// ============================================================================
// Accessors by identifier
// ============================================================================

/// White point of a built-in profile.
#[inline]
pub fn white_point(id: ProfileId) -> Vec3 {
    id.profile().white
}

/// Red primary of a built-in profile.
#[inline]
pub fn red_point(id: ProfileId) -> Vec3 {
    id.profile().red
}

/// Green primary of a built-in profile.
#[inline]
pub fn green_point(id: ProfileId) -> Vec3 {
    id.profile().green
}

/// Blue primary of a built-in profile.
#[inline]
pub fn blue_point(id: ProfileId) -> Vec3 {
    id.profile().blue
}

/// Red, green and blue primaries of a built-in profile.
#[inline]
pub fn rgb_points(id: ProfileId) -> [Vec3; 3] {
    id.profile().rgb_points()
}
