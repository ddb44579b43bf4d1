//! Hue helpers shared by the cylindrical models.
//!
//! Hue is measured in radians in [0, 2pi), with red at 0, green at 2pi/3
//! and blue at 4pi/3.

use std::f64::consts::{FRAC_PI_3, TAU};

use crate::LinearRgb;

/// RGB channel identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

/// A channel value tagged with the channel it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelValue {
    /// Source channel
    pub channel: Channel,
    /// Channel value
    pub value: f64,
}

impl ChannelValue {
    /// Creates a tagged value.
    #[inline]
    pub const fn new(channel: Channel, value: f64) -> Self {
        Self { channel, value }
    }
}

/// Sorts the channels of `rgb` ascending by value.
///
/// Ties keep input order (red, green, blue).
///
/// ```rust
/// use chroma_color::LinearRgb;
/// use chroma_color::hue::{chromatic_order, Channel};
///
/// let order = chromatic_order(LinearRgb::new(0.5, 0.5, 0.1));
/// assert_eq!(order[0].channel, Channel::Blue);
/// assert_eq!(order[1].channel, Channel::Red);
/// assert_eq!(order[2].channel, Channel::Green);
/// ```
pub fn chromatic_order(rgb: LinearRgb) -> [ChannelValue; 3] {
    let mut order = [
        ChannelValue::new(Channel::Red, rgb.r),
        ChannelValue::new(Channel::Green, rgb.g),
        ChannelValue::new(Channel::Blue, rgb.b),
    ];
    order.sort_by(|a, b| a.value.total_cmp(&b.value));
    order
}

fn value_of(order: &[ChannelValue; 3], channel: Channel) -> f64 {
    order
        .iter()
        .find(|cv| cv.channel == channel)
        .map_or(0.0, |cv| cv.value)
}

/// Hue in radians from a chromatic order, not yet normalized.
///
/// Uses the 60 degree segment keyed on the maximal channel. Returns 0 for
/// achromatic input (`chroma == 0`).
pub fn hue_from_order(order: &[ChannelValue; 3], chroma: f64) -> f64 {
    if chroma == 0.0 {
        return 0.0;
    }
    let r = value_of(order, Channel::Red);
    let g = value_of(order, Channel::Green);
    let b = value_of(order, Channel::Blue);
    let segment = match order[2].channel {
        Channel::Red => (g - b) / chroma,
        Channel::Green => (b - r) / chroma + 2.0,
        Channel::Blue => (r - g) / chroma + 4.0,
    };
    segment * FRAC_PI_3
}

/// Wraps `h` into [0, 2pi).
///
/// Constant time for any finite input. NaN and infinities yield NaN.
///
/// ```rust
/// use chroma_color::hue::normalize_hue;
/// use std::f64::consts::TAU;
///
/// assert!((normalize_hue(-1.0) - (TAU - 1.0)).abs() < 1e-12);
/// assert_eq!(normalize_hue(TAU), 0.0);
/// ```
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(TAU);
    // Tiny negative inputs round up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Rebuilds RGB from hue, chroma and the offset added to every channel.
pub(crate) fn sector_rgb(h: f64, chroma: f64, m: f64) -> LinearRgb {
    let hp = normalize_hue(h) / FRAC_PI_3;
    let x = chroma * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    LinearRgb::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn hue(rgb: LinearRgb) -> f64 {
        let order = chromatic_order(rgb);
        normalize_hue(hue_from_order(&order, rgb.chroma()))
    }

    #[test]
    fn test_order_is_stable() {
        let order = chromatic_order(LinearRgb::new(0.3, 0.3, 0.3));
        let channels: Vec<_> = order.iter().map(|cv| cv.channel).collect();
        assert_eq!(channels, [Channel::Red, Channel::Green, Channel::Blue]);
    }

    #[test]
    fn test_order_ascending() {
        let order = chromatic_order(LinearRgb::new(0.9, 0.1, 0.5));
        assert_eq!(order.map(|cv| cv.value), [0.1, 0.5, 0.9]);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(hue(LinearRgb::new(1.0, 0.0, 0.0)), 0.0);
        assert!((hue(LinearRgb::new(0.0, 1.0, 0.0)) - 2.0 * PI / 3.0).abs() < 1e-12);
        assert!((hue(LinearRgb::new(0.0, 0.0, 1.0)) - 4.0 * PI / 3.0).abs() < 1e-12);
        assert!((hue(LinearRgb::new(1.0, 0.0, 1.0)) - 5.0 * PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let order = chromatic_order(LinearRgb::new(0.4, 0.4, 0.4));
        assert_eq!(hue_from_order(&order, 0.0), 0.0);
    }

    #[test]
    fn test_normalize_range() {
        for h in [-100.0, -TAU, -1e-20, 0.0, 1.0, TAU, 7.0, 1e12] {
            let n = normalize_hue(h);
            assert!((0.0..TAU).contains(&n), "{h} -> {n}");
        }
        assert!(normalize_hue(f64::NAN).is_nan());
        assert!(normalize_hue(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_sector_rgb_primaries() {
        assert_eq!(sector_rgb(0.0, 1.0, 0.0), LinearRgb::new(1.0, 0.0, 0.0));
        let g = sector_rgb(2.0 * PI / 3.0, 1.0, 0.0);
        assert!(g.to_vec3().max_abs_diff(chroma_math::Vec3::new(0.0, 1.0, 0.0)) < 1e-12);
    }
}
