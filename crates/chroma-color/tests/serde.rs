#![cfg(feature = "serde")]

use chroma_color::{Color, GammaRgb, Lab, LinearRgb, Xyz};
use chroma_math::D65;
use chroma_transfer::Curve;

#[test]
fn color_survives_json() {
    let colors = [
        Color::from(LinearRgb::new(0.2, 0.5, 0.8)),
        Color::from(GammaRgb::new(0.5, 0.5, 0.5, Curve::Power(1.8))),
        Color::from(Xyz::new(0.3, 0.4, 0.5, D65)),
        Color::from(Lab::d50(50.0, 10.0, -20.0)),
    ];
    for c in colors {
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c, "{json}");
    }
}

#[test]
fn xyz_carries_white() {
    let json = serde_json::to_value(Xyz::new(0.3, 0.4, 0.5, D65)).unwrap();
    assert_eq!(json["white"]["x"], 0.95046);
}
