//! CIE XYZ color type

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// D65 reference white on the `Y = 1` scale (2° observer).
pub const D65_WHITE: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

/// A color in CIE 1931 XYZ space.
///
/// Produced by [`Xyz::from`] on sRGB input, scaled so that white has `Y = 100`.
/// Values are not clamped; XYZ may exceed 0..=100 for chromatic colors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an array `[X, Y, Z]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<LinearRgb> for Xyz {
    /// Apply the sRGB→XYZ primaries matrix (D65), scaled ×100.
    fn from(rgb: LinearRgb) -> Self {
        Self {
            x: (0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b) * 100.0,
            y: (0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b) * 100.0,
            z: (0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b) * 100.0,
        }
    }
}

impl From<Srgb> for Xyz {
    fn from(srgb: Srgb) -> Self {
        Self::from(srgb.to_linear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_d65() {
        let white = Xyz::from(Srgb::new(255, 255, 255));
        assert!((white.x - 95.047).abs() < 1e-3, "X = {}", white.x);
        assert!((white.y - 100.0).abs() < 1e-3, "Y = {}", white.y);
        assert!((white.z - 108.883).abs() < 1e-3, "Z = {}", white.z);
    }

    #[test]
    fn test_black_is_origin() {
        assert_eq!(Xyz::from(Srgb::new(0, 0, 0)), Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_primary_red() {
        let red = Xyz::from(Srgb::new(255, 0, 0));
        assert!((red.x - 41.24564).abs() < 1e-6);
        assert!((red.y - 21.26729).abs() < 1e-6);
        assert!((red.z - 1.93339).abs() < 1e-6);
    }
}
