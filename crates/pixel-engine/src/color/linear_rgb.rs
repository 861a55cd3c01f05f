//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Every projection (XYZ, OKLab, luminance) starts from here.

use super::lut::srgb_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Linear RGB values represent light intensity proportional to physical light
/// power, in the range 0.0..=1.0 for colors decoded from 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Convert from sRGB to linear RGB using the gamma lookup table.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        assert_eq!(LinearRgb::from(Srgb::new(0, 0, 0)), LinearRgb::new(0.0, 0.0, 0.0));
        let white = LinearRgb::from(Srgb::new(255, 255, 255));
        assert!((white.r - 1.0).abs() < 1e-12);
        assert!((white.g - 1.0).abs() < 1e-12);
        assert!((white.b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_channels_decode_independently() {
        let linear = LinearRgb::from(Srgb::new(255, 128, 0));
        assert!((linear.r - 1.0).abs() < 1e-12);
        assert!((linear.g - 0.215_860_5).abs() < 1e-6);
        assert_eq!(linear.b, 0.0);
    }
}
