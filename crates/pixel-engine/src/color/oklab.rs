//! Oklab perceptual color space and its polar form Oklch
//!
//! Oklab is a perceptual color space designed for uniform color perception.
//! The pipeline is: linear sRGB -> LMS (M1) -> cube root -> Lab (M2).
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::hue::polar;
use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f64,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f64,
}

/// A color in Oklch (cylindrical Oklab).
///
/// # Example
///
/// ```
/// use pixel_engine::{Oklch, Srgb};
///
/// let gray = Oklch::from(Srgb::new(128, 128, 128));
/// // Neutral colors have (almost) no chroma
/// assert!(gray.c < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Oklch {
    /// Lightness, identical to [`Oklab::l`]
    pub l: f64,
    /// Chroma: Euclidean norm of (a, b)
    pub c: f64,
    /// Hue angle in degrees, normalized to `[0, 360)`
    pub h: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl Oklch {
    /// Components as an array `[L, C, h]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear RGB to Oklab.
    ///
    /// Uses the updated 2021-01-25 matrices from Björn Ottosson.
    fn from(rgb: LinearRgb) -> Self {
        // Step 1: Linear sRGB to LMS (M1 matrix)
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        // Step 2: Cube root (nonlinearity)
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        // Step 3: LMS to Lab (M2 matrix)
        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<Srgb> for Oklab {
    fn from(srgb: Srgb) -> Self {
        Self::from(srgb.to_linear())
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        let (c, h) = polar(lab.a, lab.b);
        Self { l: lab.l, c, h }
    }
}

impl From<Srgb> for Oklch {
    fn from(srgb: Srgb) -> Self {
        Self::from(Oklab::from(srgb))
    }
}
