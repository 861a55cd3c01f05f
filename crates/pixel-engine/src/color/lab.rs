//! CIE L*a*b* and its polar form L*C*h
//!
//! Lab is computed relative to the D65 white point using the classic
//! CIE constants (`epsilon = 0.008856`, `kappa = 903.3`).

use super::hue::polar;
use super::srgb::Srgb;
use super::xyz::{Xyz, D65_WHITE};

/// Threshold between the cube-root and linear segments of `f(t)`.
const EPSILON: f64 = 0.008856;

/// Slope of the linear segment, expressed as `(kappa * t + 16) / 116`.
const KAPPA: f64 = 903.3;

/// A color in CIE L*a*b* space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lab {
    /// Lightness L*: 0 (black) to ~100 (white)
    pub l: f64,
    /// Green-red axis a*
    pub a: f64,
    /// Blue-yellow axis b*
    pub b: f64,
}

/// A color in CIE L*C*h (cylindrical Lab).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lch {
    /// Lightness L*, identical to [`Lab::l`]
    pub l: f64,
    /// Chroma: Euclidean norm of (a*, b*)
    pub c: f64,
    /// Hue angle in degrees, normalized to `[0, 360)`
    pub h: f64,
}

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Components as an array `[L, a, b]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl Lch {
    /// Components as an array `[L, C, h]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }
}

impl From<Xyz> for Lab {
    /// Convert XYZ (white `Y = 100`) to Lab relative to D65.
    fn from(xyz: Xyz) -> Self {
        let fx = f(xyz.x / 100.0 / D65_WHITE.x);
        let fy = f(xyz.y / 100.0 / D65_WHITE.y);
        let fz = f(xyz.z / 100.0 / D65_WHITE.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Srgb> for Lab {
    fn from(srgb: Srgb) -> Self {
        Self::from(Xyz::from(srgb))
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        let (c, h) = polar(lab.a, lab.b);
        Self { l: lab.l, c, h }
    }
}

impl From<Srgb> for Lch {
    fn from(srgb: Srgb) -> Self {
        Self::from(Lab::from(srgb))
    }
}
