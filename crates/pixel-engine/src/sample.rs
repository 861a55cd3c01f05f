//! Point queries: every projection of one pixel, and color-pick snapshots.

use crate::api::EngineResult;
use crate::buffer::PixelBuffer;
use crate::color::{contrast_ratio, relative_luminance, Lab, Lch, Oklab, Oklch, Srgb, Xyz};

/// All color-space projections of an sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorProjections {
    /// CIE XYZ, white `Y = 100`
    pub xyz: Xyz,
    /// CIE L*a*b* (D65)
    pub lab: Lab,
    /// CIE L*C*h
    pub lch: Lch,
    /// Oklch
    pub oklch: Oklch,
}

impl ColorProjections {
    /// Project an sRGB color into XYZ, Lab, LCh and Oklch.
    pub fn of(color: Srgb) -> Self {
        let xyz = Xyz::from(color);
        let lab = Lab::from(xyz);
        Self {
            xyz,
            lab,
            lch: Lch::from(lab),
            oklch: Oklch::from(Oklab::from(color)),
        }
    }
}

/// Pixel-space coordinates of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

/// A color captured from a buffer at a moment in time.
///
/// A value snapshot: once captured it has no link to the buffer it came
/// from, so later edits to that buffer do not affect it.
///
/// # Example
///
/// ```
/// use pixel_engine::{ColorSample, PixelBuffer};
///
/// let buffer = PixelBuffer::filled(4, 4, [255, 255, 255, 255]).unwrap();
/// let sample = ColorSample::capture(&buffer, 1, 2).unwrap();
/// assert!((sample.projections.xyz.y - 100.0).abs() < 1e-3);
/// assert!(ColorSample::capture(&buffer, 4, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorSample {
    /// The sampled color
    pub rgb: Srgb,
    /// Where it was sampled
    pub position: Position,
    /// Its projections at capture time
    pub projections: ColorProjections,
}

impl ColorSample {
    /// Sample the pixel at `(x, y)`.
    ///
    /// Fails with [`EngineError::OutOfBounds`](crate::EngineError::OutOfBounds)
    /// outside the buffer extent.
    pub fn capture(buffer: &PixelBuffer, x: u32, y: u32) -> EngineResult<Self> {
        let rgb = buffer.rgb(x, y)?;
        Ok(Self {
            rgb,
            position: Position { x, y },
            projections: ColorProjections::of(rgb),
        })
    }

    /// WCAG relative luminance of the sampled color.
    pub fn luminance(&self) -> f64 {
        relative_luminance(self.rgb)
    }

    /// WCAG contrast ratio against another sample.
    pub fn contrast_with(&self, other: &ColorSample) -> f64 {
        contrast_ratio(self.rgb, other.rgb)
    }
}
