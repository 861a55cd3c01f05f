//! Stateless entry points, one per engine operation.
//!
//! Each function is a thin, pure wrapper over the typed API in [`crate::color`],
//! [`crate::curve`], [`crate::filter`] and [`crate::resize`]. Nothing here
//! keeps state between calls.

use super::error::EngineResult;
use crate::buffer::PixelBuffer;
use crate::color::{contrast_ratio, relative_luminance, Srgb};
use crate::curve::{ControlPoint, Lut, ToneCurve};
use crate::filter::{convolve, Kernel};
use crate::resize::{self as resample, ResizeTarget};
use crate::sample::ColorProjections;

/// XYZ, Lab, LCh and Oklch projections of an RGB triple.
pub fn convert_pixel(rgb: [u8; 3]) -> ColorProjections {
    ColorProjections::of(Srgb::from(rgb))
}

/// WCAG relative luminance in `[0, 1]`.
pub fn luminance(rgb: [u8; 3]) -> f64 {
    relative_luminance(Srgb::from(rgb))
}

/// WCAG contrast ratio in `[1, 21]`, symmetric in its arguments.
pub fn contrast(a: [u8; 3], b: [u8; 3]) -> f64 {
    contrast_ratio(Srgb::from(a), Srgb::from(b))
}

/// Build the lookup table for control points `(input1, output1)` and
/// `(input2, output2)`.
///
/// Fails with [`EngineError::InvalidCurveParameters`](super::EngineError::InvalidCurveParameters)
/// unless `input1 < input2`.
///
/// ```
/// use pixel_engine::build_lut;
///
/// let lut = build_lut(0, 0, 255, 255).unwrap();
/// assert!(lut.is_identity());
/// ```
pub fn build_lut(input1: u8, output1: u8, input2: u8, output2: u8) -> EngineResult<Lut> {
    let curve = ToneCurve::new(
        ControlPoint::new(input1, output1),
        ControlPoint::new(input2, output2),
    )?;
    Ok(curve.lut())
}

/// Map R, G and B of every pixel through `lut`, in place.
pub fn apply_lut(buffer: &mut PixelBuffer, lut: &Lut) {
    lut.apply(buffer);
}

/// Like [`apply_lut`], on a copy.
pub fn preview_lut(buffer: &PixelBuffer, lut: &Lut) -> PixelBuffer {
    lut.preview(buffer)
}

/// Convolve with a kernel given as rows of weights.
///
/// Fails with [`EngineError::InvalidKernelShape`](super::EngineError::InvalidKernelShape)
/// before touching any pixel when the rows are empty, ragged, or of even
/// count.
///
/// ```
/// use pixel_engine::{apply_convolution, PixelBuffer};
///
/// let buffer = PixelBuffer::filled(3, 3, [10, 20, 30, 255]).unwrap();
/// let identity = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
/// let same = apply_convolution(&buffer, &identity).unwrap();
/// assert_eq!(same, buffer);
/// assert!(apply_convolution(&buffer, &[[1.0, 1.0], [1.0, 1.0]]).is_err());
/// ```
pub fn apply_convolution<R: AsRef<[f64]>>(
    buffer: &PixelBuffer,
    rows: &[R],
) -> EngineResult<PixelBuffer> {
    let kernel = Kernel::from_rows(rows)?;
    Ok(convolve(buffer, &kernel))
}

/// Nearest-neighbour resize to `target`.
pub fn resize(buffer: &PixelBuffer, target: ResizeTarget) -> EngineResult<PixelBuffer> {
    resample::resize(buffer, target)
}
