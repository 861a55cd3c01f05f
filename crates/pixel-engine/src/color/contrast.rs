//! WCAG relative luminance and contrast ratio.

use super::lut::wcag_to_linear;
use super::srgb::Srgb;

/// WCAG 2.x relative luminance of an sRGB color, in `0.0..=1.0`.
///
/// Each channel is linearized with the WCAG transfer function (threshold
/// 0.03928) and weighted `0.2126 R + 0.7152 G + 0.0722 B`.
///
/// # Example
///
/// ```
/// use pixel_engine::{relative_luminance, Srgb};
///
/// assert_eq!(relative_luminance(Srgb::new(0, 0, 0)), 0.0);
/// assert!((relative_luminance(Srgb::new(255, 255, 255)) - 1.0).abs() < 1e-9);
/// ```
#[inline]
pub fn relative_luminance(color: Srgb) -> f64 {
    0.2126 * wcag_to_linear(color.r)
        + 0.7152 * wcag_to_linear(color.g)
        + 0.0722 * wcag_to_linear(color.b)
}

/// WCAG contrast ratio between two colors, in `1.0..=21.0`.
///
/// `(max(L1, L2) + 0.05) / (min(L1, L2) + 0.05)`; symmetric in its arguments.
///
/// # Example
///
/// ```
/// use pixel_engine::{contrast_ratio, Srgb};
///
/// let ratio = contrast_ratio(Srgb::new(0, 0, 0), Srgb::new(255, 255, 255));
/// assert!((ratio - 21.0).abs() < 1e-6);
/// ```
pub fn contrast_ratio(a: Srgb, b: Srgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}
