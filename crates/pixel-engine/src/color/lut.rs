//! Gamma lookup table access functions
//!
//! This module provides exact gamma decoding for 8-bit channels using
//! pre-computed lookup tables generated at compile time by build.rs.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light (IEC 61966-2-1 transfer).
///
/// Uses the 0.04045 threshold on the normalized value: linear segment
/// `v / 12.92` below, power law `((v + 0.055) / 1.055)^2.4` above.
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    SRGB_TO_LINEAR[channel as usize]
}

/// Decode an 8-bit sRGB channel the way WCAG relative luminance does.
///
/// Identical power law, but with the historical 0.03928 threshold.
#[inline]
pub fn wcag_to_linear(channel: u8) -> f64 {
    WCAG_TO_LINEAR[channel as usize]
}

/// Encode a linear value (0.0..=1.0) back to normalized sRGB (0.0..=1.0).
///
/// Only used to validate the decode tables; the engine never re-encodes.
#[cfg(test)]
fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
