//! Assertion helpers for tests.

use pixel_engine::PixelBuffer;
use pretty_assertions::assert_eq;

/// Assert two buffers have the same alpha plane
pub fn assert_alpha_preserved(before: &PixelBuffer, after: &PixelBuffer) {
    let alpha = |b: &PixelBuffer| b.pixels().map(|p| p[3]).collect::<Vec<u8>>();
    assert_eq!(alpha(before), alpha(after), "Alpha channel changed");
}

/// Assert every pixel of `buffer` equals `rgba`
pub fn assert_uniform(buffer: &PixelBuffer, rgba: [u8; 4]) {
    for (i, px) in buffer.pixels().enumerate() {
        assert_eq!(px, &rgba[..], "Pixel {i} differs");
    }
}

/// Assert `actual` is within `tolerance` of `expected`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected} ± {tolerance}, got {actual}"
    );
}
