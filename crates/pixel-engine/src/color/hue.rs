//! Shared polar decomposition for LCh-style color spaces.

/// Chroma and hue of a Cartesian `(a, b)` pair.
///
/// Chroma is the Euclidean norm. Hue is `atan2(b, a)` in degrees, normalized
/// to `[0, 360)`; an achromatic pair reports hue 0.
#[inline]
pub(crate) fn polar(a: f64, b: f64) -> (f64, f64) {
    let chroma = a.hypot(b);
    (chroma, normalize_degrees(b.atan2(a).to_degrees()))
}

/// Fold an angle in degrees into `[0, 360)`.
#[inline]
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
