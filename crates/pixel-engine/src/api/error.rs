//! Unified error type for the pixel-engine public API.
//!
//! Every failure is a local validation error: the operations are pure and
//! deterministic, so retrying never changes the outcome, and a failed call
//! never leaves a buffer partially modified.

use thiserror::Error;

/// Error type for engine operations.
///
/// # Example
///
/// ```
/// use pixel_engine::{build_lut, EngineError};
///
/// let err = build_lut(200, 10, 100, 250).unwrap_err();
/// assert!(matches!(err, EngineError::InvalidCurveParameters { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Tone curve control points are not strictly ordered (`input1 < input2`)
    #[error("invalid curve parameters: input1 ({input1}) must be less than input2 ({input2})")]
    InvalidCurveParameters {
        /// First control point input
        input1: u8,
        /// Second control point input
        input2: u8,
    },

    /// Kernel is empty, not square, or has an even size
    #[error("invalid kernel shape: {0}")]
    InvalidKernelShape(String),

    /// Point query outside the buffer extent
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        /// Requested column
        x: u32,
        /// Requested row
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Pixel data length does not match `width * height * 4`
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    InvalidBufferSize {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },

    /// Requested dimensions are zero or too large to allocate
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u64,
        /// Requested height
        height: u64,
    },
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidCurveParameters {
            input1: 200,
            input2: 100,
        };
        assert_eq!(
            err.to_string(),
            "invalid curve parameters: input1 (200) must be less than input2 (100)"
        );

        let err = EngineError::OutOfBounds {
            x: 10,
            y: 3,
            width: 10,
            height: 10,
        };
        assert_eq!(err.to_string(), "pixel (10, 3) is outside the 10x10 buffer");

        let err = EngineError::InvalidKernelShape("kernel size 4 is even".into());
        assert_eq!(err.to_string(), "invalid kernel shape: kernel size 4 is even");

        let err = EngineError::InvalidBufferSize {
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "buffer size mismatch: expected 16 bytes, got 12"
        );
    }
}
