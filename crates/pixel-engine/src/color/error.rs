//! Error type for color parsing

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing color strings.
///
/// Returned when a hex string has the wrong length or bad digits, or when a
/// decimal `r,g,b` triple is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),

    /// A decimal component is not an integer in 0..=255
    #[error("invalid color component: {0}")]
    InvalidComponent(ParseIntError),

    /// A decimal triple did not have exactly three components
    #[error("expected 3 color components, got {0}")]
    InvalidComponentCount(usize),
}
