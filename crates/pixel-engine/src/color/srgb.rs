//! sRGB color type
//!
//! sRGB is the encoding of every pixel the engine receives: three gamma-encoded
//! 8-bit channels. All projections start from this type.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::linear_rgb::LinearRgb;

/// An 8-bit color in sRGB color space.
///
/// This is the RGB part of a pixel sample. Channels are plain bytes, so the
/// `[0, 255]` invariant holds by construction; every conversion that produces
/// an `Srgb` clamps instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: u8,
    /// Green channel (gamma-encoded)
    pub g: u8,
    /// Blue channel (gamma-encoded)
    pub b: u8,
}

impl Srgb {
    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use pixel_engine::Srgb;
    /// let red = Srgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build an Srgb color from real-valued channels on the 0..=255 scale.
    ///
    /// Rounds and clamps each channel, so out-of-range inputs saturate.
    ///
    /// # Example
    /// ```
    /// use pixel_engine::Srgb;
    /// let color = Srgb::from_f64_clamped(300.0, 127.6, -4.0);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn from_f64_clamped(r: f64, g: f64, b: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Linear-light representation (IEC 61966-2-1 decode).
    #[inline]
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb::from(self)
    }
}

/// Round a real channel value and clamp it into `0..=255`.
#[inline]
pub(crate) fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Srgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Srgb> for [u8; 3] {
    fn from(color: Srgb) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Srgb {
    /// Formats as `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    /// - `r,g,b` - three decimal components, e.g. `255, 128, 0`
    ///
    /// Hex parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_engine::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Srgb::new(255, 255, 255));
    ///
    /// let orange: Srgb = "255, 128, 0".parse().unwrap();
    /// assert_eq!(orange, Srgb::new(255, 128, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            let [r, g, b] = parts.as_slice() else {
                return Err(ParseColorError::InvalidComponentCount(parts.len()));
            };
            let component =
                |part: &str| part.parse::<u8>().map_err(ParseColorError::InvalidComponent);
            return Ok(Self::new(component(*r)?, component(*g)?, component(*b)?));
        }

        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
