//! Color types and conversion utilities
//!
//! Every conversion starts from an 8-bit [`Srgb`] triple and is a pure
//! function of it; there is no hidden state.
//!
//! # Color Spaces
//!
//! | Type | Produced by | Notes |
//! |------|-------------|-------|
//! | [`Srgb`] | pixel data | gamma-encoded bytes |
//! | [`LinearRgb`] | gamma decode (LUT) | IEC 61966-2-1 |
//! | [`Xyz`] | sRGB primaries matrix | white `Y = 100` |
//! | [`Lab`] / [`Lch`] | XYZ vs D65 white | CIE 1976 |
//! | [`Oklab`] / [`Oklch`] | LMS + cube root | Ottosson 2020 |
//!
//! Polar hues ([`Lch::h`], [`Oklch::h`]) are reported in degrees in `[0, 360)`.
//!
//! # Example
//!
//! ```
//! use pixel_engine::{Lab, Srgb, Xyz};
//!
//! let white = Srgb::new(255, 255, 255);
//! let xyz = Xyz::from(white);
//! assert!((xyz.y - 100.0).abs() < 1e-3);
//!
//! let lab = Lab::from(white);
//! assert!((lab.l - 100.0).abs() < 1e-3);
//! ```

mod contrast;
mod error;
mod hue;
mod lab;
mod linear_rgb;
mod lut;
mod oklab;
mod srgb;
mod xyz;

pub use contrast::{contrast_ratio, relative_luminance};
pub use error::ParseColorError;
pub use lab::{Lab, Lch};
pub use linear_rgb::LinearRgb;
pub use oklab::{Oklab, Oklch};
pub(crate) use srgb::clamp_channel;
pub use srgb::Srgb;
pub use xyz::{Xyz, D65_WHITE};
