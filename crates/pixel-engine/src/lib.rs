// Generated gamma tables carry more digits than f64 can hold.
#![allow(clippy::excessive_precision)]

//! pixel-engine: deterministic pixel transforms for photo editing
//!
//! The engine converts pixel samples between color spaces, builds and
//! applies tone-curve lookup tables, convolves RGBA buffers with square
//! kernels, and resizes them with nearest-neighbour sampling. All work is
//! pure CPU math over a caller-owned [`PixelBuffer`]; there is no I/O and no
//! state kept between calls.
//!
//! # Quick Start
//!
//! ```
//! use pixel_engine::{build_lut, convolve, PixelBuffer, Preset};
//!
//! let mut buffer = PixelBuffer::filled(8, 8, [120, 80, 40, 255]).unwrap();
//!
//! // Tone curve: mutates in place
//! let lut = build_lut(64, 48, 192, 208).unwrap();
//! lut.apply(&mut buffer);
//!
//! // Convolution: returns a new buffer
//! let sharpened = convolve(&buffer, &Preset::Sharpen.kernel());
//! assert_eq!(sharpened.width(), 8);
//! ```
//!
//! # Point Queries
//!
//! ```
//! use pixel_engine::{contrast, convert_pixel};
//!
//! let p = convert_pixel([255, 0, 0]);
//! assert!((p.lch.h - 40.0).abs() < 1.0);
//! assert!(contrast([0, 0, 0], [255, 255, 255]) > 20.9);
//! ```
//!
//! # Buffer Ownership
//!
//! | Operation | Input | Output |
//! |-----------|-------|--------|
//! | [`Lut::apply`] | `&mut PixelBuffer` | in place |
//! | [`Lut::preview`] | `&PixelBuffer` | new buffer |
//! | [`convolve`] | `&PixelBuffer` | new buffer |
//! | [`resize()`] | `&PixelBuffer` | new buffer |
//! | [`ColorSample::capture`] | `&PixelBuffer` | value snapshot |
//!
//! Bulk operations only ever write disjoint output rows and read shared,
//! immutable state. With the `parallel` feature (on by default) rows are
//! spread over a rayon thread pool; the result is bit-identical to a
//! sequential run. Alpha is never changed by tone curves or convolution.
//!
//! # Features
//!
//! - `parallel`: row-parallel bulk transforms via rayon (default)
//! - `serde`: `Serialize` for the color and sample value types

pub mod api;
pub mod buffer;
pub mod color;
pub mod curve;
pub mod filter;
pub mod resize;
pub mod sample;


pub use api::{
    apply_convolution, apply_lut, build_lut, contrast, convert_pixel, luminance, preview_lut,
    resize, EngineError, EngineResult,
};
pub use buffer::{PixelBuffer, CHANNELS};
pub use color::{
    contrast_ratio, relative_luminance, Lab, Lch, LinearRgb, Oklab, Oklch, ParseColorError, Srgb,
    Xyz, D65_WHITE,
};
pub use curve::{ControlPoint, Lut, ToneCurve};
pub use filter::{convolve, Kernel, Preset, UnknownPresetError};
pub use resize::{ResizeTarget, Side, MAX_SIDE};
pub use sample::{ColorProjections, ColorSample, Position};
