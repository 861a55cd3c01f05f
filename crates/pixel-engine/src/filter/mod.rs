//! Convolution filtering.
//!
//! [`convolve`] runs an odd-sized square [`Kernel`] over the RGB channels
//! of a buffer, replicating edge pixels past the border. The output is
//! always a new buffer. [`Preset`] names the built-in 3x3 kernels.

mod convolve;
mod kernel;
mod padding;

pub use convolve::convolve;
pub use kernel::{normalize_preset_name, Kernel, Preset, UnknownPresetError, ZERO_SUM_EPSILON};
pub use padding::PaddedRgb;
