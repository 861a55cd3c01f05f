//! The engine boundary: flat functions over explicit inputs, plus the error type.

mod engine;
mod error;

pub use engine::{
    apply_convolution, apply_lut, build_lut, contrast, convert_pixel, luminance, preview_lut,
    resize,
};
pub use error::{EngineError, EngineResult};
