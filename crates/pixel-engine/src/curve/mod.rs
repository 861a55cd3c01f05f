//! Two-point tone curves and the 256-entry lookup tables built from them.
//!
//! A [`ToneCurve`] is three straight segments through `(0, 0)`, the two
//! control points and `(255, 255)`. [`ToneCurve::lut`] evaluates it once
//! per byte value, and [`Lut::apply`] maps every R, G and B channel
//! through the table while leaving alpha alone.
//!
//! Applying a non-identity table twice compounds: a pixel moved by the
//! first pass is moved again by the second.

mod lut;
mod tone_curve;

pub use lut::Lut;
pub use tone_curve::{ControlPoint, ToneCurve};
