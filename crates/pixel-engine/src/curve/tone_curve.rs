use crate::api::{EngineError, EngineResult};

use super::Lut;

/// One `(input, output)` pair of a tone curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ControlPoint {
    /// Channel value before the curve
    pub input: u8,
    /// Channel value after the curve
    pub output: u8,
}

impl ControlPoint {
    /// A point mapping `input` to `output`.
    #[inline]
    pub const fn new(input: u8, output: u8) -> Self {
        Self { input, output }
    }
}

/// A validated pair of control points with `low.input < high.input`.
///
/// # Example
///
/// ```
/// use pixel_engine::{ControlPoint, ToneCurve};
///
/// let curve = ToneCurve::new(ControlPoint::new(64, 32), ControlPoint::new(192, 224)).unwrap();
/// let lut = curve.lut();
/// assert_eq!(lut.to_bytes()[64], 32);
/// assert_eq!(lut.to_bytes()[192], 224);
///
/// assert!(ToneCurve::new(ControlPoint::new(192, 0), ControlPoint::new(64, 255)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ToneCurve {
    low: ControlPoint,
    high: ControlPoint,
}

impl ToneCurve {
    /// Build a curve from its two control points.
    ///
    /// Fails with [`EngineError::InvalidCurveParameters`] unless
    /// `low.input < high.input`.
    pub fn new(low: ControlPoint, high: ControlPoint) -> EngineResult<Self> {
        if low.input >= high.input {
            return Err(EngineError::InvalidCurveParameters {
                input1: low.input,
                input2: high.input,
            });
        }
        Ok(Self { low, high })
    }

    /// The curve `(0, 0) -> (255, 255)`.
    pub const fn identity() -> Self {
        Self {
            low: ControlPoint::new(0, 0),
            high: ControlPoint::new(255, 255),
        }
    }

    /// The control point with the smaller input.
    #[inline]
    pub fn low(&self) -> ControlPoint {
        self.low
    }

    /// The control point with the larger input.
    #[inline]
    pub fn high(&self) -> ControlPoint {
        self.high
    }

    /// Evaluate the curve at channel value `i`.
    pub fn eval(&self, i: u8) -> f64 {
        let (in1, out1) = (self.low.input as f64, self.low.output as f64);
        let (in2, out2) = (self.high.input as f64, self.high.output as f64);
        let x = i as f64;

        if i <= self.low.input {
            if self.low.input == 0 {
                return out1;
            }
            (out1 / in1) * x
        } else if i >= self.high.input {
            if self.high.input == u8::MAX {
                return out2;
            }
            ((255.0 - out2) / (255.0 - in2)) * (x - in2) + out2
        } else {
            out1 + (out2 - out1) * (x - in1) / (in2 - in1)
        }
    }

    /// Tabulate the curve for every byte value.
    pub fn lut(&self) -> Lut {
        let mut values = [0.0; 256];
        for (i, v) in values.iter_mut().enumerate() {
            *v = self.eval(i as u8);
        }
        Lut::from_values(values)
    }
}

impl Default for ToneCurve {
    fn default() -> Self {
        Self::identity()
    }
}
