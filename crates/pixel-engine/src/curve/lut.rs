use tracing::debug;

use crate::buffer::{for_each_row_mut, PixelBuffer, CHANNELS};
use crate::color::clamp_channel;

/// A 256-entry tone lookup table.
///
/// Holds the real-valued curve output for every byte input. A plain value:
/// rebuild it whenever the control points change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lut {
    values: [f64; 256],
}

impl Lut {
    /// Wrap precomputed table values.
    pub fn from_values(values: [f64; 256]) -> Self {
        Self { values }
    }

    /// The real-valued outputs, indexed by input byte.
    #[inline]
    pub fn values(&self) -> &[f64; 256] {
        &self.values
    }

    /// Output for a single input byte, before rounding.
    #[inline]
    pub fn get(&self, input: u8) -> f64 {
        self.values[input as usize]
    }

    /// The table rounded and clamped to bytes, as applied to pixels.
    pub fn to_bytes(&self) -> [u8; 256] {
        let mut bytes = [0u8; 256];
        for (b, v) in bytes.iter_mut().zip(self.values.iter()) {
            *b = clamp_channel(*v);
        }
        bytes
    }

    /// `true` when every byte maps to itself.
    pub fn is_identity(&self) -> bool {
        self.to_bytes()
            .iter()
            .enumerate()
            .all(|(i, &b)| i == b as usize)
    }

    /// Map the R, G and B channels of every pixel through the table, in place.
    ///
    /// Alpha is left untouched.
    pub fn apply(&self, buffer: &mut PixelBuffer) {
        let table = self.to_bytes();
        let stride = buffer.stride();
        debug!(
            width = buffer.width(),
            height = buffer.height(),
            "Applying tone LUT"
        );

        for_each_row_mut(buffer.data_mut(), stride, |_, row| {
            for px in row.chunks_exact_mut(CHANNELS) {
                px[0] = table[px[0] as usize];
                px[1] = table[px[1] as usize];
                px[2] = table[px[2] as usize];
            }
        });
    }

    /// Apply the table to a copy, leaving `buffer` unchanged.
    pub fn preview(&self, buffer: &PixelBuffer) -> PixelBuffer {
        let mut scratch = buffer.clone();
        self.apply(&mut scratch);
        scratch
    }
}

impl Default for Lut {
    /// The identity table.
    fn default() -> Self {
        let mut values = [0.0; 256];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f64;
        }
        Self { values }
    }
}

impl From<Lut> for [u8; 256] {
    fn from(lut: Lut) -> Self {
        lut.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{ControlPoint, ToneCurve};

    fn lut(in1: u8, out1: u8, in2: u8, out2: u8) -> Lut {
        ToneCurve::new(ControlPoint::new(in1, out1), ControlPoint::new(in2, out2))
            .unwrap()
            .lut()
    }

    #[test]
    fn test_default_is_identity() {
        assert!(Lut::default().is_identity());
        assert_eq!(Lut::default(), ToneCurve::identity().lut());
    }

    #[test]
    fn test_to_bytes_rounds_and_clamps() {
        let mut values = [0.0; 256];
        values[0] = -3.0;
        values[1] = 1.5;
        values[2] = 2.49;
        values[3] = 300.0;
        let bytes = Lut::from_values(values).to_bytes();
        assert_eq!(&bytes[..4], &[0, 2, 2, 255]);
    }

    #[test]
    fn test_apply_preserves_alpha() {
        let mut buffer = PixelBuffer::filled(3, 2, [100, 150, 200, 42]).unwrap();
        // Inverts the middle: (0,0) (1,255) (254,0) (255,255)
        let table = lut(1, 255, 254, 0);
        table.apply(&mut buffer);

        for px in buffer.pixels() {
            assert_eq!(px[3], 42);
            assert_eq!(px[0], table.to_bytes()[100]);
            assert_eq!(px[1], table.to_bytes()[150]);
            assert_eq!(px[2], table.to_bytes()[200]);
        }
    }

    #[test]
    fn test_preview_does_not_touch_source() {
        let buffer = PixelBuffer::filled(2, 2, [10, 20, 30, 255]).unwrap();
        let brighter = lut(128, 200, 200, 240).preview(&buffer);

        assert_eq!(buffer.pixel(0, 0).unwrap(), [10, 20, 30, 255]);
        assert_ne!(brighter, buffer);
    }

    #[test]
    fn test_apply_on_empty_buffer() {
        let mut buffer = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        lut(10, 20, 30, 40).apply(&mut buffer);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_into_byte_array() {
        let bytes: [u8; 256] = Lut::default().into();
        assert_eq!(bytes[77], 77);
    }
}
