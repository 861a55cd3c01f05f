//! Interleaved RGBA pixel buffer.
//!
//! [`PixelBuffer`] is the one data-layout contract between the engine and the
//! application: `width * height` pixels, row-major, four bytes per pixel in
//! `R, G, B, A` order.

use crate::api::{EngineError, EngineResult};
use crate::color::Srgb;

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An RGBA8 image held in memory.
///
/// Owned by the caller; engine operations borrow it for the duration of a
/// single call. Tone curves mutate it in place, while convolution and
/// resize return a freshly allocated buffer.
///
/// # Example
///
/// ```
/// use pixel_engine::PixelBuffer;
///
/// let buffer = PixelBuffer::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 128]).unwrap();
/// assert_eq!(buffer.pixel(1, 0).unwrap(), [0, 0, 255, 128]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// Interleaved RGBA bytes, row-major.
    data: Vec<u8>,
}

/// Byte length of a `width x height` RGBA buffer, `None` on overflow.
pub(crate) fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

impl PixelBuffer {
    /// Wrap decoded RGBA bytes.
    ///
    /// Fails with [`EngineError::InvalidBufferSize`] when `data.len()` is not
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> EngineResult<Self> {
        let expected = byte_len(width, height).ok_or(EngineError::InvalidDimensions {
            width: width as u64,
            height: height as u64,
        })?;
        if data.len() != expected {
            return Err(EngineError::InvalidBufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> EngineResult<Self> {
        Self::from_fn(width, height, |_, _| rgba)
    }

    /// A buffer whose pixel at `(x, y)` is `f(x, y)`.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> [u8; 4],
    ) -> EngineResult<Self> {
        let len = byte_len(width, height).ok_or(EngineError::InvalidDimensions {
            width: width as u64,
            height: height as u64,
        })?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` when the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes per row (`width * 4`).
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Returns the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw RGBA bytes for in-place editing.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning its RGBA bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> EngineResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    /// The RGBA sample at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> EngineResult<[u8; 4]> {
        let i = self.offset(x, y)?;
        Ok([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// The RGB part of the sample at `(x, y)`.
    pub fn rgb(&self, x: u32, y: u32) -> EngineResult<Srgb> {
        let [r, g, b, _] = self.pixel(x, y)?;
        Ok(Srgb::new(r, g, b))
    }

    /// Overwrite the sample at `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> EngineResult<()> {
        let i = self.offset(x, y)?;
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
        Ok(())
    }

    /// Iterate over the pixels as `[R, G, B, A]` slices, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());

        let err = PixelBuffer::new(2, 2, vec![0; 12]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidBufferSize {
                expected: 16,
                actual: 12
            }
        );
    }

    #[test]
    fn test_pixel_access_row_major() {
        let buffer = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 7, 255]).unwrap();
        assert_eq!(buffer.stride(), 12);
        assert_eq!(buffer.pixel(2, 1).unwrap(), [2, 1, 7, 255]);
        assert_eq!(buffer.rgb(1, 0).unwrap(), Srgb::new(1, 0, 7));
        assert_eq!(&buffer.data()[12..16], &[0, 1, 7, 255]);
    }

    #[test]
    fn test_out_of_bounds() {
        let buffer = PixelBuffer::filled(4, 3, [0, 0, 0, 255]).unwrap();
        assert_eq!(
            buffer.pixel(4, 0),
            Err(EngineError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(buffer.rgb(0, 3).is_err());
    }

    #[test]
    fn test_set_pixel() {
        let mut buffer = PixelBuffer::filled(2, 2, [0, 0, 0, 0]).unwrap();
        buffer.set_pixel(1, 1, [9, 8, 7, 6]).unwrap();
        assert_eq!(buffer.pixel(1, 1).unwrap(), [9, 8, 7, 6]);
        assert_eq!(buffer.pixels().filter(|p| *p == [0, 0, 0, 0]).count(), 3);
        assert!(buffer.set_pixel(2, 0, [1, 1, 1, 1]).is_err());

        let raw = buffer.into_raw();
        assert_eq!(raw.len(), 16);
        assert_eq!(raw[12..], [9, 8, 7, 6]);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::new(0, 5, Vec::new()).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.pixels().count(), 0);
    }
}
