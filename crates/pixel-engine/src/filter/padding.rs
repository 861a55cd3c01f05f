//! Edge-replicated padding.

use crate::buffer::{PixelBuffer, CHANNELS};

/// The RGB planes of a buffer grown by `half` pixels on every side.
///
/// Each border pixel repeats the nearest in-bounds edge pixel, so a
/// convolution window never reads outside the image and borders are not
/// darkened. Alpha is not carried: it is never convolved.
#[derive(Debug, Clone)]
pub struct PaddedRgb {
    width: usize,
    height: usize,
    data: Vec<[f64; 3]>,
}

impl PaddedRgb {
    /// Pad `buffer` by `half` on all sides.
    pub fn new(buffer: &PixelBuffer, half: usize) -> Self {
        let (src_w, src_h) = (buffer.width() as usize, buffer.height() as usize);
        if src_w == 0 || src_h == 0 {
            return Self {
                width: 0,
                height: 0,
                data: Vec::new(),
            };
        }

        let width = src_w + 2 * half;
        let height = src_h + 2 * half;
        let src = buffer.data();
        let mut data = Vec::with_capacity(width * height);

        for py in 0..height {
            let sy = py.saturating_sub(half).min(src_h - 1);
            for px in 0..width {
                let sx = px.saturating_sub(half).min(src_w - 1);
                let i = (sy * src_w + sx) * CHANNELS;
                data.push([src[i] as f64, src[i + 1] as f64, src[i + 2] as f64]);
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Padded width: source width plus `2 * half`, or 0 for an empty source.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Padded height: source height plus `2 * half`, or 0 for an empty source.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGB at padded coordinates `(px, py)`.
    #[inline]
    pub fn get(&self, px: usize, py: usize) -> [f64; 3] {
        self.data[py * self.width + px]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replicates_edges() {
        // 2x2: distinct red per pixel
        let buffer = PixelBuffer::from_fn(2, 2, |x, y| [(10 * (y * 2 + x + 1)) as u8, 0, 0, 255])
            .unwrap();
        let padded = PaddedRgb::new(&buffer, 1);

        assert_eq!((padded.width(), padded.height()), (4, 4));
        // corners take the nearest corner pixel
        assert_eq!(padded.get(0, 0)[0], 10.0);
        assert_eq!(padded.get(3, 0)[0], 20.0);
        assert_eq!(padded.get(0, 3)[0], 30.0);
        assert_eq!(padded.get(3, 3)[0], 40.0);
        // interior is the source
        assert_eq!(padded.get(1, 1)[0], 10.0);
        assert_eq!(padded.get(2, 2)[0], 40.0);
        // edges repeat the row/column
        assert_eq!(padded.get(2, 0)[0], 20.0);
        assert_eq!(padded.get(0, 2)[0], 30.0);
    }

    #[test]
    fn test_single_pixel_wide_image() {
        let buffer = PixelBuffer::from_fn(1, 3, |_, y| [y as u8, 5, 6, 0]).unwrap();
        let padded = PaddedRgb::new(&buffer, 2);

        assert_eq!((padded.width(), padded.height()), (5, 7));
        for px in 0..5 {
            assert_eq!(padded.get(px, 0), [0.0, 5.0, 6.0]);
            assert_eq!(padded.get(px, 3), [1.0, 5.0, 6.0]);
            assert_eq!(padded.get(px, 6), [2.0, 5.0, 6.0]);
        }
    }

    #[test]
    fn test_zero_half_is_a_copy() {
        let buffer = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 9, 9]).unwrap();
        let padded = PaddedRgb::new(&buffer, 0);
        assert_eq!(padded.get(2, 1), [2.0, 1.0, 9.0]);
    }
}
