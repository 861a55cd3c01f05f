//! 2-D convolution over the RGB channels of a pixel buffer.

use tracing::{debug, trace};

use super::kernel::Kernel;
use super::padding::PaddedRgb;
use crate::buffer::{for_each_row_mut, PixelBuffer, CHANNELS};
use crate::color::clamp_channel;

/// Convolve `buffer` with `kernel`, returning a new buffer.
///
/// The input is only read: every output pixel is computed from the
/// edge-padded copy of the source, never from already-filtered neighbors.
/// Each channel sum is divided by [`Kernel::normalization`], rounded and
/// clamped to `0..=255`. Alpha is copied from the source pixel.
///
/// # Example
///
/// ```
/// use pixel_engine::{convolve, PixelBuffer, Preset};
///
/// let flat = PixelBuffer::filled(5, 5, [90, 120, 200, 128]).unwrap();
/// let blurred = convolve(&flat, &Preset::GaussianBlur.kernel());
/// assert_eq!(blurred, flat);
/// ```
pub fn convolve(buffer: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    let half = kernel.half();
    let norm = kernel.normalization();
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        kernel_size = kernel.size(),
        "convolve"
    );
    debug!(kernel_sum = kernel.sum(), normalization = norm, "Applying convolution");

    // Starts as a copy so alpha is already in place.
    let mut output = buffer.clone();
    if buffer.is_empty() {
        return output;
    }

    let padded = PaddedRgb::new(buffer, half);
    let size = kernel.size();
    let stride = output.stride();

    for_each_row_mut(output.data_mut(), stride, |y, row| {
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let mut acc = [0.0f64; 3];
            for ky in 0..size {
                for kx in 0..size {
                    let w = kernel.weight(kx, ky);
                    if w == 0.0 {
                        continue;
                    }
                    let rgb = padded.get(x + kx, y + ky);
                    acc[0] += w * rgb[0];
                    acc[1] += w * rgb[1];
                    acc[2] += w * rgb[2];
                }
            }
            px[0] = clamp_channel(acc[0] / norm);
            px[1] = clamp_channel(acc[1] / norm);
            px[2] = clamp_channel(acc[2] / norm);
        }
    });

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Preset;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            [(x * 40) as u8, (y * 50) as u8, ((x + y) * 20) as u8, (x * 7 + y) as u8]
        })
        .unwrap()
    }

    #[test]
    fn test_identity_kernels_leave_buffer_unchanged() {
        let buffer = gradient(6, 4);
        assert_eq!(convolve(&buffer, &Preset::Identity.kernel()), buffer);
        assert_eq!(convolve(&buffer, &Kernel::identity()), buffer);
    }

    #[test]
    fn test_alpha_is_copied_not_convolved() {
        let buffer = gradient(5, 5);
        let blurred = convolve(&buffer, &Preset::BoxBlur.kernel());
        for (src, dst) in buffer.pixels().zip(blurred.pixels()) {
            assert_eq!(src[3], dst[3]);
        }
        assert_ne!(blurred, buffer);
    }

    #[test]
    fn test_box_blur_center_value() {
        // 3x3 image, only the center is bright
        let buffer = PixelBuffer::from_fn(3, 3, |x, y| {
            if (x, y) == (1, 1) {
                [90, 90, 90, 255]
            } else {
                [0, 0, 0, 255]
            }
        })
        .unwrap();
        let blurred = convolve(&buffer, &Preset::BoxBlur.kernel());
        assert_eq!(blurred.pixel(1, 1).unwrap(), [10, 10, 10, 255]);
        // corner (0,0) window: replicated (0,0) x4, (1,0), (0,1), (1,1) ... only one 90
        assert_eq!(blurred.pixel(0, 0).unwrap(), [10, 10, 10, 255]);
    }

    #[test]
    fn test_laplacian_clamps_and_uses_unit_normalization() {
        let buffer = PixelBuffer::from_fn(3, 1, |x, _| {
            if x == 1 {
                [100, 100, 100, 255]
            } else {
                [0, 0, 0, 255]
            }
        })
        .unwrap();
        let edges = convolve(&buffer, &Preset::Laplacian.kernel());
        // center: 4*100 - 0 - 0 - 100 (above, replicated) - 100 (below) = 200
        assert_eq!(edges.pixel(1, 0).unwrap(), [200, 200, 200, 255]);
        // neighbors go negative and clamp to zero
        assert_eq!(edges.pixel(0, 0).unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_sharpen_saturates() {
        let buffer = PixelBuffer::from_fn(3, 3, |x, y| {
            if (x, y) == (1, 1) {
                [200, 200, 200, 255]
            } else {
                [100, 100, 100, 255]
            }
        })
        .unwrap();
        let sharp = convolve(&buffer, &Preset::Sharpen.kernel());
        // 5*200 - 4*100 = 600
        assert_eq!(sharp.pixel(1, 1).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_kernel_larger_than_image() {
        let buffer = PixelBuffer::filled(2, 1, [33, 66, 99, 1]).unwrap();
        let kernel = Kernel::from_flat(7, vec![1.0; 49]).unwrap();
        assert_eq!(convolve(&buffer, &kernel), buffer);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::new(0, 4, Vec::new()).unwrap();
        let out = convolve(&buffer, &Preset::GaussianBlur.kernel());
        assert!(out.is_empty());
        assert_eq!(out.height(), 4);
    }
}
