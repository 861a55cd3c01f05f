//! Nearest-neighbour resampling.
//!
//! The only interpolation offered: each destination pixel copies the source
//! pixel at `floor(x * src_w / dst_w), floor(y * src_h / dst_h)`, alpha
//! included. Fast, and blocky when enlarging.

use tracing::debug;

use crate::api::{EngineError, EngineResult};
use crate::buffer::{byte_len, for_each_row_mut, PixelBuffer, CHANNELS};

/// Largest width or height a resize may produce.
pub const MAX_SIDE: u32 = 9999;

/// Which side a caller fixes when keeping the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Fixed output width in pixels
    Width(u32),
    /// Fixed output height in pixels
    Height(u32),
}

/// Requested output size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResizeTarget {
    /// Absolute size in pixels.
    Pixels { width: u32, height: u32 },
    /// Size relative to the source, `100.0` keeps a side unchanged.
    Percent { width: f64, height: f64 },
}

impl ResizeTarget {
    /// Scale both sides by the same percentage.
    pub fn uniform_percent(percent: f64) -> Self {
        ResizeTarget::Percent {
            width: percent,
            height: percent,
        }
    }

    /// A pixel target that keeps the source aspect ratio.
    ///
    /// The side not given is `round(fixed * other_src / fixed_src)`.
    ///
    /// ```
    /// use pixel_engine::{ResizeTarget, Side};
    ///
    /// let target = ResizeTarget::with_aspect(1920, 1080, Side::Width(640));
    /// assert_eq!(target, ResizeTarget::Pixels { width: 640, height: 360 });
    /// ```
    pub fn with_aspect(src_width: u32, src_height: u32, side: Side) -> Self {
        let scale = |value: u32, num: u32, den: u32| -> u32 {
            if den == 0 {
                return 0;
            }
            let scaled = (value as f64 * num as f64 / den as f64).round();
            scaled.min(u32::MAX as f64) as u32
        };
        match side {
            Side::Width(width) => ResizeTarget::Pixels {
                width,
                height: scale(width, src_height, src_width),
            },
            Side::Height(height) => ResizeTarget::Pixels {
                width: scale(height, src_width, src_height),
                height,
            },
        }
    }

    /// Output dimensions for a `src_width x src_height` source.
    ///
    /// Fails with [`EngineError::InvalidDimensions`] when either side comes
    /// out as zero or larger than [`MAX_SIDE`].
    pub fn resolve(self, src_width: u32, src_height: u32) -> EngineResult<(u32, u32)> {
        let (width, height) = match self {
            ResizeTarget::Pixels { width, height } => (width as f64, height as f64),
            ResizeTarget::Percent { width, height } => (
                (src_width as f64 * width / 100.0).round(),
                (src_height as f64 * height / 100.0).round(),
            ),
        };

        let invalid = || EngineError::InvalidDimensions {
            width: width.max(0.0) as u64,
            height: height.max(0.0) as u64,
        };
        let fits = |v: f64| v.is_finite() && (1.0..=MAX_SIDE as f64).contains(&v);
        if !fits(width) || !fits(height) {
            return Err(invalid());
        }

        Ok((width as u32, height as u32))
    }
}

/// Resample `buffer` to `target` with nearest-neighbour lookup.
///
/// Returns a new buffer; the source is not modified.
pub fn resize(buffer: &PixelBuffer, target: ResizeTarget) -> EngineResult<PixelBuffer> {
    let (src_w, src_h) = (buffer.width(), buffer.height());
    if buffer.is_empty() {
        return Err(EngineError::InvalidDimensions {
            width: src_w as u64,
            height: src_h as u64,
        });
    }
    let (dst_w, dst_h) = target.resolve(src_w, src_h)?;
    debug!(src_w, src_h, dst_w, dst_h, "Resizing (nearest neighbour)");

    let len = byte_len(dst_w, dst_h).ok_or(EngineError::InvalidDimensions {
        width: dst_w as u64,
        height: dst_h as u64,
    })?;
    let mut data = vec![0u8; len];
    let src = buffer.data();
    let src_stride = buffer.stride();

    for_each_row_mut(&mut data, dst_w as usize * CHANNELS, |y, row| {
        let sy = (y as u64 * src_h as u64 / dst_h as u64) as usize;
        let src_row = &src[sy * src_stride..(sy + 1) * src_stride];
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let sx = (x as u64 * src_w as u64 / dst_w as u64) as usize;
            px.copy_from_slice(&src_row[sx * CHANNELS..(sx + 1) * CHANNELS]);
        }
    });

    PixelBuffer::new(dst_w, dst_h, data)
}
