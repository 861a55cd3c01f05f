//! The working image and its color picks.
//!
//! [`EditSession`] owns the decoded buffer for as long as it is being
//! edited. Mutating methods take `&mut self`, so no two edits can run on
//! the same buffer at once, and a failed edit leaves the buffer as it was.

use crate::error::{AppError, AppResult};
use pixel_engine::{
    contrast_ratio, convolve, ColorSample, Kernel, PixelBuffer, ResizeTarget, ToneCurve,
};

/// Which of the two pick slots to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSlot {
    Primary,
    Secondary,
}

#[derive(Debug, Clone)]
struct Image {
    /// As loaded, for reset
    pristine: PixelBuffer,
    working: PixelBuffer,
}

/// Editing state for one image
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    image: Option<Image>,
    primary: Option<ColorSample>,
    secondary: Option<ColorSample>,
}

impl EditSession {
    /// Start a session on a decoded buffer
    pub fn new(buffer: PixelBuffer) -> Self {
        let mut session = Self::default();
        session.load(buffer);
        session
    }

    /// Replace the image; both color picks are cleared
    pub fn load(&mut self, buffer: PixelBuffer) {
        tracing::info!(
            width = buffer.width(),
            height = buffer.height(),
            "Loaded image"
        );
        self.image = Some(Image {
            pristine: buffer.clone(),
            working: buffer,
        });
        self.primary = None;
        self.secondary = None;
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// The buffer as currently edited
    pub fn buffer(&self) -> AppResult<&PixelBuffer> {
        Ok(&self.image()?.working)
    }

    /// Take the edited buffer out, ending the session's hold on it
    pub fn into_buffer(self) -> AppResult<PixelBuffer> {
        self.image.map(|img| img.working).ok_or(AppError::NoImage)
    }

    fn image(&self) -> AppResult<&Image> {
        self.image.as_ref().ok_or(AppError::NoImage)
    }

    fn image_mut(&mut self) -> AppResult<&mut Image> {
        self.image.as_mut().ok_or(AppError::NoImage)
    }

    /// Capture the color at `(x, y)` into `slot`
    ///
    /// Out-of-bounds picks fail and keep the previous sample.
    pub fn pick(&mut self, slot: SampleSlot, x: u32, y: u32) -> AppResult<&ColorSample> {
        let sample = ColorSample::capture(&self.image()?.working, x, y)?;
        tracing::debug!(?slot, x, y, color = %sample.rgb, "Picked color");
        let stored = match slot {
            SampleSlot::Primary => &mut self.primary,
            SampleSlot::Secondary => &mut self.secondary,
        };
        Ok(stored.insert(sample))
    }

    pub fn sample(&self, slot: SampleSlot) -> Option<&ColorSample> {
        match slot {
            SampleSlot::Primary => self.primary.as_ref(),
            SampleSlot::Secondary => self.secondary.as_ref(),
        }
    }

    /// WCAG contrast between the two picks, once both exist
    pub fn contrast(&self) -> Option<f64> {
        match (&self.primary, &self.secondary) {
            (Some(a), Some(b)) => Some(contrast_ratio(a.rgb, b.rgb)),
            _ => None,
        }
    }

    /// Apply a tone curve to the working buffer in place
    pub fn apply_curve(&mut self, curve: &ToneCurve) -> AppResult<()> {
        let image = self.image_mut()?;
        curve.lut().apply(&mut image.working);
        tracing::info!(low = ?curve.low(), high = ?curve.high(), "Applied tone curve");
        Ok(())
    }

    /// The working buffer with `curve` applied, without changing it
    pub fn preview_curve(&self, curve: &ToneCurve) -> AppResult<PixelBuffer> {
        Ok(curve.lut().preview(&self.image()?.working))
    }

    /// Convolve the working buffer and swap the result in
    pub fn apply_kernel(&mut self, kernel: &Kernel) -> AppResult<()> {
        let image = self.image_mut()?;
        image.working = convolve(&image.working, kernel);
        tracing::info!(size = kernel.size(), "Applied kernel");
        Ok(())
    }

    /// The convolved buffer, leaving the working buffer in place
    pub fn preview_kernel(&self, kernel: &Kernel) -> AppResult<PixelBuffer> {
        Ok(convolve(&self.image()?.working, kernel))
    }

    /// Resample the working buffer
    pub fn resize(&mut self, target: ResizeTarget) -> AppResult<()> {
        let image = self.image_mut()?;
        image.working = pixel_engine::resize(&image.working, target)?;
        tracing::info!(
            width = image.working.width(),
            height = image.working.height(),
            "Resized image"
        );
        Ok(())
    }

    /// Drop all edits and return to the loaded buffer
    pub fn reset(&mut self) -> AppResult<()> {
        let image = self.image_mut()?;
        image.working = image.pristine.clone();
        tracing::info!("Reset image");
        Ok(())
    }
}
