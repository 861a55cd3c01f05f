//! Square convolution kernels and the named presets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::api::{EngineError, EngineResult};

/// Sums smaller than this in magnitude count as zero.
///
/// Decimal weights such as `-0.1, -0.2, 0.3` cancel only up to rounding.
pub const ZERO_SUM_EPSILON: f64 = 1e-9;

/// An odd-sized square matrix of weights, stored row-major.
///
/// The shape is checked on construction, so every `Kernel` has a unique
/// center cell.
///
/// # Example
///
/// ```
/// use pixel_engine::Kernel;
///
/// let kernel = Kernel::from_rows(&[[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]]).unwrap();
/// assert_eq!(kernel.size(), 3);
/// assert_eq!(kernel.sum(), 16.0);
///
/// assert!(Kernel::from_rows(&[[1.0, 1.0], [1.0, 1.0]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Build a kernel from its rows.
    ///
    /// Fails with [`EngineError::InvalidKernelShape`] when the matrix is
    /// empty, not square, or has an even size.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> EngineResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidKernelShape("kernel is empty".into()));
        }
        let mut weights = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(EngineError::InvalidKernelShape(format!(
                    "row {i} has {} weights, expected {size}",
                    row.len()
                )));
            }
            weights.extend_from_slice(row);
        }
        Self::from_flat(size, weights)
    }

    /// Build a `size x size` kernel from row-major weights.
    pub fn from_flat(size: usize, weights: Vec<f64>) -> EngineResult<Self> {
        if size == 0 || weights.is_empty() {
            return Err(EngineError::InvalidKernelShape("kernel is empty".into()));
        }
        if size % 2 == 0 {
            return Err(EngineError::InvalidKernelShape(format!(
                "kernel size {size} is even"
            )));
        }
        if size.checked_mul(size) != Some(weights.len()) {
            return Err(EngineError::InvalidKernelShape(format!(
                "{} weights do not form a {size}x{size} kernel",
                weights.len()
            )));
        }
        Ok(Self { size, weights })
    }

    /// The 1x1 kernel `[[1]]`.
    pub fn identity() -> Self {
        Self {
            size: 1,
            weights: vec![1.0],
        }
    }

    /// Width and height of the kernel.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Padding needed on each side: `floor(size / 2)`.
    #[inline]
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Row-major weights.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight at row `ky`, column `kx`.
    #[inline]
    pub fn weight(&self, kx: usize, ky: usize) -> f64 {
        self.weights[ky * self.size + kx]
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.weights.chunks_exact(self.size)
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// The divisor applied to each accumulated channel.
    ///
    /// The kernel sum, or 1 when the sum is zero (edge detectors) within
    /// [`ZERO_SUM_EPSILON`].
    pub fn normalization(&self) -> f64 {
        let sum = self.sum();
        if sum.abs() < ZERO_SUM_EPSILON {
            1.0
        } else {
            sum
        }
    }

    /// Cap every weight at `max`.
    pub fn clamp_weights(mut self, max: f64) -> Self {
        for w in &mut self.weights {
            *w = w.min(max);
        }
        self
    }
}

/// Built-in 3x3 kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Leaves the image unchanged
    Identity,
    /// Center 5, cross -1
    Sharpen,
    /// Binomial 1-2-1 blur, sum 16
    GaussianBlur,
    /// All ones, sum 9
    BoxBlur,
    /// Zero-sum edge detector
    Laplacian,
}

impl Preset {
    /// Every preset, in menu order.
    pub const ALL: [Preset; 5] = [
        Preset::Identity,
        Preset::Sharpen,
        Preset::GaussianBlur,
        Preset::BoxBlur,
        Preset::Laplacian,
    ];

    /// Canonical name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Identity => "identity",
            Preset::Sharpen => "sharpen",
            Preset::GaussianBlur => "gaussianBlur",
            Preset::BoxBlur => "boxBlur",
            Preset::Laplacian => "laplacian",
        }
    }

    /// Weights of the preset, row-major.
    pub fn weights(self) -> [[f64; 3]; 3] {
        match self {
            Preset::Identity => [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
            Preset::Sharpen => [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
            Preset::GaussianBlur => [[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]],
            Preset::BoxBlur => [[1.0; 3]; 3],
            Preset::Laplacian => [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]],
        }
    }

    /// The preset as a validated 3x3 [`Kernel`].
    pub fn kernel(self) -> Kernel {
        let weights = self.weights().iter().flatten().copied().collect();
        Kernel { size: 3, weights }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kernel preset: {0}")]
pub struct UnknownPresetError(pub String);

/// Lowercase a preset name and drop `-`, `_` and spaces.
pub fn normalize_preset_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Preset {
    type Err = UnknownPresetError;

    /// Case-insensitive; `gaussian-blur`, `gaussian_blur` and `GaussianBlur`
    /// all name the same preset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_preset_name(s);
        Preset::ALL
            .into_iter()
            .find(|p| normalize_preset_name(p.name()) == wanted)
            .ok_or_else(|| UnknownPresetError(s.to_string()))
    }
}

impl From<Preset> for Kernel {
    fn from(preset: Preset) -> Self {
        preset.kernel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_validation() {
        let empty: [[f64; 0]; 0] = [];
        assert!(matches!(
            Kernel::from_rows(&empty),
            Err(EngineError::InvalidKernelShape(_))
        ));

        let even = [[1.0, 1.0], [1.0, 1.0]];
        assert_eq!(
            Kernel::from_rows(&even).unwrap_err(),
            EngineError::InvalidKernelShape("kernel size 2 is even".into())
        );

        let ragged = vec![vec![1.0, 1.0, 1.0], vec![1.0], vec![1.0, 1.0, 1.0]];
        assert!(matches!(
            Kernel::from_rows(&ragged),
            Err(EngineError::InvalidKernelShape(_))
        ));

        assert!(Kernel::from_flat(3, vec![1.0; 8]).is_err());
        assert!(Kernel::from_flat(1, vec![2.0]).is_ok());
    }

    #[test]
    fn test_single_row_is_not_square() {
        let row = [[1.0, 2.0, 1.0]];
        assert!(matches!(
            Kernel::from_rows(&row),
            Err(EngineError::InvalidKernelShape(_))
        ));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Preset::GaussianBlur.kernel().normalization(), 16.0);
        assert_eq!(Preset::BoxBlur.kernel().normalization(), 9.0);
        assert_eq!(Preset::Sharpen.kernel().normalization(), 1.0);
        // zero-sum kernels divide by one
        assert_eq!(Preset::Laplacian.kernel().sum(), 0.0);
        assert_eq!(Preset::Laplacian.kernel().normalization(), 1.0);
    }

    #[test]
    fn test_decimal_zero_sum_divides_by_one() {
        let decimals = [[0.0, -0.1, 0.0], [-0.2, 0.0, 0.3], [0.0, 0.0, 0.0]];
        let k = Kernel::from_rows(&decimals).unwrap();
        assert_ne!(k.sum(), 0.0);
        assert_eq!(k.normalization(), 1.0);

        let tiny = Kernel::from_flat(1, vec![1e-6]).unwrap();
        assert_eq!(tiny.normalization(), 1e-6);
    }

    #[test]
    fn test_weight_access() {
        let k = Preset::Sharpen.kernel();
        assert_eq!(k.half(), 1);
        assert_eq!(k.weight(1, 1), 5.0);
        assert_eq!(k.weight(1, 0), -1.0);
        assert_eq!(k.rows().count(), 3);
        assert_eq!(k.weights().len(), 9);
        assert_eq!(k.weights()[4], 5.0);
    }

    #[test]
    fn test_clamp_weights() {
        let k = Kernel::from_rows(&[[0.0, 250.0, 0.0], [-300.0, 1.0, 0.0], [0.0, 0.0, 0.0]])
            .unwrap()
            .clamp_weights(100.0);
        assert_eq!(k.weight(1, 0), 100.0);
        assert_eq!(k.weight(0, 1), -300.0);
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        assert_eq!("gaussian-blur".parse::<Preset>().unwrap(), Preset::GaussianBlur);
        assert_eq!("gaussian_blur".parse::<Preset>().unwrap(), Preset::GaussianBlur);
        assert_eq!("BOXBLUR".parse::<Preset>().unwrap(), Preset::BoxBlur);
        assert_eq!(
            "emboss".parse::<Preset>().unwrap_err(),
            UnknownPresetError("emboss".into())
        );
    }

    #[test]
    fn test_identity_kernels_agree() {
        assert_eq!(Kernel::identity().sum(), Preset::Identity.kernel().sum());
        assert_eq!(Kernel::from(Preset::Identity).weight(1, 1), 1.0);
    }
}
