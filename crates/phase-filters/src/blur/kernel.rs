//! One-dimensional Gaussian kernel.

use crate::error::FilterError;

/// A normalized, symmetric 1-D Gaussian kernel.
///
/// The 2-D blur is separable, so one kernel is applied along rows and then
/// along columns. Weights sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    weights: Vec<f32>,
    sigma: f64,
}

impl GaussianKernel {
    /// Build a kernel of `size` taps.
    ///
    /// A `sigma` of zero or below derives the deviation from the size with
    /// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernelSize`] if `size` is even or zero.
    pub fn new(size: usize, sigma: f64) -> Result<Self, FilterError> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(size));
        }
        Ok(Self::with_radius(size / 2, sigma))
    }

    /// Build a kernel of `2 * radius + 1` taps. Always odd, so infallible.
    pub fn with_radius(radius: usize, sigma: f64) -> Self {
        let size = 2 * radius + 1;
        let sigma = if sigma > 0.0 {
            sigma
        } else {
            Self::auto_sigma(size)
        };

        let center = (size - 1) as f64 * 0.5;
        let scale = -0.5 / (sigma * sigma);
        let raw: Vec<f64> = (0..size)
            .map(|i| {
                let x = i as f64 - center;
                (scale * x * x).exp()
            })
            .collect();
        let sum: f64 = raw.iter().sum();
        let weights = raw.iter().map(|w| (w / sum) as f32).collect();

        Self { weights, sigma }
    }

    /// Deviation derived from kernel size when none is given.
    pub fn auto_sigma(size: usize) -> f64 {
        0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Half-width: taps on each side of the center.
    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
