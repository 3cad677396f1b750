//! Phase selection and the fixed filter chain bound to each phase.

use std::fmt;
use std::str::FromStr;

use image::RgbImage;

use crate::blur::{gaussian_blur, GaussianKernel};
use crate::enhance::{brightness, contrast};
use crate::error::FilterError;

/// Contrast factor of the arterial phase.
pub const ARTERIAL_CONTRAST: f32 = 1.8;

/// Brightness factor of the arterial phase, applied after contrast.
pub const ARTERIAL_BRIGHTNESS: f32 = 1.1;

/// Gaussian kernel width (and height) of the venous phase.
pub const VENOUS_KERNEL_SIZE: usize = 15;

/// Contrast phase to simulate.
///
/// Parsing is exact and case-sensitive: only `"arterial"` and `"venous"`
/// are accepted. `Default` is [`Phase::Arterial`], the phase used when a
/// caller doesn't choose one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Contrast x1.8 followed by brightness x1.1
    #[default]
    Arterial,
    /// 15x15 Gaussian blur
    Venous,
}

impl Phase {
    /// Every phase, in declaration order.
    pub const ALL: [Phase; 2] = [Phase::Arterial, Phase::Venous];

    /// Wire name of the phase.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Arterial => "arterial",
            Phase::Venous => "venous",
        }
    }

    /// The transform bound to this phase.
    pub fn transform(self) -> fn(&RgbImage) -> RgbImage {
        match self {
            Phase::Arterial => arterial,
            Phase::Venous => venous,
        }
    }

    /// Run this phase's transform. The input is never modified.
    pub fn apply(self, image: &RgbImage) -> RgbImage {
        (self.transform())(image)
    }
}

impl FromStr for Phase {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| FilterError::UnknownPhase(s.to_string()))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arterial phase: contrast, then brightness on the contrast output.
pub fn arterial(image: &RgbImage) -> RgbImage {
    let contrasted = contrast(image, ARTERIAL_CONTRAST);
    brightness(&contrasted, ARTERIAL_BRIGHTNESS)
}

/// Venous phase: Gaussian blur with a size-derived sigma.
pub fn venous(image: &RgbImage) -> RgbImage {
    let kernel = GaussianKernel::with_radius(VENOUS_KERNEL_SIZE / 2, 0.0);
    gaussian_blur(image, &kernel)
}
