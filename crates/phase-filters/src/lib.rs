//! phase-filters: fixed enhancement filters for contrast-phase previews
//!
//! This crate holds the pixel math behind phasecast. It has no I/O and no
//! logging: every function takes an [`RgbImage`](image::RgbImage) by
//! reference and returns a freshly allocated one.
//!
//! # Quick Start
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use phase_filters::Phase;
//!
//! let input = RgbImage::from_pixel(4, 4, Rgb([100, 120, 140]));
//! let phase: Phase = "venous".parse().unwrap();
//! let output = phase.apply(&input);
//!
//! assert_eq!(output.dimensions(), input.dimensions());
//! ```
//!
//! # Phases
//!
//! | Phase | Filter chain |
//! |-------|--------------|
//! | `arterial` | contrast x1.8, then brightness x1.1 |
//! | `venous` | 15x15 Gaussian blur, reflect-101 borders |
//!
//! ## Contrast Pivot
//!
//! Contrast is stretched around a single gray level shared by all three
//! channels: the rounded mean of the BT.601 luma of the whole image. Luma
//! uses the 16-bit fixed-point weights `19595 / 38470 / 7471`, the same
//! integer form most imaging libraries use for RGB to grayscale.
//!
//! ## Intermediate Clamping
//!
//! Each enhancement step clamps to `[0, 255]` and truncates to an integer
//! before the next step reads it. Fusing contrast and brightness into one
//! multiply would give different results for pixels that saturate after
//! the contrast step, so the two passes stay separate.
//!
//! ## Gaussian Sigma
//!
//! When no sigma is given the kernel derives it from its size:
//!
//! ```text
//! sigma = 0.3 * ((ksize - 1) * 0.5 - 1) + 0.8
//! ```
//!
//! For the 15-wide venous kernel that is `sigma = 2.6`.

pub mod blur;
pub mod enhance;
pub mod error;
pub mod luma;
pub mod phase;


pub use blur::{gaussian_blur, GaussianKernel};
pub use enhance::{brightness, contrast};
pub use error::FilterError;
pub use luma::{luma, mean_luma};
pub use phase::{Phase, ARTERIAL_BRIGHTNESS, ARTERIAL_CONTRAST, VENOUS_KERNEL_SIZE};
