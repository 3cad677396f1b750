//! Pointwise contrast and brightness enhancement.
//!
//! Both operations are a linear blend between the input and a degenerate
//! image: a uniform gray at the mean luma for contrast, black for
//! brightness. A factor of 1.0 returns the input unchanged, factors above
//! 1.0 extrapolate away from the degenerate image.

use image::{Rgb, RgbImage};

use crate::luma::mean_luma;

/// Stretch every channel around the image's mean luma.
///
/// `out = pivot + (v - pivot) * factor`, clamped and truncated per channel.
/// The pivot is the same gray level for all three channels.
pub fn contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let pivot = mean_luma(image);
    blend_towards(image, pivot, factor)
}

/// Scale every channel by `factor`, clamped and truncated.
pub fn brightness(image: &RgbImage, factor: f32) -> RgbImage {
    blend_towards(image, 0, factor)
}

/// Blend between a uniform `base` gray (factor 0.0) and `image` (factor 1.0).
fn blend_towards(image: &RgbImage, base: u8, factor: f32) -> RgbImage {
    let base_f = base as f32;
    let mut output = RgbImage::new(image.width(), image.height());
    for (dst, src) in output.pixels_mut().zip(image.pixels()) {
        let Rgb([r, g, b]) = *src;
        *dst = Rgb([
            blend_channel(base_f, r, factor),
            blend_channel(base_f, g, factor),
            blend_channel(base_f, b, factor),
        ]);
    }
    output
}

#[inline]
fn blend_channel(base: f32, value: u8, factor: f32) -> u8 {
    let blended = base + factor * (value as f32 - base);
    if blended <= 0.0 {
        0
    } else if blended >= 255.0 {
        255
    } else {
        blended as u8
    }
}
