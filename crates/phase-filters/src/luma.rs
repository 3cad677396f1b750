//! BT.601 luma and the image-wide mean used as the contrast pivot.

use image::{Rgb, RgbImage};

/// Luma of a single RGB pixel, ITU-R BT.601 weights in 16-bit fixed point.
///
/// `(r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16`. The weights sum to
/// 65536, so pure grays map to themselves.
#[inline]
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let sum = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (sum >> 16) as u8
}

/// Mean luma of the whole image, rounded to the nearest integer.
///
/// Accumulates a 256-bin histogram so large images don't lose precision in
/// a float running sum. An empty image has pivot 0.
pub fn mean_luma(image: &RgbImage) -> u8 {
    let mut histogram = [0u64; 256];
    for pixel in image.pixels() {
        histogram[luma(pixel) as usize] += 1;
    }

    let count: u64 = histogram.iter().sum();
    if count == 0 {
        return 0;
    }

    let weighted: u64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &n)| value as u64 * n)
        .sum();

    let mean = weighted as f64 / count as f64;
    (mean + 0.5).floor().min(255.0) as u8
}
