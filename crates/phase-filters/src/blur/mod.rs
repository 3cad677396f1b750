//! Separable Gaussian blur with reflect-101 borders.
//!
//! The 2-D kernel is the outer product of a 1-D [`GaussianKernel`] with
//! itself, so the blur runs as a horizontal pass into a float buffer
//! followed by a vertical pass back to 8-bit. Rounding happens once, at
//! the end of the vertical pass.

pub mod border;
pub mod kernel;

pub use border::reflect_101;
pub use kernel::GaussianKernel;

use image::{Rgb, RgbImage};

const CHANNELS: usize = 3;

/// Blur `image` with `kernel` along both axes.
///
/// Output has the same dimensions as the input. Edges sample mirrored
/// pixels (reflect-101), so borders don't darken.
pub fn gaussian_blur(image: &RgbImage, kernel: &GaussianKernel) -> RgbImage {
    let (width, height) = (image.width() as usize, image.height() as usize);
    if width == 0 || height == 0 {
        return RgbImage::new(image.width(), image.height());
    }

    let weights = kernel.weights();
    let radius = kernel.radius() as isize;
    let src = image.as_raw();

    // Horizontal pass
    let mut horizontal = vec![0f32; width * height * CHANNELS];
    for y in 0..height {
        let row = y * width * CHANNELS;
        for x in 0..width {
            let mut acc = [0f32; CHANNELS];
            for (k, &w) in weights.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - radius, width);
                let idx = row + sx * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += w * src[idx + c] as f32;
                }
            }
            let out = row + x * CHANNELS;
            horizontal[out..out + CHANNELS].copy_from_slice(&acc);
        }
    }

    // Vertical pass
    let mut output = RgbImage::new(image.width(), image.height());
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0f32; CHANNELS];
            for (k, &w) in weights.iter().enumerate() {
                let sy = reflect_101(y as isize + k as isize - radius, height);
                let idx = (sy * width + x) * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += w * horizontal[idx + c];
                }
            }
            output.put_pixel(
                x as u32,
                y as u32,
                Rgb([to_u8(acc[0]), to_u8(acc[1]), to_u8(acc[2])]),
            );
        }
    }

    output
}

#[inline]
fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
