//! Test fixtures: synthetic images and multipart bodies.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

const BOUNDARY: &str = "----phasecast-test-boundary-7MA4YWxkTrZu0gW";

/// Hand-built multipart/form-data body
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file part
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Add a text part
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
        self
    }

    /// Shorthand for a PNG `image` part
    pub fn image_png(self, data: &[u8]) -> Self {
        self.file("image", "scan.png", "image/png", data)
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// Diagonal gradient with a bright square, enough structure for both phases
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let inside = x > width / 4 && x < width * 3 / 4 && y > height / 4 && y < height * 3 / 4;
        if inside {
            Rgb([230, 220, 210])
        } else {
            let v = ((x + y) * 255 / (width + height).max(1)) as u8;
            Rgb([v, v / 2, 255 - v])
        }
    })
}

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).expect("Failed to encode fixture");
    out.into_inner()
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(DynamicImage::ImageRgb8(gradient_image(width, height)), ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(DynamicImage::ImageRgb8(gradient_image(width, height)), ImageFormat::Jpeg)
}

/// Single-frame GIF with a four-color palette
pub fn gif_bytes(width: u32, height: u32) -> Vec<u8> {
    let colors = [
        Rgba([0, 0, 0, 255]),
        Rgba([255, 255, 255, 255]),
        Rgba([200, 40, 40, 255]),
        Rgba([40, 40, 200, 255]),
    ];
    let image = RgbaImage::from_fn(width, height, |x, y| colors[((x / 2 + y / 2) % 4) as usize]);

    let mut out = Vec::new();
    {
        let mut encoder = image::codecs::gif::GifEncoder::new(&mut out);
        encoder
            .encode_frame(image::Frame::new(image))
            .expect("Failed to encode GIF fixture");
    }
    out
}

/// Semi-transparent RGBA PNG
pub fn rgba_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| Rgba([200, 100, 50, (x * 10 % 256) as u8]));
    encode(DynamicImage::ImageRgba8(image), ImageFormat::Png)
}

/// Bytes that no decoder recognizes
pub const GARBAGE: &[u8] = b"this is definitely not an image";
