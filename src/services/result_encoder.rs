//! PNG + base64 data URI encoding for processed images.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::RgbImage;
use std::io::Cursor;

use crate::error::PipelineError;

/// MIME prefix of every data URI this encoder produces.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encoded form of a processed image.
#[derive(Debug, Clone)]
pub struct EncodedResult {
    /// Lossless PNG bytes
    pub png: Vec<u8>,
    /// `data:image/png;base64,<png>`
    pub data_uri: String,
}

/// Encode an RGB image as an 8-bit truecolor PNG and wrap it in a data URI.
pub fn encode(image: &RgbImage) -> Result<EncodedResult, PipelineError> {
    let png = encode_png(image)?;
    let data_uri = to_data_uri(&png);
    Ok(EncodedResult { png, data_uri })
}

/// `data:image/png;base64,` followed by standard, padded base64 of `png`.
pub fn to_data_uri(png: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + png.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(png, &mut uri);
    uri
}

fn encode_png(image: &RgbImage) -> Result<Vec<u8>, PipelineError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| PipelineError::Encode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| PipelineError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
