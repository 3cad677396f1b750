//! Decode uploaded bytes into an 8-bit RGB bitmap.

use image::{DynamicImage, ImageReader, RgbImage};
use std::io::Cursor;

use crate::error::PipelineError;

/// Decodes any supported container format and normalizes it to RGB.
///
/// Dimensions are read from the header first so oversized uploads are
/// rejected before a full decode allocates the bitmap.
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    max_decoded_pixels: u64,
}

impl InputNormalizer {
    pub fn new(max_decoded_pixels: u64) -> Self {
        Self { max_decoded_pixels }
    }

    /// Decode `bytes` and convert to 3-channel, 8-bit RGB.
    ///
    /// Alpha is dropped without compositing, grayscale is replicated across
    /// channels, palettes are expanded by the decoder. No resize and no EXIF
    /// orientation handling.
    ///
    /// The pixel limit is enforced on the header alone, so a header that
    /// declares an oversized image yields `ImageTooLarge` even when the rest
    /// of the data is corrupt.
    pub fn normalize(&self, bytes: &[u8]) -> Result<RgbImage, PipelineError> {
        let (width, height) = Self::inspect_dimensions(bytes)?;
        self.validate_pixel_limit(width, height)?;

        let decoded = Self::reader(bytes)?
            .decode()
            .map_err(|e| PipelineError::Decode(e.to_string()))?;

        tracing::debug!(
            width = decoded.width(),
            height = decoded.height(),
            color = ?decoded.color(),
            "Decoded upload"
        );

        Ok(Self::to_rgb(decoded))
    }

    /// Mode conversion to RGB8. Already-RGB8 images are moved, not copied.
    fn to_rgb(image: DynamicImage) -> RgbImage {
        match image {
            DynamicImage::ImageRgb8(rgb) => rgb,
            other => other.into_rgb8(),
        }
    }

    fn reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, PipelineError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode(e.to_string()))?;

        if reader.format().is_none() {
            return Err(PipelineError::Decode(
                "unrecognized image format".to_string(),
            ));
        }
        Ok(reader)
    }

    /// Read width and height from the image header only.
    fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), PipelineError> {
        Self::reader(bytes)?
            .into_dimensions()
            .map_err(|e| PipelineError::Decode(e.to_string()))
    }

    fn validate_pixel_limit(&self, width: u32, height: u32) -> Result<(), PipelineError> {
        let pixels = width as u64 * height as u64;
        if pixels > self.max_decoded_pixels {
            return Err(PipelineError::ImageTooLarge {
                width,
                height,
                max_pixels: self.max_decoded_pixels,
            });
        }
        Ok(())
    }
}
