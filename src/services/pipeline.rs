use axum::body::Bytes;
use phase_filters::Phase;
use std::sync::Arc;
use std::time::Instant;

use crate::error::PipelineError;
use crate::models::AppConfig;
use crate::services::input_normalizer::InputNormalizer;
use crate::services::result_encoder::{self, EncodedResult};

/// Decode, transform, and encode one uploaded image.
///
/// Holds only read-only settings, so one instance is shared by every
/// request. Each call allocates its own buffers.
#[derive(Debug, Clone)]
pub struct ImagePipeline {
    normalizer: InputNormalizer,
}

impl ImagePipeline {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            normalizer: InputNormalizer::new(config.max_decoded_pixels),
        }
    }

    /// Run the full pipeline synchronously.
    pub fn process(&self, bytes: &[u8], phase: Phase) -> Result<EncodedResult, PipelineError> {
        let started = Instant::now();

        let image = self.normalizer.normalize(bytes)?;
        let (width, height) = image.dimensions();

        let processed = phase.apply(&image);
        drop(image);

        let encoded = result_encoder::encode(&processed)?;

        tracing::info!(
            phase = %phase,
            width,
            height,
            input_bytes = bytes.len(),
            png_bytes = encoded.png.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Processed image"
        );

        Ok(encoded)
    }

    /// Run the pipeline on the blocking thread pool.
    ///
    /// Decoding, filtering, and PNG encoding are CPU-bound and would stall
    /// the async runtime if run inline.
    pub async fn process_in_blocking_context(
        self: &Arc<Self>,
        bytes: Bytes,
        phase: Phase,
    ) -> Result<EncodedResult, PipelineError> {
        let pipeline = self.clone();

        tokio::task::spawn_blocking(move || pipeline.process(&bytes, phase))
            .await
            .map_err(|e| PipelineError::Task(e.to_string()))?
    }
}
