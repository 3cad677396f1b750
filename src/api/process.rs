use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    response::Json,
};
use phase_filters::Phase;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::ImagePipeline;

/// Successful response from the /process endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessResponse {
    /// Always true
    pub success: bool,
    /// Processed image as `data:image/png;base64,...`
    pub processed_image: String,
    /// Phase that was applied ("arterial" or "venous")
    pub phase: String,
}

/// Error body returned by every endpoint on failure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Multipart form accepted by /process (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ProcessForm {
    /// Image file in any common raster format
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
    /// "arterial" (default) or "venous"
    phase: Option<String>,
}

/// Fields collected from the multipart body
#[derive(Debug, Default)]
struct ProcessUpload {
    image: Option<Bytes>,
    phase: Option<String>,
}

impl ProcessUpload {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut upload = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("image") => {
                    tracing::debug!(
                        file_name = ?field.file_name(),
                        content_type = ?field.content_type(),
                        "Reading image field"
                    );
                    upload.image = Some(field.bytes().await?);
                }
                Some("phase") => upload.phase = Some(field.text().await?),
                other => tracing::trace!(field = ?other, "Ignoring form field"),
            }
        }

        Ok(upload)
    }
}

/// Resolve the phase tag, defaulting to arterial when the field is absent.
///
/// An explicitly empty value is not the same as a missing field and is
/// rejected.
pub fn resolve_phase(tag: Option<&str>) -> Result<Phase, ApiError> {
    match tag {
        None => Ok(Phase::default()),
        Some(tag) => tag
            .parse()
            .map_err(|_| ApiError::InvalidPhase(tag.to_string())),
    }
}

/// Apply a contrast-phase filter to an uploaded image
///
/// Accepts a multipart form with an `image` file and an optional `phase`.
/// Returns the processed image as a base64 PNG data URI.
#[utoipa::path(
    post,
    path = "/process",
    request_body(content = ProcessForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image processed", body = ProcessResponse),
        (status = 400, description = "Missing image, invalid phase, or malformed form", body = ErrorResponse),
        (status = 413, description = "Upload or decoded image too large", body = ErrorResponse),
        (status = 500, description = "Image could not be decoded or encoded", body = ErrorResponse),
    ),
    tag = "Processing"
)]
pub async fn handle_process(
    State(pipeline): State<Arc<ImagePipeline>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let upload = ProcessUpload::read(multipart?).await?;

    let image = upload.image.ok_or(ApiError::MissingImage)?;
    let phase = resolve_phase(upload.phase.as_deref())?;

    tracing::info!(
        phase = %phase,
        bytes = image.len(),
        "Process request received"
    );

    let encoded = pipeline.process_in_blocking_context(image, phase).await?;

    Ok(Json(ProcessResponse {
        success: true,
        processed_image: encoded.data_uri,
        phase: phase.as_str().to_string(),
    }))
}
