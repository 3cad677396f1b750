use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image provided")]
    MissingImage,

    #[error("Invalid phase. Use 'arterial' or 'venous'")]
    InvalidPhase(String),

    #[error("Malformed form data: {0}")]
    Multipart(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Pipeline(#[from] PipelineError),
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(e.body_text())
        } else {
            ApiError::Multipart(e.body_text())
        }
    }
}

impl From<axum::extract::multipart::MultipartRejection> for ApiError {
    fn from(e: axum::extract::multipart::MultipartRejection) -> Self {
        ApiError::Multipart(e.body_text())
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Cannot decode image: {0}")]
    Decode(String),

    #[error("Image too large: {width}x{height} (max {max_pixels} pixels)")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Processing task failed: {0}")]
    Task(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingImage => StatusCode::BAD_REQUEST,
            ApiError::InvalidPhase(_) => StatusCode::BAD_REQUEST,
            ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Pipeline(PipelineError::ImageTooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
