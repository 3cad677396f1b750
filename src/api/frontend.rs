//! Embedded frontend delivery.
//!
//! Used as the router fallback when no `FRONTEND_DIR` override is
//! configured. Any GET/HEAD path that no API route matched is looked up in
//! the embedded bundle.

use axum::{
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
};

use crate::assets::AssetLoader;
use crate::error::ApiError;

pub async fn handle_frontend(method: Method, uri: Uri) -> Result<Response, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::NotFound);
    }

    let asset = AssetLoader::embedded_frontend(uri.path()).ok_or(ApiError::NotFound)?;

    Ok(([(header::CONTENT_TYPE, asset.mime)], asset.data).into_response())
}
