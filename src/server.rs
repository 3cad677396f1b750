//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::ImagePipeline;

/// Application state shared across all handlers.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pipeline: Arc<ImagePipeline>,
    pub assets: Arc<AssetLoader>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    Ok(create_app_state_with_config(asset_loader, config))
}

/// Create application state with an explicit configuration.
pub fn create_app_state_with_config(
    asset_loader: Arc<AssetLoader>,
    config: Arc<AppConfig>,
) -> AppState {
    let pipeline = Arc::new(ImagePipeline::new(&config));

    AppState {
        config,
        pipeline,
        assets: asset_loader,
    }
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Unmatched
/// paths fall through to the frontend: the `FRONTEND_DIR` override when it
/// exists, the embedded bundle otherwise.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();
    let frontend_dir = state.assets.frontend_override().map(|p| p.to_path_buf());

    let router = Router::new()
        .route("/process", post(handle_process))
        .route("/health", get(api::handle_health))
        .with_state(state);

    let router = match frontend_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving frontend from filesystem");
            router.fallback_service(ServeDir::new(dir))
        }
        None => router.fallback(api::handle_frontend),
    };

    let router = router
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http());

    if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

// Wrapper handler to extract the state component for the underlying API handler

async fn handle_process(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<axum::response::Json<api::ProcessResponse>, ApiError> {
    api::handle_process(State(state.pipeline), multipart).await
}
