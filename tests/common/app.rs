//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use phasecast::assets::AssetLoader;
use phasecast::models::AppConfig;
use phasecast::server::{build_router, create_app_state, create_app_state_with_config, AppState};

use super::fixtures::MultipartBody;

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
    pub config: Arc<AppConfig>,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        // Embedded assets only (no external paths)
        let asset_loader = Arc::new(AssetLoader::new(None, None));
        let state = create_app_state(asset_loader).expect("Failed to create app state");
        Self::from_state(state)
    }

    /// Create a test application with an explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        let asset_loader = Arc::new(AssetLoader::new(None, None));
        Self::from_state(create_app_state_with_config(asset_loader, Arc::new(config)))
    }

    /// Create a test application serving the frontend from a directory
    pub fn with_frontend_dir(dir: impl Into<PathBuf>) -> Self {
        let asset_loader = Arc::new(AssetLoader::new(Some(dir.into()), None));
        let state = create_app_state(asset_loader).expect("Failed to create app state");
        Self::from_state(state)
    }

    fn from_state(state: AppState) -> Self {
        let config = state.config.clone();
        // Same router as production
        let router = build_router(state);
        Self { router, config }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a request with an arbitrary method and empty body
    pub async fn send_empty(&self, method: Method, path: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// POST a multipart form
    pub async fn post_multipart(&self, path: &str, form: MultipartBody) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", form.content_type())
            .body(Body::from(form.finish()))
            .unwrap();
        self.request(request).await
    }

    /// POST a raw body with the given content type
    pub async fn post_raw(&self, path: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Value of a header, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
