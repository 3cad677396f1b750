//! Assertion helpers for tests.

use axum::http::StatusCode;
use base64::Engine;
use image::RgbImage;
use pretty_assertions::assert_eq;

use phasecast::services::DATA_URI_PREFIX;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is an error with the given status and message
pub fn assert_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], message, "Full response: {json}");
    assert!(
        json.get("processed_image").is_none(),
        "Error response must not carry an image"
    );
}

/// Assert response is a successful process result for `phase`
/// and return the decoded image
pub fn assert_processed(response: &TestResponse, phase: &str) -> RgbImage {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["success"], true);
    assert_eq!(json["phase"], phase);

    let uri = json["processed_image"]
        .as_str()
        .expect("Expected processed_image to be a string");
    decode_data_uri(uri)
}

/// Decode a `data:image/png;base64,...` URI into an RGB image
pub fn decode_data_uri(uri: &str) -> RgbImage {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .unwrap_or_else(|| panic!("Expected PNG data URI, got {}", &uri[..32.min(uri.len())]));
    let png = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .expect("Invalid base64 payload");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n", "Payload is not a PNG");

    image::load_from_memory_with_format(&png, image::ImageFormat::Png)
        .expect("Failed to decode PNG payload")
        .into_rgb8()
}
