//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

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

/// Assert response is a JPEG image
pub fn assert_jpeg(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_jpeg(),
        "Expected JPEG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..3.min(response.body.len())]
    );
    assert_eq!(response.header("content-type"), Some("image/jpeg"));
}

/// Assert response is an HTML page
pub fn assert_html(response: &TestResponse) {
    assert_ok(response);
    let content_type = response.header("content-type").unwrap_or_default();
    assert!(
        content_type.starts_with("text/html"),
        "Expected HTML, got Content-Type {content_type:?}"
    );
}

/// Assert an error response with the `{"status", "error"}` body
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert!(json["error"].is_string(), "Expected error message: {json}");
}

/// Names of the images in a `/api/sort` response, in display order
pub fn sorted_names(json: &serde_json::Value) -> Vec<String> {
    json["images"]
        .as_array()
        .expect("images array")
        .iter()
        .map(|i| i["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
