//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use huesort::assets::AssetLoader;
use huesort::models::AppConfig;
use huesort::server::{build_router, create_app_state, create_app_state_with_config, AppState};
use huesort::services::InMemoryBatchStore;

use super::fixtures::MultipartForm;

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub store: Arc<InMemoryBatchStore>,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        let asset_loader = Arc::new(AssetLoader::new(None, None));
        let state = create_app_state(asset_loader).expect("Failed to create app state");
        Self::from_state(state)
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let asset_loader = Arc::new(AssetLoader::new(None, None));
        let state = create_app_state_with_config(asset_loader, Arc::new(config))
            .expect("Failed to create app state");
        Self::from_state(state)
    }

    fn from_state(state: AppState) -> Self {
        // Keep references for test assertions
        let store = state.store.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, store }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a multipart POST request
    pub async fn post_multipart(&self, path: &str, form: &MultipartForm) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", form.content_type())
            .body(Body::from(form.body()))
            .unwrap();
        self.request(request).await
    }

    /// Make a urlencoded form POST request
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::post(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
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

    /// Sort a batch through the JSON API and return the parsed response
    pub async fn sort(&self, form: &MultipartForm) -> serde_json::Value {
        let response = self.post_multipart("/api/sort", form).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "sort failed: {}",
            response.text()
        );
        response.json()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

fn urlencode(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
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

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response is a JPEG image
    pub fn is_jpeg(&self) -> bool {
        self.body.len() >= 3 && self.body[0..3] == [0xff, 0xd8, 0xff]
    }
}
