//! End-to-end tests for the browser flow: upload form, preview, export.

mod common;

use axum::http::StatusCode;
use base64::Engine;
use common::fixtures::{colors, solid_png};
use common::{assert_html, assert_jpeg, assert_json_error, assert_ok, MultipartForm, TestApp};
use pretty_assertions::assert_eq;

/// Extract the batch id from the first `/preview/{batch}/...` link
fn batch_id(html: &str) -> String {
    let start = html.find("/preview/").expect("preview link") + "/preview/".len();
    let rest = &html[start..];
    let end = rest.find('/').expect("batch id terminator");
    rest[..end].to_string()
}

fn hidden_value<'a>(html: &'a str, name: &str) -> &'a str {
    let marker = format!(r#"name="{name}" value=""#);
    let start = html.find(&marker).expect("hidden field") + marker.len();
    let rest = &html[start..];
    &rest[..rest.find('"').expect("closing quote")]
}

fn upload_form() -> MultipartForm {
    MultipartForm::new()
        .file("sky.png", solid_png(colors::BLUE))
        .file("brick.png", solid_png(colors::RED))
        .file("leaf.png", solid_png(colors::GREEN))
        .spectrum()
        .text("images_per_row", "2")
        .text("image_size", "40")
}

#[tokio::test]
async fn test_index_shows_upload_form() {
    let app = TestApp::new();
    let response = app.get("/").await;

    assert_html(&response);
    let html = response.text();
    assert!(html.contains(r#"enctype="multipart/form-data""#));
    assert!(html.contains(r#"name="sorting_method""#));
    assert!(html.contains(r#"<option value="violet">Violet</option>"#));
}

#[tokio::test]
async fn test_upload_renders_sorted_preview() {
    let app = TestApp::new();
    let response = app.post_multipart("/", &upload_form()).await;

    assert_html(&response);
    let html = response.text();
    let batch = batch_id(&html);

    // Spectrum order: red, green, blue
    let brick = html.find(r#"alt="brick.png""#).unwrap();
    let leaf = html.find(r#"alt="leaf.png""#).unwrap();
    let sky = html.find(r#"alt="sky.png""#).unwrap();
    assert!(brick < leaf && leaf < sky);

    assert_eq!(
        hidden_value(&html, "image_filenames"),
        "image_0.jpg,image_1.jpg,image_2.jpg"
    );
    assert_eq!(hidden_value(&html, "batch"), batch);
    assert_eq!(hidden_value(&html, "images_per_row"), "2");
    assert_eq!(hidden_value(&html, "image_size"), "40");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_preview_serves_thumbnails() {
    let app = TestApp::new();
    let html = app.post_multipart("/", &upload_form()).await.text();
    let batch = batch_id(&html);

    let response = app.get(&format!("/preview/{batch}/image_0.jpg")).await;
    assert_jpeg(&response);

    let thumb = image::load_from_memory(&response.body).unwrap().to_rgb8();
    assert_eq!(thumb.dimensions(), (40, 40));
    // First in spectrum order is the red image
    let px = thumb.get_pixel(20, 20).0;
    assert!(px[0] > 150 && px[1] < 80 && px[2] < 80, "expected red, got {px:?}");
}

#[tokio::test]
async fn test_preview_unknown_ids() {
    let app = TestApp::new();
    let html = app.post_multipart("/", &upload_form()).await.text();
    let batch = batch_id(&html);

    let response = app.get(&format!("/preview/{batch}/image_9.jpg")).await;
    assert_json_error(&response, StatusCode::NOT_FOUND);

    let response = app.get("/preview/nope/image_0.jpg").await;
    assert_json_error(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generate_downloads_self_contained_page() {
    let app = TestApp::new();
    let html = app.post_multipart("/", &upload_form()).await.text();
    let batch = batch_id(&html);
    let filenames = hidden_value(&html, "image_filenames").to_string();

    let response = app
        .post_form(
            "/generate",
            &[
                ("batch", batch.as_str()),
                ("image_filenames", filenames.as_str()),
                ("images_per_row", "2"),
                ("image_size", "40"),
            ],
        )
        .await;

    assert_ok(&response);
    assert_eq!(
        response.header("content-disposition"),
        Some(r#"attachment; filename="output.html""#)
    );

    let page = response.text();
    assert!(page.contains("repeat(2, 40px)"));
    assert!(!page.contains("/preview/"));

    let uris: Vec<&str> = page
        .split(r#"src=""#)
        .skip(1)
        .map(|s| &s[..s.find('"').unwrap()])
        .collect();
    assert_eq!(uris.len(), 3);

    // Each data URI decodes to the same JPEG the preview route serves
    for (i, uri) in uris.iter().enumerate() {
        let encoded = uri
            .strip_prefix("data:image/jpeg;base64,")
            .expect("jpeg data uri");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        let preview = app.get(&format!("/preview/{batch}/image_{i}.jpg")).await;
        assert_eq!(decoded, preview.body);
    }
}

#[tokio::test]
async fn test_generate_respects_requested_order() {
    let app = TestApp::new();
    let html = app.post_multipart("/", &upload_form()).await.text();
    let batch = batch_id(&html);

    let response = app
        .post_form(
            "/generate",
            &[("batch", batch.as_str()), ("image_filenames", "image_2.jpg,image_0.jpg")],
        )
        .await;
    assert_ok(&response);

    let first = app.get(&format!("/preview/{batch}/image_2.jpg")).await;
    let expected = base64::engine::general_purpose::STANDARD.encode(&first.body);
    let page = response.text();
    let pos = page.find(&expected).expect("first image inlined");
    assert!(pos < page.rfind("data:image/jpeg").unwrap());
    // Defaults apply when layout fields are omitted
    assert!(page.contains("repeat(5, 100px)"));
}

#[tokio::test]
async fn test_generate_unknown_batch_or_image() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/generate",
            &[("batch", "missing"), ("image_filenames", "image_0.jpg")],
        )
        .await;
    assert_json_error(&response, StatusCode::NOT_FOUND);

    let html = app.post_multipart("/", &upload_form()).await.text();
    let batch = batch_id(&html);
    let response = app
        .post_form(
            "/generate",
            &[("batch", batch.as_str()), ("image_filenames", "image_7.jpg")],
        )
        .await;
    assert_json_error(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generate_without_batch_is_json_error() {
    let app = TestApp::new();
    let response = app
        .post_form("/generate", &[("image_filenames", "image_0.jpg")])
        .await;
    assert_json_error(&response, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("batch"));
}

#[tokio::test]
async fn test_generate_rejects_bad_layout() {
    let app = TestApp::new();
    let html = app.post_multipart("/", &upload_form()).await.text();
    let batch = batch_id(&html);

    let response = app
        .post_form(
            "/generate",
            &[
                ("batch", batch.as_str()),
                ("image_filenames", "image_0.jpg"),
                ("images_per_row", "-1"),
            ],
        )
        .await;
    assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_with_skipped_images_lists_them() {
    let app = TestApp::new();
    let form = MultipartForm::new()
        .file("brick.png", solid_png(colors::RED))
        .file("corrupt.jpg", b"\xff\xd8garbage".to_vec())
        .spectrum();

    let response = app.post_multipart("/", &form).await;
    assert_html(&response);
    let html = response.text();
    assert!(html.contains("1 skipped"));
    assert!(html.contains("corrupt.jpg"));
}
