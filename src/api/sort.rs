use axum::{
    extract::{Multipart, State},
    response::Json,
};
use chroma_sort::{SkippedImage, Thumbnail};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::pages::sort_upload;
use crate::error::ApiError;
use crate::models::Layout;
use crate::services::{BatchStore, SortService};

/// Multipart form accepted by `/api/sort`
#[derive(Debug, ToSchema)]
pub struct SortForm {
    /// Binary image files (sent as `files[]` or `files`)
    pub files: Vec<String>,
    /// `spectrum` or `top_n`
    pub sorting_method: String,
    /// Target category for `top_n` (red, orange, yellow, green, cyan, blue, violet)
    pub dominant_color: Option<String>,
    /// Number of images to keep for `top_n` (default from configuration, 10)
    pub top_n: Option<usize>,
    /// Images per grid row (default 5)
    pub images_per_row: Option<u32>,
    /// Thumbnail side length in pixels (default 100)
    pub image_size: Option<u32>,
}

/// One image of a sorted batch
#[derive(Debug, Serialize, ToSchema)]
pub struct SortedImage {
    /// Thumbnail identifier, e.g. `image_0.jpg`
    pub id: String,
    /// URL of the JPEG thumbnail
    pub url: String,
    /// Sanitized upload filename
    pub name: String,
    /// Position in the upload
    pub index: usize,
    /// Average color as `#rrggbb`
    pub color: String,
    /// Hue in degrees
    pub hue: f64,
    pub category: String,
    /// Circular distance to the category's center hue
    pub distance_to_center: f64,
}

/// An upload left out of the batch
#[derive(Debug, Serialize, ToSchema)]
pub struct SkippedUpload {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

/// Response from the /api/sort endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct SortResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// Batch identifier for `/preview` and `/generate`
    pub batch: String,
    /// `spectrum` or `top_n`
    pub method: String,
    /// Target hue in degrees for `top_n`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_hue: Option<f64>,
    pub layout: Layout,
    /// Images in display order
    pub images: Vec<SortedImage>,
    pub skipped: Vec<SkippedUpload>,
}

impl SortedImage {
    fn from_thumbnail(batch_id: &str, thumbnail: &Thumbnail) -> Self {
        let image = &thumbnail.image;
        Self {
            id: thumbnail.id.clone(),
            url: format!("/preview/{batch_id}/{}", thumbnail.id),
            name: image.name.clone(),
            index: image.index,
            color: image.color.to_hex(),
            hue: image.hue,
            category: image.category.as_str().to_string(),
            distance_to_center: image.distance_to_center,
        }
    }
}

impl From<&SkippedImage> for SkippedUpload {
    fn from(skipped: &SkippedImage) -> Self {
        Self {
            index: skipped.index,
            name: skipped.name.clone(),
            reason: skipped.reason.clone(),
        }
    }
}

/// Sort an uploaded batch by dominant color
///
/// Accepts the same multipart form as the upload page and returns the
/// classification of every image in display order. The batch is kept for
/// `/preview/{batch}/{id}` and `/generate`.
#[utoipa::path(
    post,
    path = "/api/sort",
    request_body(content = SortForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Batch sorted", body = SortResponse),
        (status = 400, description = "Invalid parameter or malformed upload"),
        (status = 413, description = "Too many images or upload too large"),
        (status = 422, description = "Undecodable image (abort policy)"),
        (status = 504, description = "Sorting exceeded the request deadline"),
    ),
    tag = "Sort"
)]
pub async fn handle_sort<S: BatchStore>(
    State(sorter): State<Arc<SortService>>,
    State(store): State<Arc<S>>,
    multipart: Multipart,
) -> Result<Json<SortResponse>, ApiError> {
    let stored = sort_upload(&sorter, store.as_ref(), multipart).await?;
    let batch = &stored.batch;

    Ok(Json(SortResponse {
        status: 200,
        batch: stored.batch_id.clone(),
        method: batch.strategy.method().to_string(),
        target_hue: batch.strategy.target_hue(),
        layout: stored.layout,
        images: batch
            .thumbnails
            .iter()
            .map(|t| SortedImage::from_thumbnail(&stored.batch_id, t))
            .collect(),
        skipped: batch.skipped.iter().map(SkippedUpload::from).collect(),
    }))
}
