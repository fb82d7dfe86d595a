use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::BatchStore;

/// Serve one thumbnail of a stored batch as JPEG
pub async fn handle_preview<S: BatchStore>(
    State(store): State<Arc<S>>,
    Path((batch_id, file)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let stored = store.get(&batch_id).await?.ok_or(ApiError::NotFound)?;
    let thumbnail = stored.batch.get(&file).ok_or(ApiError::NotFound)?;

    tracing::trace!(batch = %batch_id, file = %file, bytes = thumbnail.jpeg.len(), "Serving preview");

    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            // A batch never changes once stored
            (header::CACHE_CONTROL, "private, max-age=3600"),
        ],
        thumbnail.jpeg.clone(),
    )
        .into_response())
}
