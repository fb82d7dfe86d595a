use axum::{
    extract::{Multipart, State},
    response::Html,
};
use chroma_sort::SortedBatch;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppConfig, Layout, Selection};
use crate::services::{read_upload, BatchStore, PageService, SortService};

/// A sorted upload that has been stored for preview
pub struct StoredUpload {
    pub batch_id: String,
    pub batch: Arc<SortedBatch>,
    pub layout: Layout,
}

/// Read, validate, sort and store an uploaded batch
pub async fn sort_upload<S: BatchStore>(
    sorter: &SortService,
    store: &S,
    multipart: Multipart,
) -> Result<StoredUpload, ApiError> {
    let config = sorter.config();
    let upload = read_upload(multipart, config).await?;

    // Validate the selection before doing any image work
    let selection = Selection::from_fields(&upload.fields, &config.defaults)?;

    tracing::info!(
        images = upload.images.len(),
        rejected = upload.rejected.len(),
        method = selection.strategy.method(),
        image_size = selection.layout.image_size,
        "Sorting uploaded batch"
    );

    let batch = Arc::new(
        sorter
            .sort(upload.images, selection.strategy, selection.layout.image_size)
            .await?,
    );
    let batch_id = store.insert(batch.clone()).await?;

    Ok(StoredUpload {
        batch_id,
        batch,
        layout: selection.layout,
    })
}

/// Upload form
pub async fn handle_index(
    State(config): State<Arc<AppConfig>>,
    State(pages): State<Arc<PageService>>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(pages.render_upload(&config)?))
}

/// Sort an uploaded batch and show the preview grid
pub async fn handle_upload<S: BatchStore>(
    State(sorter): State<Arc<SortService>>,
    State(pages): State<Arc<PageService>>,
    State(store): State<Arc<S>>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let stored = sort_upload(&sorter, store.as_ref(), multipart).await?;
    let html = pages.render_preview(&stored.batch_id, &stored.batch, stored.layout)?;
    Ok(Html(html))
}
