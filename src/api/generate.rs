use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppConfig, Layout};
use crate::services::{BatchStore, PageService};

/// Form posted by the preview page
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub batch: String,
    /// Comma-separated thumbnail identifiers in display order
    #[serde(default)]
    pub image_filenames: String,
    pub images_per_row: Option<String>,
    pub image_size: Option<String>,
}

impl GenerateForm {
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.image_filenames
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Build a self-contained HTML page from a stored batch and offer it as a download
pub async fn handle_generate<S: BatchStore>(
    State(config): State<Arc<AppConfig>>,
    State(pages): State<Arc<PageService>>,
    State(store): State<Arc<S>>,
    Form(form): Form<GenerateForm>,
) -> Result<Response, ApiError> {
    let layout = Layout::from_fields(
        form.images_per_row.as_deref(),
        form.image_size.as_deref(),
        &config.defaults,
    )?;

    let stored = store.get(&form.batch).await?.ok_or(ApiError::NotFound)?;
    let jpegs = form
        .ids()
        .map(|id| {
            stored.batch.get(id).map(|t| t.jpeg.as_slice()).ok_or_else(|| {
                tracing::debug!(batch = %form.batch, id, "Unknown thumbnail requested");
                ApiError::NotFound
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let count = jpegs.len();
    let html = pages.render_output(jpegs, layout)?;

    tracing::info!(
        batch = %form.batch,
        images = count,
        bytes = html.len(),
        "Generated HTML export"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                r#"attachment; filename="output.html""#,
            ),
        ],
        html,
    )
        .into_response())
}
