//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{rejection::FormRejection, DefaultBodyLimit, Multipart, Path, State},
    response::{Html, Response},
    routing::{get, post},
    Form, Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{InMemoryBatchStore, PageService, SortService};

/// Room for the text fields and multipart framing on top of the image bytes
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sorter: Arc<SortService>,
    pub pages: Arc<PageService>,
    pub store: Arc<InMemoryBatchStore>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    create_app_state_with_config(asset_loader, config)
}

/// Create application state with an already loaded configuration.
pub fn create_app_state_with_config(
    asset_loader: Arc<AssetLoader>,
    config: Arc<AppConfig>,
) -> anyhow::Result<AppState> {
    let sorter = Arc::new(SortService::new(config.clone()));
    let pages = Arc::new(
        PageService::new(asset_loader)
            .map_err(|e| anyhow::anyhow!("Failed to create page service: {e}"))?,
    );
    let store = Arc::new(InMemoryBatchStore::new(config.store.max_batches));

    Ok(AppState {
        config,
        sorter,
        pages,
        store,
    })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .limits
        .max_total_bytes
        .saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        // Browser flow
        .route("/", get(handle_index).post(handle_upload))
        .route("/preview/:batch/:file", get(handle_preview))
        .route("/generate", post(handle_generate))
        // JSON API
        .route("/api/sort", post(handle_sort))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    api::handle_index(State(state.config), State(state.pages)).await
}

async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    api::handle_upload(
        State(state.sorter),
        State(state.pages),
        State(state.store),
        multipart,
    )
    .await
}

async fn handle_preview(
    State(state): State<AppState>,
    path: Path<(String, String)>,
) -> Result<Response, ApiError> {
    api::handle_preview(State(state.store), path).await
}

async fn handle_generate(
    State(state): State<AppState>,
    form: Result<Form<api::GenerateForm>, FormRejection>,
) -> Result<Response, ApiError> {
    api::handle_generate(
        State(state.config),
        State(state.pages),
        State(state.store),
        form?,
    )
    .await
}

async fn handle_sort(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<api::SortResponse>, ApiError> {
    api::handle_sort(State(state.sorter), State(state.store), multipart).await
}
