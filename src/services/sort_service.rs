use chroma_sort::{BatchPipeline, ImageInput, RenderOptions, SortStrategy, SortedBatch};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ApiError;
use crate::models::AppConfig;

/// Runs image batches through the color pipeline under the configured limits
pub struct SortService {
    config: Arc<AppConfig>,
    pipeline: Arc<BatchPipeline>,
}

impl SortService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let pipeline = Arc::new(BatchPipeline::new(config.pipeline_options()));
        Self { config, pipeline }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Reject batches over the image count or byte limits
    pub fn check_limits(&self, images: &[ImageInput]) -> Result<(), ApiError> {
        let limits = &self.config.limits;

        if images.len() > limits.max_images {
            return Err(ApiError::TooManyImages {
                count: images.len(),
                max: limits.max_images,
            });
        }

        let size: usize = images.iter().map(|i| i.bytes.len()).sum();
        if size > limits.max_total_bytes {
            return Err(ApiError::PayloadTooLarge {
                size,
                max: limits.max_total_bytes,
            });
        }

        Ok(())
    }

    /// Sort a batch and render `image_size` thumbnails
    ///
    /// Decoding, extraction and encoding run on the blocking pool so the
    /// async runtime stays responsive. The request deadline covers the
    /// whole batch.
    pub async fn sort(
        &self,
        images: Vec<ImageInput>,
        strategy: SortStrategy,
        image_size: u32,
    ) -> Result<SortedBatch, ApiError> {
        if images.is_empty() {
            return Err(ApiError::NoImages);
        }
        self.check_limits(&images)?;

        let render: RenderOptions = self.config.render_options(image_size)?;
        let pipeline = self.pipeline.clone();
        let timeout_secs = self.config.limits.request_timeout_secs;

        let task =
            tokio::task::spawn_blocking(move || pipeline.run(&images, &strategy, &render));

        match tokio::time::timeout(Duration::from_secs(timeout_secs), task).await {
            Ok(joined) => {
                let batch = joined.map_err(|e| ApiError::Internal(format!("Sort task failed: {e}")))??;
                Ok(batch)
            }
            Err(_) => {
                // The blocking task cannot be cancelled; its result is dropped
                tracing::warn!(timeout_secs, "Sorting exceeded request deadline");
                Err(ApiError::Timeout(timeout_secs))
            }
        }
    }
}
