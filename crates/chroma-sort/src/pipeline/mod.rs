//! Batch pipeline: decode, classify, sort, render thumbnails.
//!
//! ```text
//! ImageInput (encoded bytes)
//!     |  rayon par_iter, one independent task per image
//!     v
//! decode -> ColorExtractor -> ClassifiedImage
//!     |
//!     v  collect (barrier)
//! SortStrategy::apply        (spectrum buckets or top-N)
//!     |
//!     v
//! render_thumbnail           (size x size, alpha flattened, JPEG)
//! ```

mod batch_pipeline;
mod options;
mod thumbnail;

pub use batch_pipeline::{BatchPipeline, ImageInput, SkippedImage, SortedBatch, Thumbnail};
pub use options::{FailurePolicy, PipelineOptions, RenderOptions, DEFAULT_JPEG_QUALITY};
pub use thumbnail::{render_thumbnail, thumbnail_id};
