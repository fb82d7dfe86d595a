use image::imageops::FilterType;

use crate::error::ParamError;
use crate::extract::ExtractOptions;

pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// What happens to an image that cannot be decoded or has no usable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Leave the image out of the batch and report it in
    /// [`SortedBatch::skipped`](super::SortedBatch::skipped).
    #[default]
    Skip,
    /// Fail the whole batch on the first bad image.
    Abort,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(FailurePolicy::Skip),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(format!("unknown failure policy: {other}")),
        }
    }
}

/// Classification settings for a [`BatchPipeline`](super::BatchPipeline).
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub extract: ExtractOptions,
    pub on_failure: FailurePolicy,
}

/// Thumbnail rendering settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Thumbnails are exactly `size` x `size` pixels.
    size: u32,
    /// Color transparent regions are composited onto.
    pub background: [u8; 3],
    pub jpeg_quality: u8,
    pub filter: FilterType,
}

impl RenderOptions {
    /// Options for `size` x `size` thumbnails. `size` must be positive.
    pub fn new(size: u32) -> Result<Self, ParamError> {
        if size == 0 {
            return Err(ParamError::NotPositive { name: "image_size" });
        }
        Ok(Self {
            size,
            background: [255, 255, 255],
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            filter: FilterType::CatmullRom,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
}
