//! Options for [`ColorExtractor`](super::ColorExtractor).

use image::imageops::FilterType;

/// Side length of the square grid images are sampled down to.
pub const DEFAULT_SAMPLE_SIZE: u32 = 50;

/// What to do when every sampled pixel is pure black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlackPixelPolicy {
    /// Fail with [`ExtractError::EmptyImage`](crate::ExtractError::EmptyImage).
    #[default]
    Reject,
    /// Average every pixel, black included. An all-black image then
    /// yields (0,0,0), which classifies as Red.
    IncludeAll,
}

impl std::str::FromStr for BlackPixelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(BlackPixelPolicy::Reject),
            "include_all" | "include-all" => Ok(BlackPixelPolicy::IncludeAll),
            other => Err(format!("unknown black pixel policy: {other}")),
        }
    }
}

/// Extraction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    /// Images are resized to `sample_size` x `sample_size` before averaging.
    pub sample_size: u32,
    /// Resampling filter used for the downsample.
    pub filter: FilterType,
    pub black_pixels: BlackPixelPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            filter: FilterType::CatmullRom,
            black_pixels: BlackPixelPolicy::default(),
        }
    }
}

impl ExtractOptions {
    pub fn with_black_pixels(mut self, policy: BlackPixelPolicy) -> Self {
        self.black_pixels = policy;
        self
    }

    pub fn with_sample_size(mut self, size: u32) -> Self {
        self.sample_size = size.max(1);
        self
    }
}
