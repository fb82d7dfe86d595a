use crate::assets::AssetLoader;
use chroma_sort::{
    BlackPixelPolicy, ExtractOptions, FailurePolicy, ParamError, PipelineOptions, RenderOptions,
};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Resource limits for a single request
    pub limits: LimitsConfig,

    /// Form defaults
    pub defaults: DefaultsConfig,

    /// Upload filtering
    pub uploads: UploadsConfig,

    /// Dominant color extraction
    pub extraction: ExtractionConfig,

    /// Thumbnail encoding
    pub thumbnail: ThumbnailConfig,

    /// Preview batch retention
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_images: usize,
    pub max_total_bytes: usize,
    pub request_timeout_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_images: 200,
            max_total_bytes: 100 * 1024 * 1024,
            request_timeout_secs: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DefaultsConfig {
    pub images_per_row: u32,
    pub image_size: u32,
    pub top_n: usize,
    /// Upper bound for a requested thumbnail side
    pub max_image_size: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            images_per_row: 5,
            image_size: 100,
            top_n: 10,
            max_image_size: 1024,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UploadsConfig {
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: ["png", "jpg", "jpeg", "gif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExtractionConfig {
    pub sample_size: u32,
    /// `reject` or `include_all`
    pub black_pixels: String,
    /// `skip` or `abort`
    pub on_failure: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sample_size: chroma_sort::extract::DEFAULT_SAMPLE_SIZE,
            black_pixels: "reject".to_string(),
            on_failure: "skip".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub jpeg_quality: u8,
    /// Hex color transparent regions are flattened onto
    pub background: String,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: chroma_sort::pipeline::DEFAULT_JPEG_QUALITY,
            background: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub max_batches: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { max_batches: 32 }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        max_images = config.limits.max_images,
                        max_total_bytes = config.limits.max_total_bytes,
                        extensions = ?config.uploads.allowed_extensions,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Classification settings for the batch pipeline
    ///
    /// Unrecognised policy names are logged and replaced by the defaults.
    pub fn pipeline_options(&self) -> PipelineOptions {
        let black_pixels = self
            .extraction
            .black_pixels
            .parse::<BlackPixelPolicy>()
            .unwrap_or_else(|e| {
                tracing::warn!(%e, "Invalid extraction.black_pixels, using reject");
                BlackPixelPolicy::default()
            });
        let on_failure = self
            .extraction
            .on_failure
            .parse::<FailurePolicy>()
            .unwrap_or_else(|e| {
                tracing::warn!(%e, "Invalid extraction.on_failure, using skip");
                FailurePolicy::default()
            });

        PipelineOptions {
            extract: ExtractOptions::default()
                .with_sample_size(self.extraction.sample_size)
                .with_black_pixels(black_pixels),
            on_failure,
        }
    }

    /// Thumbnail settings for a requested size
    pub fn render_options(&self, size: u32) -> Result<RenderOptions, ParamError> {
        let background = parse_hex_color(&self.thumbnail.background).unwrap_or_else(|| {
            tracing::warn!(
                background = %self.thumbnail.background,
                "Invalid thumbnail.background, using white"
            );
            [255, 255, 255]
        });

        Ok(RenderOptions::new(size)?
            .with_background(background)
            .with_jpeg_quality(self.thumbnail.jpeg_quality))
    }

    /// Whether a filename has one of the allowed extensions (case-insensitive)
    pub fn is_allowed_file(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => self
                .uploads
                .allowed_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

/// Parse `#rrggbb` or `rrggbb`
fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let digits = s.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return None;
    }
    let bytes = hex::decode(digits).ok()?;
    Some([bytes[0], bytes[1], bytes[2]])
}
