pub mod config;
pub mod selection;

pub use config::{
    AppConfig, DefaultsConfig, ExtractionConfig, LimitsConfig, StoreConfig, ThumbnailConfig,
    UploadsConfig,
};
pub use selection::{strategy_from_fields, Layout, Selection};
