//! Error types for the chroma-sort public API.

use thiserror::Error;

/// Invalid selection parameters (sort strategy, category, counts).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("missing required parameter: {0}")]
    Missing(&'static str),

    #[error("unknown sorting method: {0:?} (expected \"spectrum\" or \"top_n\")")]
    UnknownStrategy(String),

    #[error("unknown color category: {0:?}")]
    UnknownCategory(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be positive")]
    NotPositive { name: &'static str },
}

/// Failure to compute a representative color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Every sampled pixel was pure black, so there is nothing to average.
    #[error("image contains only black (0,0,0) pixels")]
    EmptyImage,

    #[error("image has zero width or height")]
    ZeroSized,
}

/// Failure while running a batch through the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to extract color from {name}: {source}")]
    Extract {
        name: String,
        #[source]
        source: ExtractError,
    },

    #[error("failed to encode thumbnail for {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),
}
