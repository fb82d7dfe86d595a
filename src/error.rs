use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chroma_sort::{ParamError, PipelineError};
use serde_json::json;
use thiserror::Error;

use crate::services::TemplateError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("Malformed form: {0}")]
    Form(String),

    #[error("No images uploaded")]
    NoImages,

    #[error("Not found")]
    NotFound,

    #[error("Too many images: {count} (max {max})")]
    TooManyImages { count: usize, max: usize },

    #[error("Upload too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Request body too large: {0}")]
    BodyTooLarge(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Processing error: {0}")]
    Pipeline(PipelineError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::InvalidParameter(p) => ApiError::InvalidParameter(p),
            other => ApiError::Pipeline(other),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::BodyTooLarge(e.body_text())
        } else {
            ApiError::Multipart(e.body_text())
        }
    }
}

impl From<axum::extract::rejection::FormRejection> for ApiError {
    fn from(e: axum::extract::rejection::FormRejection) -> Self {
        ApiError::Form(e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidParameter(_)
            | ApiError::Multipart(_)
            | ApiError::Form(_)
            | ApiError::NoImages => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::TooManyImages { .. }
            | ApiError::PayloadTooLarge { .. }
            | ApiError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            // Undecodable input under the abort policy is the client's fault
            ApiError::Pipeline(PipelineError::Decode { .. } | PipelineError::Extract { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Pipeline(_) | ApiError::Template(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
