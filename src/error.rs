use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::providers::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Upstream provider error: {0}")]
    UpstreamError(#[from] ProviderError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

// An unparsable body degrades to a 500 JSON error, not a protocol-level
// failure; only a parsed body with missing/empty fields is a 400.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::MalformedBody(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            traceback: Option<String>,
        }

        let (status, error_message, traceback) = match self {
            AppError::ValidationError(err) => {
                (StatusCode::BAD_REQUEST, err.to_string(), None)
            }
            AppError::MalformedBody(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg.clone(),
                Some(format!("malformed request body: {}", msg)),
            ),
            AppError::UpstreamError(err) => {
                let message = err.to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                    Some(format!("{:#?}", err)),
                )
            }
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                err.to_string(),
                Some(format!("{:#?}", err)),
            ),
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(format!("{:#?}", err)),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                traceback,
            }),
        )
            .into_response()
    }
}
