use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use blush_db::StorageError;

/// Request-level failures, mapped onto the HTTP contract:
/// 400 bad input, 404 never existed, 410 existed but expired, 500 backend.
/// Every response body is a JSON object with an `error` key.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("blush not found")]
    NotFound,

    #[error("blush has expired")]
    Expired,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => {
                // A single failure reads as a plain string, several as an
                // ordered list, both under the same key.
                let detail = if errors.len() == 1 {
                    json!(errors[0])
                } else {
                    json!(errors)
                };
                (StatusCode::BAD_REQUEST, json!({ "error": detail }))
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Blush not found" }),
            ),
            ApiError::Expired => (
                StatusCode::GONE,
                json!({ "error": "This blush has expired" }),
            ),
            ApiError::Storage(e) => {
                error!("storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            ApiError::Encode(e) => {
                error!("encoding failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            ApiError::Join(e) => {
                error!("spawn_blocking join error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
