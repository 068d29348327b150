use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use depsearch_core::CoreError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing or empty input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to encode response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Core(ref err) => match err {
                CoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
                CoreError::Upstream { .. }
                | CoreError::Status { .. }
                | CoreError::Decode { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
                CoreError::InsecureUrl(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
                }
            },
            ApiError::Serialization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;
