use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The completion provider was unreachable or answered with a failure.
    #[error("Completion API error: {0}")]
    CompletionApi(String),

    /// The completion text could not be turned into a dashboard payload.
    #[error("Response parse error: {0}")]
    ResponseParse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::CompletionApi(ref e) => {
                tracing::error!("Completion API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Completion service error")
            }
            AppError::ResponseParse(ref e) => {
                tracing::error!("Response parse error: {}", e);
                (StatusCode::BAD_GATEWAY, "Completion service returned invalid data")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
