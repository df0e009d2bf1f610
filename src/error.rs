use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LedgerError {
    #[error("invalid or missing token")]
    Unauthorized,

    #[error("insufficient funds for account {0}")]
    InsufficientFunds(i64),

    #[error("account {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            LedgerError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: self.to_string(),
                },
            ),
            LedgerError::InsufficientFunds(_) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INSUFFICIENT_FUNDS".to_string(),
                    message: self.to_string(),
                },
            ),
            LedgerError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: self.to_string(),
                },
            ),
            LedgerError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
