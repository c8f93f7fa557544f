use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("document encoding error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("store is not connected")]
    StoreUnavailable,

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    InvalidPayload(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_)
            | AppError::Document(_)
            | AppError::StoreUnavailable
            | AppError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Store failures are logged by the caller; clients only get a generic message.
        let message = match &self {
            AppError::Validation(_) | AppError::InvalidPayload(_) => self.to_string(),
            _ => "Internal server error".to_string(),
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}
