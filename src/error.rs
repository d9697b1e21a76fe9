use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

use crate::schemas::ErrorResponse;

/// Failure taxonomy for the whole API surface.
///
/// Repositories return raw `DbErr`; services are responsible for turning
/// not-found conditions into `NotFound` and duplicates into `Conflict`.
/// The final status-code mapping happens once, in `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad or missing input.
    #[error("{0}")]
    Validation(String),
    /// Unknown id, username, city or category name.
    #[error("{0}")]
    NotFound(String),
    /// Duplicate value for a unique field.
    #[error("{0}")]
    Conflict(String),
    /// Store unreachable or any other unexpected failure.
    #[error("internal error: {0}")]
    Internal(#[from] DbErr),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Conflicts surface as 400, not 409
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {}", self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
