use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use compute::ComputeError;
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::schemas::ErrorResponse;

/// Failures surfaced to API clients.
///
/// Each variant maps to one HTTP status; storage failures are logged and
/// reported without their internal detail.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or out-of-range payload field
    #[error("{0}")]
    Validation(String),

    /// Duplicate name, or delete blocked by dependents
    #[error("{0}")]
    Conflict(String),

    /// The addressed record does not exist
    #[error("{0}")]
    NotFound(String),

    /// A foreign key in the payload does not resolve
    #[error("{0}")]
    Reference(String),

    /// Stored data broke an invariant the schema should have kept
    #[error("{0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Report error: {0}")]
    Compute(#[from] ComputeError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) | ApiError::Reference(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Database(_) | ApiError::Compute(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Reference(_) => "INVALID_REFERENCE",
            ApiError::Internal(_) => "INTERNAL_ERROR",
            ApiError::Database(_) | ApiError::Compute(_) => "DATABASE_ERROR",
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
            success: false,
        };

        (status, Json(body)).into_response()
    }
}
