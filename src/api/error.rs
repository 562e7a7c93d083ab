//! Error-to-response mapping for the HTTP layer
//!
//! One fixed lookup table instead of per-handler status juggling. Validation
//! failures keep the legacy literal-string body; everything else is JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DomainError;

#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                format!("not valid due to validation error: {}", msg),
            )
                .into_response(),
            DomainError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": msg })),
            )
                .into_response(),
            DomainError::Conflict(msg) => (
                StatusCode::CONFLICT,
                Json(json!({ "error": msg })),
            )
                .into_response(),
            DomainError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": msg })),
            )
                .into_response(),
            DomainError::Database(msg) => {
                tracing::error!("database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}
