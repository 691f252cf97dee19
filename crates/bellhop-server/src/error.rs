//! Error types for the experiment API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use bellhop_hal::HalError;
use bellhop_ir::IrError;
use bellhop_render::RenderError;

/// API error type that converts to HTTP responses.
///
/// Every variant serializes to the same single-field JSON body:
/// `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BackendError(_) => StatusCode::BAD_GATEWAY,
            ApiError::RenderError(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<IrError> for ApiError {
    fn from(e: IrError) -> Self {
        match e {
            // Only invalid user input reaches here; structural errors in
            // catalog circuits would be a bug, not a client mistake.
            IrError::UnknownBellState(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<HalError> for ApiError {
    fn from(e: HalError) -> Self {
        ApiError::BackendError(e.to_string())
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::RenderError(e.to_string())
    }
}
