use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use thiserror::Error;
use serde_json::json;

use super::response::{ApiError, ApiResponse};
use crate::utils::FieldErrors;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// The event service could not be reached or its reply could not be read
    #[error("Event service request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The event service answered with a non-success status
    #[error("Event service responded with {status}: {message}")]
    UpstreamError { status: u16, message: String },

    #[error("Validation error: {0}")]
    ValidationError(FieldErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error codes for API responses
#[derive(Debug)]
pub enum ErrorCode {
    TransportError,
    UpstreamError,
    ValidationError,
    NotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::TransportError => "TRANSPORT_ERROR",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::TransportError(_) => ErrorCode::TransportError,
            AppError::UpstreamError { .. } => ErrorCode::UpstreamError,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::TransportError(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message to show a visitor. Server-reported messages pass through,
    /// everything else collapses to `generic`.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            AppError::UpstreamError { message, .. } => message.clone(),
            AppError::ValidationError(errors) => errors.to_string(),
            _ => generic.to_string(),
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        let error_code = self.error_code().as_str();
        let message = self.to_string();

        match self {
            AppError::ValidationError(errors) => {
                ApiError::with_details(
                    message,
                    error_code,
                    json!({ "validation_errors": errors }),
                )
            }
            AppError::UpstreamError { status, .. } => {
                ApiError::with_details(message, error_code, json!({ "upstream_status": status }))
            }
            _ => ApiError::new(message, error_code),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ValidationError(_) | AppError::NotFound(_) => {
                tracing::warn!("Request rejected: {}", self)
            }
            _ => tracing::error!("Application error: {:?}", self),
        }

        let status = self.status_code();
        let body = ApiResponse::<()>::Error(self.to_api_error());
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
