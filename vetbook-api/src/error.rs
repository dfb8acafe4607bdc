//! Error Types for the VETBOOK API
//!
//! Every failing endpoint answers with `{ "error": string }` and a status
//! code derived from the error category. Storage failures log the detail
//! server-side and keep the wire body generic.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use vetbook_core::{StorageError, VetbookError};

/// Error categories for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request contains invalid input data
    InvalidInput,

    /// Requested playbook does not exist
    PlaybookNotFound,

    /// Requested route does not exist
    RouteNotFound,

    /// Storage operation failed
    StorageFailure,

    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::PlaybookNotFound | ErrorCode::RouteNotFound => StatusCode::NOT_FOUND,
            ErrorCode::StorageFailure | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Wire shape of an error response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Structured error for API operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a PlaybookNotFound error. The wire message stays generic;
    /// the id only goes to the log.
    pub fn playbook_not_found(id: &str) -> Self {
        tracing::debug!(%id, "playbook not found");
        Self::new(ErrorCode::PlaybookNotFound, "Playbook not found")
    }

    /// Create a StorageFailure error with a generic wire message.
    pub fn storage_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageFailure, message)
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<VetbookError> for ApiError {
    fn from(err: VetbookError) -> Self {
        match err {
            VetbookError::Storage(StorageError::NotFound { id }) => {
                Self::playbook_not_found(&id)
            }
            VetbookError::Storage(err) => {
                tracing::error!(error = %err, "storage operation failed");
                Self::storage_failure("Storage operation failed")
            }
            VetbookError::Validation(err) => Self::invalid_input(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ErrorCode::PlaybookNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::RouteNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::StorageFailure.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::InvalidInput.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Playbook not found".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Playbook not found"}"#);
    }

    #[test]
    fn test_not_found_storage_error_maps_to_404() {
        let err: ApiError = VetbookError::Storage(StorageError::NotFound {
            id: "x".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_storage_errors_keep_generic_message() {
        let err: ApiError = VetbookError::Storage(StorageError::Io {
            key: "playbooks/x.json".to_string(),
            reason: "disk on fire".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Storage operation failed");
    }
}
