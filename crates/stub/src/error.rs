//! Error types for the stub Food service.
//!
//! Every error is rendered as a JSON `{"msg": ...}` body with the status code
//! the real service answers with:
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | BadRequest | 400 |
//! | DeleteFailed | 400 |
//! | Unauthorized | 401 |
//! | NotFound | 404 |
//! | Internal | 500 |

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::models::ApiMessage;

/// Errors raised by the storage layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No food exists with the given id.
    #[error("food not found: {id}")]
    NotFound { id: String },

    /// The stored document could not be handled.
    #[error("storage failure: {message}")]
    Backend { message: String },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// The error type returned by request handlers.
#[derive(Error, Debug)]
pub enum StubError {
    /// Validation failed (HTTP 400).
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Delete of an unknown food (HTTP 400).
    #[error("unable to delete food {id}")]
    DeleteFailed { id: String },

    /// Missing or unknown credentials (HTTP 401).
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Food not found (HTTP 404).
    #[error("food not found: {id}")]
    NotFound { id: String },

    /// Internal server error (HTTP 500).
    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Result type for request handlers.
pub type StubResult<T> = Result<T, StubError>;

impl StubError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StubError::BadRequest { .. } | StubError::DeleteFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            StubError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            StubError::NotFound { .. } => StatusCode::NOT_FOUND,
            StubError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the client.
    pub fn client_message(&self) -> String {
        match self {
            StubError::BadRequest { message } => message.clone(),
            StubError::DeleteFailed { .. } => "Unable to delete this food revue!".to_string(),
            StubError::Unauthorized { message } => message.clone(),
            StubError::NotFound { id } => format!("No food revues with id {}", id),
            StubError::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

impl From<StorageError> for StubError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => StubError::NotFound { id },
            StorageError::Backend { message } => StubError::Internal { message },
        }
    }
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(error = %self, "Request failed");
        }
        let body = ApiMessage::new(self.client_message());
        (status, Json(body)).into_response()
    }
}
