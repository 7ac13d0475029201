//! Application error type and its HTTP mapping.
//!
//! Every failure is turned into a status code and a terse plain-text body at
//! the HTTP boundary. Storage failures are logged here and reported to the
//! caller without internal details.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::validation::FetchFailure;

pub const MSG_INTERNAL_ERROR: &str = "Internal Error, please wait a moment...\n";
pub const MSG_ERROR_400: &str =
    "The request could not be understood by the server due to malformed syntax\n";
pub const MSG_INVALID_URL: &str = "Not a valid url\n";
pub const MSG_NOT_FOUND: &str = "404 page not found\n";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be read or decoded.
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    /// The candidate URL failed the reachability check.
    #[error("URL is not reachable: {url}: {reason}")]
    UnreachableUrl { url: String, reason: FetchFailure },

    /// The identifier decoded but no record exists for it.
    #[error("Short link not found: {id}")]
    NotFound { id: i64 },

    /// The backing store failed to read or write.
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }
    pub fn unreachable(url: impl Into<String>, reason: FetchFailure) -> Self {
        Self::UnreachableUrl {
            url: url.into(),
            reason,
        }
    }
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnreachableUrl { .. } | AppError::Storage { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::MalformedRequest { message } => {
                tracing::debug!("Rejecting malformed request: {}", message);
                MSG_ERROR_400
            }
            AppError::UnreachableUrl { url, reason } => {
                tracing::info!("Refusing to shorten {}: {}", url, reason);
                MSG_INVALID_URL
            }
            AppError::NotFound { id } => {
                tracing::debug!("No short link stored under id {}", id);
                MSG_NOT_FOUND
            }
            AppError::Storage { message } => {
                tracing::error!("Storage failure: {}", message);
                MSG_INTERNAL_ERROR
            }
        };

        (self.status_code(), body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::storage(format!("database error: {}", e))
    }
}
