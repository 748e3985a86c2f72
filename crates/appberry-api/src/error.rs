//! Error types for the HTTP routes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errors a route can return.
///
/// Each variant maps to a fixed status code. Bodies are JSON objects of the
/// form `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed validation.
    #[error("invalid request body: {0}")]
    Validation(String),

    /// A SQLite call failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Anything else that should not happen (join failure, poisoned lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Server-side failures are logged in full and reported generically.
        let message = match &self {
            Self::Validation(detail) => {
                warn!(%detail, "rejected request body");
                detail.clone()
            }
            Self::Database(_) | Self::Internal(_) => {
                error!(error = %self, "request failed");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
