//! Application error type shared by the registry, persistence, and HTTP layers.
//!
//! Every variant maps to exactly one HTTP status in [`IntoResponse`]. Errors
//! rendered to clients use a JSON envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::db_error::is_unique_violation_on_code;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Client-facing error description.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller supplied unusable input (e.g. an empty long URL).
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// A generated short code collided with an existing mapping.
    ///
    /// Recovered inside the registry; it should never reach a client.
    #[error("Short code uniqueness violation: {message}")]
    UniquenessConflict { message: String },

    /// The registry ran out of attempts while looking for a free code.
    #[error("Failed to allocate a unique short code after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Any persistence fault other than a short-code collision.
    #[error("Storage failure: {message}")]
    StorageFailure { message: String },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageFailure {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UniquenessConflict { .. }
            | AppError::CapacityExhausted { .. }
            | AppError::StorageFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its client-facing form.
    ///
    /// Storage internals are not echoed back; only the variant and a generic
    /// message leave the process.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::InvalidInput { message, details } => ErrorInfo {
                code: "invalid_input",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::CapacityExhausted { attempts } => ErrorInfo {
                code: "capacity_exhausted",
                message: "Failed to allocate a unique short code".to_string(),
                details: json!({ "attempts": attempts }),
            },
            AppError::UniquenessConflict { .. } | AppError::StorageFailure { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            let message = e
                .as_database_error()
                .map(|db| db.message().to_string())
                .unwrap_or_default();
            return AppError::UniquenessConflict { message };
        }

        AppError::storage(e.to_string())
    }
}
