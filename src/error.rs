//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure the service can produce is one of the [`AppError`] variants.
//! Catalog and usecase code return these unchanged; the [`IntoResponse`] impl
//! below is the only place an error kind becomes a status code.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::time::Duration;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The catalog did not answer within the usecase budget.
    #[error("catalog lookup timed out after {}ms", .timeout.as_millis())]
    DeadlineExceeded { timeout: Duration },

    /// Network error, non-2xx status, malformed payload or a catalog-reported failure.
    #[error("catalog lookup failed: {message}")]
    UpstreamFailure { message: String },

    /// The catalog itself reported that the identifier does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// The request itself could not be parsed (for example a malformed query string).
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Persisting an audit entry failed. Absorbed by the handler, never sent to clients.
    #[error("audit write failed: {message}")]
    AuditWriteFailure { message: String },
}

impl AppError {
    pub fn deadline_exceeded(timeout: Duration) -> Self {
        Self::DeadlineExceeded { timeout }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn audit_write(message: impl Into<String>) -> Self {
        Self::AuditWriteFailure {
            message: message.into(),
        }
    }

    /// Transport status for this error kind.
    ///
    /// A catalog timeout is reported as `504 Gateway Timeout` rather than a
    /// generic 500 so clients can tell a slow upstream from a broken one.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DeadlineExceeded { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::UpstreamFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::AuditWriteFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::upstream(format!("malformed catalog response: {e}"))
        } else if let Some(status) = e.status() {
            AppError::upstream(format!("catalog responded with status {status}"))
        } else {
            AppError::upstream(e.to_string())
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid_request(rejection.body_text())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            return AppError::audit_write(format!(
                "database rejected insert ({}): {}",
                db.constraint().unwrap_or("no constraint"),
                db.message()
            ));
        }

        AppError::audit_write(e.to_string())
    }
}
