//! Error handling for the gateway's REST surface.
//!
//! Handlers and resource methods return [`ApiError`], which maps onto the
//! HTTP status codes the clients of this API expect. Internal detail (driver
//! errors, SQL state) is logged through `tracing` and never serialized into
//! a response body; clients only ever see a sanitized `{"error": ...}`
//! object.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use std::fmt;

/// Error type for the REST layer with sanitized responses.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found - the requested record does not exist
    NotFound {
        /// Resource type (e.g. "car")
        resource: String,
        /// Identifier that was not found, when known
        id: Option<i64>,
    },

    /// 400 Bad Request - the payload violates the resource's id contract
    BadRequest {
        /// User-facing error message
        message: String,
    },

    /// 409 Conflict - a uniqueness constraint was violated
    Conflict {
        /// User-facing error message
        message: String,
    },

    /// 500 Internal Server Error - database failure (details logged, not exposed)
    Database {
        /// User-facing generic message
        message: String,
        /// Internal error (logged, never sent to the client)
        internal: DbErr,
    },

    /// 500 Internal Server Error - anything else that went wrong server-side
    Internal {
        /// User-facing generic message
        message: String,
        /// Internal detail (logged, never sent to the client)
        internal: Option<String>,
    },
}

impl ApiError {
    /// Create a 404 Not Found error.
    pub fn not_found(resource: impl Into<String>, id: Option<i64>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Create a 400 Bad Request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a 409 Conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a 500 error from a database failure. The `DbErr` is logged but
    /// never serialized to the client.
    pub fn database(err: DbErr) -> Self {
        Self::Database {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    /// Create a generic 500 error with optional internal detail.
    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            internal,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => {
                if let Some(id) = id {
                    format!("{resource} with id '{id}' not found")
                } else {
                    format!("{resource} not found")
                }
            }
            Self::BadRequest { message }
            | Self::Conflict { message }
            | Self::Database { message, .. }
            | Self::Internal { message, .. } => message.clone(),
        }
    }

    /// Log internal error details. Sent to `tracing`, not to the client.
    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::Internal {
                internal: Some(details),
                ..
            } => {
                tracing::error!(details = %details, "Internal error occurred");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

/// Error body sent to clients (sanitized).
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// Conversion rules:
/// - a unique constraint violation becomes 409 Conflict
/// - `DbErr::RecordNotFound` becomes 404 Not Found
/// - every other `DbErr` becomes a sanitized 500
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return Self::Conflict {
                message: "Duplicate entry".to_string(),
            };
        }
        match &err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("Resource");
                Self::NotFound {
                    resource: resource.to_string(),
                    id: None,
                }
            }
            _ => Self::Database {
                message: "A database error occurred".to_string(),
                internal: err,
            },
        }
    }
}
