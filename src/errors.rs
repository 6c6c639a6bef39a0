//! Centralized error handling.
//!
//! Provides the domain error taxonomy for the entire application,
//! with automatic HTTP response conversion. The service layer is the
//! only producer of these errors from storage failures; handlers just
//! bubble them up with `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// One invalid input field, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field
    #[schema(example = "username")]
    pub field: String,
    /// What is wrong with it
    #[schema(example = "username already exists")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error taxonomy
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed identifier or request shape
    #[error("{0}")]
    InvalidInput(String),

    /// No record matches the requested identifier
    #[error("{0}")]
    NotFound(String),

    /// Missing or malformed fields, or a uniqueness conflict; carries one
    /// entry per underlying violation
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Database connectivity failure
    #[error("Database connection error: {0}")]
    Database(String),

    /// Catch-all for unexpected failures
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    #[serde(rename = "type")]
    error_type: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl AppError {
    /// Stable machine-readable error type for clients
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT_ERROR",
            AppError::NotFound(_) => "RESOURCE_NOT_FOUND_ERROR",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "SERVER_ERROR",
        }
    }

    /// HTTP status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field-level details carried by the error, if any
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AppError::Validation { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(cause) => {
                tracing::error!("database error: {cause}");
                "Unable to connect to the database".to_string()
            }
            AppError::Internal(cause) => {
                tracing::error!("internal error: {cause}");
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_type = self.error_type();
        let message = self.user_message();
        let errors = match self {
            AppError::Validation { errors, .. } => errors,
            _ => Vec::new(),
        };

        let body = ErrorResponse {
            status: "error",
            error_type,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        AppError::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Collect every violation from a `validator` run into field errors,
    /// ordered by field name so responses are deterministic.
    pub fn from_validation_errors(message: impl Into<String>, errors: &ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, violations)| {
                violations.iter().map(move |violation| {
                    let detail = violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    FieldError::new(*field, detail)
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));

        AppError::Validation {
            message: message.into(),
            errors: fields,
        }
    }
}
