//! Application services layer - Business rules and error classification.
//!
//! Services validate input, orchestrate repository calls and are the
//! single place where storage-boundary failures are turned into the
//! API-facing error taxonomy. Handlers never see a raw storage error.

pub mod container;
mod expense_service;
mod user_service;
mod wallet_service;

pub use container::Services;
pub use expense_service::{ExpenseLedger, ExpenseService};
pub use user_service::{UserManager, UserService};
pub use wallet_service::{WalletManager, WalletService};

use crate::errors::{AppError, FieldError};
use crate::infra::StorageError;

/// Translate a storage-boundary failure into the domain taxonomy.
///
/// Constraint breaches become field-level validation errors; connectivity
/// failures and anything unexpected stay generic.
pub(crate) fn classify_storage_error(err: StorageError) -> AppError {
    match err {
        StorageError::UniqueViolation { field } => {
            let message = format!("{field} already exists");
            AppError::validation("Duplicate entry", vec![FieldError::new(field, message)])
        }
        StorageError::ForeignKeyViolation { field } => {
            let message = format!("{field} does not reference an existing record");
            AppError::validation("Validation error", vec![FieldError::new(field, message)])
        }
        StorageError::Connection(cause) => AppError::Database(cause),
        StorageError::Other(err) => AppError::internal(err.to_string()),
    }
}

/// Collect `{field} is required` errors for every absent input, preserving
/// the given field order.
pub(crate) fn missing_fields(fields: &[(&str, bool)]) -> Vec<FieldError> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| FieldError::new(*field, format!("{field} is required")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_becomes_a_field_error() {
        let error = classify_storage_error(StorageError::UniqueViolation {
            field: "email".to_string(),
        });
        assert_eq!(error.error_type(), "VALIDATION_ERROR");
        assert_eq!(error.field_errors()[0].field, "email");
    }

    #[test]
    fn connection_failure_becomes_database_error() {
        let error = classify_storage_error(StorageError::Connection("refused".to_string()));
        assert_eq!(error.error_type(), "DATABASE_ERROR");
    }

    #[test]
    fn missing_fields_keeps_declaration_order() {
        let errors = missing_fields(&[("name", false), ("username", true), ("email", false)]);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email"]);
    }
}
