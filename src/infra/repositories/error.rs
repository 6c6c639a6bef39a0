//! Storage-boundary error shapes.
//!
//! Repositories surface failures in these terms; only the service layer
//! turns them into the API-facing taxonomy.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Columns that participate in unique or foreign-key constraints, used to
/// recover the offending field from a database error message such as
/// `duplicate key value violates unique constraint "users_username_key"`.
const CONSTRAINT_COLUMNS: &[&str] = &["username", "email", "user_id", "wallet_id"];

/// Classified storage failure
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unique constraint violated on {field}")]
    UniqueViolation { field: String },

    #[error("foreign key constraint violated on {field}")]
    ForeignKeyViolation { field: String },

    #[error("database connection failed: {0}")]
    Connection(String),

    #[error(transparent)]
    Other(DbErr),
}

/// Result type alias for repository operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => StorageError::UniqueViolation {
                field: constraint_field(&message),
            },
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                StorageError::ForeignKeyViolation {
                    field: constraint_field(&message),
                }
            }
            _ => match err {
                DbErr::Conn(cause) => StorageError::Connection(cause.to_string()),
                DbErr::ConnectionAcquire(cause) => StorageError::Connection(cause.to_string()),
                other => StorageError::Other(other),
            },
        }
    }
}

/// Best-effort extraction of the violated column from a constraint message.
fn constraint_field(message: &str) -> String {
    CONSTRAINT_COLUMNS
        .iter()
        .find(|column| message.contains(**column))
        .map(|column| (*column).to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_column_from_postgres_constraint_names() {
        assert_eq!(
            constraint_field(r#"duplicate key value violates unique constraint "users_username_key""#),
            "username"
        );
        assert_eq!(
            constraint_field(r#"duplicate key value violates unique constraint "users_email_key""#),
            "email"
        );
        assert_eq!(
            constraint_field(
                r#"insert or update on table "wallets" violates foreign key constraint "fk_wallets_user_id""#
            ),
            "user_id"
        );
    }

    #[test]
    fn unknown_constraints_fall_back() {
        assert_eq!(constraint_field("something else entirely"), "unknown");
    }
}
