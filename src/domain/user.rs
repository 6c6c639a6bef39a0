//! User domain entity and creation inputs.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::PASSWORD_SPECIAL_CHARS;

/// Letters only, no spaces or digits
pub(crate) static ALPHABETIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    /// Salted one-way hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation payload as received from the API.
///
/// Every field is optional so the service can report all missing fields
/// at once instead of failing on the first.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Display name (2-20 letters)
    #[schema(example = "Ana")]
    pub name: Option<String>,
    /// Unique handle (4-20 characters)
    #[schema(example = "ana01")]
    pub username: Option<String>,
    /// Unique email address
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
    /// Raw password (8-20 characters, must mix letters, digits and symbols)
    #[schema(example = "Ana1234!")]
    pub password: Option<String>,
}

/// Fully-present user input, checked before hashing and persistence.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(
        length(min = 2, max = 20, message = "name must be between 2 and 20 characters"),
        custom(function = "validate_alphabetic")
    )]
    pub name: String,

    #[validate(length(
        min = 4,
        max = 20,
        message = "username must be between 4 and 20 characters"
    ))]
    pub username: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(
        length(
            min = 8,
            max = 20,
            message = "password must be between 8 and 20 characters"
        ),
        custom(function = "validate_password_complexity")
    )]
    pub password: String,
}

/// Custom validator for letters-only fields
pub(crate) fn validate_alphabetic(value: &str) -> Result<(), ValidationError> {
    if ALPHABETIC_RE.is_match(value) {
        return Ok(());
    }
    let mut error = ValidationError::new("alphabetic");
    error.message = Some("name must contain only letters".into());
    Err(error)
}

/// Custom validator for the password complexity rule
fn validate_password_complexity(password: &str) -> Result<(), ValidationError> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if has_letter && has_digit && has_special {
        return Ok(());
    }
    let mut error = ValidationError::new("password_complexity");
    error.message =
        Some("password must contain a letter, a digit and a special character".into());
    Err(error)
}

/// User response (safe to return to clients)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[schema(example = "Ana")]
    pub name: String,
    /// Unique handle
    #[schema(example = "ana01")]
    pub username: String,
    /// Email address
    #[schema(example = "ana@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn valid_input() -> NewUser {
        NewUser {
            name: "Ana".to_string(),
            username: "ana01".to_string(),
            email: "ana@example.com".to_string(),
            password: "Ana1234!".to_string(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn name_with_digits_is_rejected() {
        let mut input = valid_input();
        input.name = "Ana1".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn password_without_special_character_is_rejected() {
        let mut input = valid_input();
        input.password = "Abcdef123".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn every_violated_field_is_reported() {
        let input = NewUser {
            name: "A1".to_string(),
            username: "abc".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let errors = input.validate().unwrap_err();
        let error = AppError::from_validation_errors("Validation error", &errors);

        let mut fields: Vec<&str> = error
            .field_errors()
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        fields.dedup();
        assert_eq!(fields, vec!["email", "name", "password", "username"]);
    }
}
