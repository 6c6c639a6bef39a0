//! User service - validation, orchestration and error classification for
//! user operations.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use super::{classify_storage_error, missing_fields};
use crate::domain::{CreateUser, NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// All users, ordered by identifier
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Single user looked up by its raw path identifier
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Validate, hash and persist a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of `UserService`.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await.map_err(classify_storage_error)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        // Reject malformed identifiers before touching storage
        let id: i32 = id
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input("User ID must be a number"))?;

        self.repo
            .find_by_id(id)
            .await
            .map_err(classify_storage_error)?
            .ok_or_else(|| AppError::not_found(format!("User with id {id} not found")))
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        // Report every absent field, not just the first
        let missing = missing_fields(&[
            ("name", input.name.as_deref().is_some_and(|v| !v.is_empty())),
            (
                "username",
                input.username.as_deref().is_some_and(|v| !v.is_empty()),
            ),
            (
                "email",
                input.email.as_deref().is_some_and(|v| !v.is_empty()),
            ),
            (
                "password",
                input.password.as_deref().is_some_and(|v| !v.is_empty()),
            ),
        ]);
        if !missing.is_empty() {
            return Err(AppError::validation("Missing required fields", missing));
        }

        let new_user = NewUser {
            name: input.name.unwrap_or_default(),
            username: input.username.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            password: input.password.unwrap_or_default(),
        };
        new_user
            .validate()
            .map_err(|errors| AppError::from_validation_errors("Validation error", &errors))?;

        // Hash right before persistence; the raw password goes no further
        let password_hash = Password::new(&new_user.password)?.into_string();
        self.repo
            .create(
                new_user.name,
                new_user.username,
                new_user.email,
                password_hash,
            )
            .await
            .map_err(classify_storage_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::infra::{MockUserRepository, StorageError};

    fn test_user(id: i32) -> User {
        let now = Utc::now();
        User {
            id,
            name: "Ana".to_string(),
            username: "ana01".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hashed".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn valid_input() -> CreateUser {
        CreateUser {
            name: Some("Ana".to_string()),
            username: Some("ana01".to_string()),
            email: Some("ana@example.com".to_string()),
            password: Some("Ana1234!".to_string()),
        }
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn get_user_rejects_empty_id_without_touching_storage() {
        // No expectations set: any repository call would panic
        let service = service(MockUserRepository::new());

        let error = service.get_user("").await.unwrap_err();
        assert_eq!(error.error_type(), "INVALID_INPUT_ERROR");
    }

    #[tokio::test]
    async fn get_user_rejects_non_numeric_id_without_touching_storage() {
        let service = service(MockUserRepository::new());

        let error = service.get_user("abc").await.unwrap_err();
        assert_eq!(error.error_type(), "INVALID_INPUT_ERROR");
    }

    #[tokio::test]
    async fn get_user_echoes_unknown_id_in_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let error = service(repo).get_user("42").await.unwrap_err();
        assert_eq!(error.error_type(), "RESOURCE_NOT_FOUND_ERROR");
        assert!(error.to_string().contains("42"));
    }

    #[tokio::test]
    async fn get_user_returns_the_matching_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(test_user(id))));

        let user = service(repo).get_user("7").await.unwrap();
        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn create_user_lists_every_missing_field() {
        let service = service(MockUserRepository::new());

        let input = CreateUser {
            name: Some("Ana".to_string()),
            ..CreateUser::default()
        };
        let error = service.create_user(input).await.unwrap_err();

        assert_eq!(error.error_type(), "VALIDATION_ERROR");
        let fields: Vec<&str> = error
            .field_errors()
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, vec!["username", "email", "password"]);
    }

    #[tokio::test]
    async fn create_user_treats_empty_strings_as_missing() {
        let service = service(MockUserRepository::new());

        let error = service.create_user(CreateUser::default()).await.unwrap_err();
        assert_eq!(error.field_errors().len(), 4);
        assert_eq!(error.field_errors()[0].field, "name");
        assert_eq!(error.field_errors()[0].message, "name is required");
    }

    #[tokio::test]
    async fn create_user_collects_every_format_violation() {
        let service = service(MockUserRepository::new());

        let input = CreateUser {
            name: Some("A1".to_string()),
            username: Some("abc".to_string()),
            email: Some("not-an-email".to_string()),
            password: Some("Ana1234!".to_string()),
        };
        let error = service.create_user(input).await.unwrap_err();

        assert_eq!(error.error_type(), "VALIDATION_ERROR");
        let fields: Vec<&str> = error
            .field_errors()
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, vec!["email", "name", "username"]);
    }

    #[tokio::test]
    async fn create_user_hashes_the_password_before_persistence() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|_, _, _, password_hash| {
                password_hash.as_str() != "Ana1234!"
                    && Password::from_hash(password_hash.clone()).verify("Ana1234!")
            })
            .returning(|name, username, email, password_hash| {
                let now = Utc::now();
                Ok(User {
                    id: 1,
                    name,
                    username,
                    email,
                    password_hash,
                    created_at: now,
                    updated_at: now,
                })
            });

        let user = service(repo).create_user(valid_input()).await.unwrap();
        assert_eq!(user.username, "ana01");
    }

    #[tokio::test]
    async fn create_user_maps_unique_violations_to_validation() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().returning(|_, _, _, _| {
            Err(StorageError::UniqueViolation {
                field: "username".to_string(),
            })
        });

        let error = service(repo).create_user(valid_input()).await.unwrap_err();
        assert_eq!(error.error_type(), "VALIDATION_ERROR");
        assert_eq!(error.field_errors()[0].field, "username");
    }

    #[tokio::test]
    async fn list_users_maps_connection_failures_to_database_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Err(StorageError::Connection("refused".to_string())));

        let error = service(repo).list_users().await.unwrap_err();
        assert_eq!(error.error_type(), "DATABASE_ERROR");
    }
}
