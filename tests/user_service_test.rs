//! Service-level tests for user creation over an in-memory repository.

mod common;

use std::sync::Arc;

use fintrack::domain::{CreateUser, Password};
use fintrack::services::{UserManager, UserService};

fn input(username: &str, email: &str) -> CreateUser {
    CreateUser {
        name: Some("Ana".to_string()),
        username: Some(username.to_string()),
        email: Some(email.to_string()),
        password: Some("Ana1234!".to_string()),
    }
}

#[tokio::test]
async fn stored_hash_verifies_against_the_raw_password() {
    let repo = Arc::new(common::MemoryUserRepo::new());
    let service = UserManager::new(repo);

    let created = service
        .create_user(input("ana01", "ana@example.com"))
        .await
        .unwrap();

    // The raw password is never stored, but the stored hash matches it
    assert_ne!(created.password_hash, "Ana1234!");
    assert!(Password::from_hash(created.password_hash).verify("Ana1234!"));
}

#[tokio::test]
async fn second_create_with_same_email_fails_and_first_survives() {
    let repo = Arc::new(common::MemoryUserRepo::new());
    let service = UserManager::new(repo);

    let first = service
        .create_user(input("ana01", "ana@example.com"))
        .await
        .unwrap();

    let error = service
        .create_user(input("other", "ana@example.com"))
        .await
        .unwrap_err();
    assert_eq!(error.error_type(), "VALIDATION_ERROR");
    assert_eq!(error.field_errors()[0].field, "email");

    let survivors = service.list_users().await.unwrap();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].id, first.id);
}

#[tokio::test]
async fn lookup_round_trips_through_the_service() {
    let repo = Arc::new(common::MemoryUserRepo::new());
    let service = UserManager::new(repo);

    let created = service
        .create_user(input("ana01", "ana@example.com"))
        .await
        .unwrap();

    let fetched = service.get_user(&created.id.to_string()).await.unwrap();
    assert_eq!(fetched.username, "ana01");
}
