//! Seed command - inserts demo users.
//!
//! Fixture names predate the alphabetic name rule, so rows go in at the
//! repository boundary with hashing applied explicitly rather than through
//! the service pipeline.

use crate::config::Config;
use crate::domain::Password;
use crate::errors::AppResult;
use crate::infra::{Database, StorageError, UserRepository, UserStore};
use crate::services::classify_storage_error;

/// Demo users: (name, username, email, password)
const DEMO_USERS: &[(&str, &str, &str, &str)] = &[
    ("Cumbia González", "Cumbi", "cumbia@test.com", "Cumbia1234!?"),
    ("Sumo Silvetti", "Sumerio", "sumo@test.com", "Sumo1234!?"),
    ("Rodrigo González", "Ro1990", "rodrigo@test.com", "Rodrigo1234!?"),
];

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Seeding demo users...");

    let db = Database::connect(&config).await;
    let repo = UserStore::new(db.get_connection());

    for (name, username, email, password) in DEMO_USERS {
        let password_hash = Password::new(password)?.into_string();
        let result = repo
            .create(
                (*name).to_string(),
                (*username).to_string(),
                (*email).to_string(),
                password_hash,
            )
            .await;

        match result {
            Ok(user) => tracing::info!("created demo user {} (id {})", user.username, user.id),
            Err(StorageError::UniqueViolation { .. }) => {
                tracing::info!("demo user {} already present, skipping", username);
            }
            Err(err) => return Err(classify_storage_error(err)),
        }
    }

    tracing::info!("Seeding finished");
    Ok(())
}
