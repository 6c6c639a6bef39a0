//! User repository - persistence boundary for user records.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::user;
use super::error::StorageResult;
use crate::domain::User;

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            username: model.username,
            email: model.email,
            password_hash: model.password,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by identifier
    async fn find_all(&self) -> StorageResult<Vec<User>>;

    /// Single user by primary key
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<User>>;

    /// Persist a new user; the password must already be hashed
    async fn create(
        &self,
        name: String,
        username: String,
        email: String,
        password_hash: String,
    ) -> StorageResult<User>;
}

/// SeaORM-backed implementation of `UserRepository`.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> StorageResult<Vec<User>> {
        let users = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<User>> {
        let found = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(User::from))
    }

    async fn create(
        &self,
        name: String,
        username: String,
        email: String,
        password_hash: String,
    ) -> StorageResult<User> {
        let now = Utc::now();
        let record = user::ActiveModel {
            name: Set(name),
            username: Set(username),
            email: Set(email),
            password: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let created = record.insert(&self.db).await?;
        Ok(created.into())
    }
}
