//! Wallet repository - persistence boundary for wallet records.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::wallet;
use super::error::StorageResult;
use crate::domain::Wallet;

impl From<wallet::Model> for Wallet {
    fn from(model: wallet::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            description: model.description,
            icon: model.icon,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Wallet repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// All wallets, ordered by identifier
    async fn find_all(&self) -> StorageResult<Vec<Wallet>>;

    /// Single wallet by primary key
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Wallet>>;

    /// Persist a new wallet for the given owner
    async fn create(
        &self,
        user_id: i32,
        name: String,
        description: Option<String>,
        icon: Option<String>,
    ) -> StorageResult<Wallet>;
}

/// SeaORM-backed implementation of `WalletRepository`.
pub struct WalletStore {
    db: DatabaseConnection,
}

impl WalletStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WalletRepository for WalletStore {
    async fn find_all(&self) -> StorageResult<Vec<Wallet>> {
        let wallets = wallet::Entity::find()
            .order_by_asc(wallet::Column::Id)
            .all(&self.db)
            .await?;
        Ok(wallets.into_iter().map(Wallet::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Wallet>> {
        let found = wallet::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Wallet::from))
    }

    async fn create(
        &self,
        user_id: i32,
        name: String,
        description: Option<String>,
        icon: Option<String>,
    ) -> StorageResult<Wallet> {
        let now = Utc::now();
        let record = wallet::ActiveModel {
            user_id: Set(user_id),
            name: Set(name),
            description: Set(description),
            icon: Set(icon),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let created = record.insert(&self.db).await?;
        Ok(created.into())
    }
}
