//! Expense repository - persistence boundary for expense records.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::expense;
use super::error::StorageResult;
use crate::domain::Expense;

impl From<expense::Model> for Expense {
    fn from(model: expense::Model) -> Self {
        Self {
            id: model.id,
            wallet_id: model.wallet_id,
            name: model.name,
            amount: model.amount,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Expense repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// All expenses, ordered by identifier
    async fn find_all(&self) -> StorageResult<Vec<Expense>>;

    /// Single expense by primary key
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Expense>>;

    /// Persist a new expense against the given wallet
    async fn create(&self, wallet_id: i32, name: String, amount: Decimal)
        -> StorageResult<Expense>;
}

/// SeaORM-backed implementation of `ExpenseRepository`.
pub struct ExpenseStore {
    db: DatabaseConnection,
}

impl ExpenseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExpenseRepository for ExpenseStore {
    async fn find_all(&self) -> StorageResult<Vec<Expense>> {
        let expenses = expense::Entity::find()
            .order_by_asc(expense::Column::Id)
            .all(&self.db)
            .await?;
        Ok(expenses.into_iter().map(Expense::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Expense>> {
        let found = expense::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Expense::from))
    }

    async fn create(
        &self,
        wallet_id: i32,
        name: String,
        amount: Decimal,
    ) -> StorageResult<Expense> {
        let now = Utc::now();
        let record = expense::ActiveModel {
            wallet_id: Set(wallet_id),
            name: Set(name),
            amount: Set(amount),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let created = record.insert(&self.db).await?;
        Ok(created.into())
    }
}
