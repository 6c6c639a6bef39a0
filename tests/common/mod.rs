//! Shared fixtures for integration tests: in-memory repositories and app
//! state construction without a real database.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use fintrack::domain::{Expense, User, Wallet};
use fintrack::infra::{
    Database, ExpenseRepository, StorageError, StorageResult, UserRepository, WalletRepository,
};
use fintrack::services::{ExpenseLedger, UserManager, WalletManager};
use fintrack::AppState;

/// In-memory user repository enforcing the unique constraints the real
/// database would.
pub struct MemoryUserRepo {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn find_all(&self) -> StorageResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(
        &self,
        name: String,
        username: String,
        email: String,
        password_hash: String,
    ) -> StorageResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == username) {
            return Err(StorageError::UniqueViolation {
                field: "username".to_string(),
            });
        }
        if users.iter().any(|u| u.email == email) {
            return Err(StorageError::UniqueViolation {
                field: "email".to_string(),
            });
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name,
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory wallet repository enforcing the owner foreign key.
pub struct MemoryWalletRepo {
    wallets: Mutex<Vec<Wallet>>,
    valid_user_ids: Vec<i32>,
    next_id: AtomicI32,
}

impl MemoryWalletRepo {
    pub fn with_users(valid_user_ids: Vec<i32>) -> Self {
        Self {
            wallets: Mutex::new(Vec::new()),
            valid_user_ids,
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl WalletRepository for MemoryWalletRepo {
    async fn find_all(&self) -> StorageResult<Vec<Wallet>> {
        Ok(self.wallets.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Wallet>> {
        Ok(self
            .wallets
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn create(
        &self,
        user_id: i32,
        name: String,
        description: Option<String>,
        icon: Option<String>,
    ) -> StorageResult<Wallet> {
        if !self.valid_user_ids.contains(&user_id) {
            return Err(StorageError::ForeignKeyViolation {
                field: "user_id".to_string(),
            });
        }

        let now = Utc::now();
        let wallet = Wallet {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id,
            name,
            description,
            icon,
            created_at: now,
            updated_at: now,
        };
        self.wallets.lock().unwrap().push(wallet.clone());
        Ok(wallet)
    }
}

/// In-memory expense repository enforcing the wallet foreign key.
pub struct MemoryExpenseRepo {
    expenses: Mutex<Vec<Expense>>,
    valid_wallet_ids: Vec<i32>,
    next_id: AtomicI32,
}

impl MemoryExpenseRepo {
    pub fn with_wallets(valid_wallet_ids: Vec<i32>) -> Self {
        Self {
            expenses: Mutex::new(Vec::new()),
            valid_wallet_ids,
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl ExpenseRepository for MemoryExpenseRepo {
    async fn find_all(&self) -> StorageResult<Vec<Expense>> {
        Ok(self.expenses.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Expense>> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create(
        &self,
        wallet_id: i32,
        name: String,
        amount: Decimal,
    ) -> StorageResult<Expense> {
        if !self.valid_wallet_ids.contains(&wallet_id) {
            return Err(StorageError::ForeignKeyViolation {
                field: "wallet_id".to_string(),
            });
        }

        let now = Utc::now();
        let expense = Expense {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            wallet_id,
            name,
            amount,
            created_at: now,
            updated_at: now,
        };
        self.expenses.lock().unwrap().push(expense.clone());
        Ok(expense)
    }
}

/// Build app state over in-memory repositories. The database handle wraps a
/// SeaORM mock connection with a few queued exec results for the health
/// probe.
pub fn app_state(
    users: Arc<MemoryUserRepo>,
    wallets: Arc<MemoryWalletRepo>,
    expenses: Arc<MemoryExpenseRepo>,
) -> AppState {
    let exec_results: Vec<MockExecResult> = (0..8)
        .map(|_| MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        })
        .collect();
    let connection = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(exec_results)
        .into_connection();

    AppState::new(
        Arc::new(UserManager::new(users)),
        Arc::new(WalletManager::new(wallets)),
        Arc::new(ExpenseLedger::new(expenses)),
        Arc::new(Database::from_connection(connection)),
    )
}

/// Default state: empty user store, one known user (id 1) for wallets and
/// one known wallet (id 1) for expenses.
pub fn default_state() -> AppState {
    app_state(
        Arc::new(MemoryUserRepo::new()),
        Arc::new(MemoryWalletRepo::with_users(vec![1])),
        Arc::new(MemoryExpenseRepo::with_wallets(vec![1])),
    )
}
