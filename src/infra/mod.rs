//! Infrastructure layer - External systems integration
//!
//! Database connection management, schema migrations and the repository
//! implementations backing the service layer.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    ExpenseRepository, ExpenseStore, StorageError, StorageResult, UserRepository, UserStore,
    WalletRepository, WalletStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockExpenseRepository, MockUserRepository, MockWalletRepository};
