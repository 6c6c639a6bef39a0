//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod error;
mod expense_repository;
mod user_repository;
mod wallet_repository;

pub use error::{StorageError, StorageResult};
pub use expense_repository::{ExpenseRepository, ExpenseStore};
pub use user_repository::{UserRepository, UserStore};
pub use wallet_repository::{WalletRepository, WalletStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use expense_repository::MockExpenseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use wallet_repository::MockWalletRepository;
