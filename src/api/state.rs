//! Application state - Dependency injection container.
//!
//! Explicitly constructed and passed to the router instead of living in
//! module-level singletons.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ExpenseService, Services, UserService, WalletService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Wallet service
    pub wallet_service: Arc<dyn WalletService>,
    /// Expense service
    pub expense_service: Arc<dyn ExpenseService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Build state from a connected database, wiring the full service graph.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());

        Self {
            user_service: services.users(),
            wallet_service: services.wallets(),
            expense_service: services.expenses(),
            database,
        }
    }

    /// Create state with manually injected services (tests, embedding).
    pub fn new(
        user_service: Arc<dyn UserService>,
        wallet_service: Arc<dyn WalletService>,
        expense_service: Arc<dyn ExpenseService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            wallet_service,
            expense_service,
            database,
        }
    }
}
