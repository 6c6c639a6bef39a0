//! Service container - constructs the service graph over one database
//! connection instead of module-level singletons.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{ExpenseLedger, ExpenseService, UserManager, UserService, WalletManager, WalletService};
use crate::infra::{ExpenseStore, UserStore, WalletStore};

/// Holds one instance of every application service.
pub struct Services {
    user_service: Arc<dyn UserService>,
    wallet_service: Arc<dyn WalletService>,
    expense_service: Arc<dyn ExpenseService>,
}

impl Services {
    /// Create a new service container with manually injected services
    pub fn new(
        user_service: Arc<dyn UserService>,
        wallet_service: Arc<dyn WalletService>,
        expense_service: Arc<dyn ExpenseService>,
    ) -> Self {
        Self {
            user_service,
            wallet_service,
            expense_service,
        }
    }

    /// Create a service container from a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let user_service: Arc<dyn UserService> =
            Arc::new(UserManager::new(Arc::new(UserStore::new(db.clone()))));
        let wallet_service: Arc<dyn WalletService> =
            Arc::new(WalletManager::new(Arc::new(WalletStore::new(db.clone()))));
        let expense_service: Arc<dyn ExpenseService> =
            Arc::new(ExpenseLedger::new(Arc::new(ExpenseStore::new(db))));

        Self {
            user_service,
            wallet_service,
            expense_service,
        }
    }

    /// Get the user service
    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    /// Get the wallet service
    pub fn wallets(&self) -> Arc<dyn WalletService> {
        self.wallet_service.clone()
    }

    /// Get the expense service
    pub fn expenses(&self) -> Arc<dyn ExpenseService> {
        self.expense_service.clone()
    }
}
