//! Wallet service - validation, orchestration and error classification for
//! wallet operations.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use super::{classify_storage_error, missing_fields};
use crate::domain::{CreateWallet, NewWallet, Wallet};
use crate::errors::{AppError, AppResult};
use crate::infra::WalletRepository;

/// Wallet service trait for dependency injection.
#[async_trait]
pub trait WalletService: Send + Sync {
    /// All wallets, ordered by identifier
    async fn list_wallets(&self) -> AppResult<Vec<Wallet>>;

    /// Single wallet looked up by its raw path identifier
    async fn get_wallet(&self, id: &str) -> AppResult<Wallet>;

    /// Validate and persist a new wallet
    async fn create_wallet(&self, input: CreateWallet) -> AppResult<Wallet>;
}

/// Concrete implementation of `WalletService`.
pub struct WalletManager {
    repo: Arc<dyn WalletRepository>,
}

impl WalletManager {
    pub fn new(repo: Arc<dyn WalletRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl WalletService for WalletManager {
    async fn list_wallets(&self) -> AppResult<Vec<Wallet>> {
        self.repo.find_all().await.map_err(classify_storage_error)
    }

    async fn get_wallet(&self, id: &str) -> AppResult<Wallet> {
        let id: i32 = id
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input("Wallet ID must be a number"))?;

        self.repo
            .find_by_id(id)
            .await
            .map_err(classify_storage_error)?
            .ok_or_else(|| AppError::not_found(format!("Wallet with id {id} not found")))
    }

    async fn create_wallet(&self, input: CreateWallet) -> AppResult<Wallet> {
        let missing = missing_fields(&[
            ("user_id", input.user_id.is_some()),
            ("name", input.name.as_deref().is_some_and(|v| !v.is_empty())),
        ]);
        if !missing.is_empty() {
            return Err(AppError::validation("Missing required fields", missing));
        }

        let new_wallet = NewWallet {
            user_id: input.user_id.unwrap_or_default(),
            name: input.name.unwrap_or_default(),
            description: input.description,
            icon: input.icon,
        };
        new_wallet
            .validate()
            .map_err(|errors| AppError::from_validation_errors("Validation error", &errors))?;

        self.repo
            .create(
                new_wallet.user_id,
                new_wallet.name,
                new_wallet.description,
                new_wallet.icon,
            )
            .await
            .map_err(classify_storage_error)
    }
}
