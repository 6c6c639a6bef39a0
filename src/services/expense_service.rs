//! Expense service - validation, orchestration and error classification for
//! expense operations.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use super::{classify_storage_error, missing_fields};
use crate::domain::{CreateExpense, Expense, NewExpense};
use crate::errors::{AppError, AppResult};
use crate::infra::ExpenseRepository;

/// Expense service trait for dependency injection.
#[async_trait]
pub trait ExpenseService: Send + Sync {
    /// All expenses, ordered by identifier
    async fn list_expenses(&self) -> AppResult<Vec<Expense>>;

    /// Single expense looked up by its raw path identifier
    async fn get_expense(&self, id: &str) -> AppResult<Expense>;

    /// Validate and persist a new expense
    async fn create_expense(&self, input: CreateExpense) -> AppResult<Expense>;
}

/// Concrete implementation of `ExpenseService`.
pub struct ExpenseLedger {
    repo: Arc<dyn ExpenseRepository>,
}

impl ExpenseLedger {
    pub fn new(repo: Arc<dyn ExpenseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ExpenseService for ExpenseLedger {
    async fn list_expenses(&self) -> AppResult<Vec<Expense>> {
        self.repo.find_all().await.map_err(classify_storage_error)
    }

    async fn get_expense(&self, id: &str) -> AppResult<Expense> {
        let id: i32 = id
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input("Expense ID must be a number"))?;

        self.repo
            .find_by_id(id)
            .await
            .map_err(classify_storage_error)?
            .ok_or_else(|| AppError::not_found(format!("Expense with id {id} not found")))
    }

    async fn create_expense(&self, input: CreateExpense) -> AppResult<Expense> {
        let missing = missing_fields(&[
            ("wallet_id", input.wallet_id.is_some()),
            ("name", input.name.as_deref().is_some_and(|v| !v.is_empty())),
            ("amount", input.amount.is_some()),
        ]);
        if !missing.is_empty() {
            return Err(AppError::validation("Missing required fields", missing));
        }

        let new_expense = NewExpense {
            wallet_id: input.wallet_id.unwrap_or_default(),
            name: input.name.unwrap_or_default(),
            amount: input.amount.unwrap_or_default(),
        };
        new_expense
            .validate()
            .map_err(|errors| AppError::from_validation_errors("Validation error", &errors))?;

        self.repo
            .create(new_expense.wallet_id, new_expense.name, new_expense.amount)
            .await
            .map_err(classify_storage_error)
    }
}
