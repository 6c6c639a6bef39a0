//! Expense domain entity and creation inputs.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::user::validate_alphabetic;
use crate::config::EXPENSE_AMOUNT_MAX;

/// Upper bound for expense amounts (DECIMAL(10,2) ceiling)
static AMOUNT_CEILING: Lazy<Decimal> =
    Lazy::new(|| EXPENSE_AMOUNT_MAX.parse().expect("valid decimal literal"));

/// Expense domain entity, recorded against exactly one wallet
#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i32,
    pub wallet_id: i32,
    pub name: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Expense creation payload as received from the API.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateExpense {
    /// Wallet the expense belongs to
    #[schema(example = 1)]
    pub wallet_id: Option<i32>,
    /// Expense name (2-20 letters)
    #[schema(example = "Coffee")]
    pub name: Option<String>,
    /// Amount spent, between 0 and 99999999.99
    #[schema(value_type = f64, example = 4.5)]
    pub amount: Option<Decimal>,
}

/// Fully-present expense input, checked before persistence.
#[derive(Debug, Clone, Validate)]
pub struct NewExpense {
    pub wallet_id: i32,

    #[validate(
        length(min = 2, max = 20, message = "name must be between 2 and 20 characters"),
        custom(function = "validate_alphabetic")
    )]
    pub name: String,

    #[validate(custom(function = "validate_amount_range"))]
    pub amount: Decimal,
}

/// Custom validator keeping amounts inside the DECIMAL(10,2) range
fn validate_amount_range(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount >= Decimal::ZERO && *amount <= *AMOUNT_CEILING {
        return Ok(());
    }
    let mut error = ValidationError::new("amount_range");
    error.message = Some(format!("amount must be between 0 and {EXPENSE_AMOUNT_MAX}").into());
    Err(error)
}

/// Expense response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExpenseResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub wallet_id: i32,
    #[schema(example = "Coffee")]
    pub name: String,
    #[schema(value_type = f64, example = 4.5)]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            wallet_id: expense.wallet_id,
            name: expense.name,
            amount: expense.amount,
            created_at: expense.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: Decimal) -> NewExpense {
        NewExpense {
            wallet_id: 1,
            name: "Coffee".to_string(),
            amount,
        }
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(expense(Decimal::new(-500, 2)).validate().is_err());
    }

    #[test]
    fn amount_above_ceiling_is_rejected() {
        assert!(expense(Decimal::new(10_000_000_000, 2)).validate().is_err());
    }

    #[test]
    fn boundary_amounts_are_accepted() {
        assert!(expense(Decimal::ZERO).validate().is_ok());
        assert!(expense(Decimal::new(9_999_999_999, 2)).validate().is_ok());
    }
}
