//! Wallet domain entity and creation inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::user::validate_alphabetic;

/// Wallet domain entity, owned by exactly one user
#[derive(Debug, Clone, Serialize)]
pub struct Wallet {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wallet creation payload as received from the API.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateWallet {
    /// Owning user identifier
    #[schema(example = 1)]
    pub user_id: Option<i32>,
    /// Wallet name (2-20 letters)
    #[schema(example = "Groceries")]
    pub name: Option<String>,
    /// Free-form description (at most 200 characters)
    #[schema(example = "Weekly food budget")]
    pub description: Option<String>,
    /// Icon reference
    #[schema(example = "cart")]
    pub icon: Option<String>,
}

/// Fully-present wallet input, checked before persistence.
#[derive(Debug, Clone, Validate)]
pub struct NewWallet {
    pub user_id: i32,

    #[validate(
        length(min = 2, max = 20, message = "name must be between 2 and 20 characters"),
        custom(function = "validate_alphabetic")
    )]
    pub name: String,

    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: Option<String>,

    pub icon: Option<String>,
}

/// Wallet response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WalletResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "Groceries")]
    pub name: String,
    #[schema(example = "Weekly food budget")]
    pub description: Option<String>,
    #[schema(example = "cart")]
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id,
            user_id: wallet.user_id,
            name: wallet.name,
            description: wallet.description,
            icon: wallet.icon,
            created_at: wallet.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_over_two_hundred_characters_is_rejected() {
        let wallet = NewWallet {
            user_id: 1,
            name: "Groceries".to_string(),
            description: Some("x".repeat(201)),
            icon: None,
        };
        assert!(wallet.validate().is_err());
    }

    #[test]
    fn missing_description_and_icon_are_fine() {
        let wallet = NewWallet {
            user_id: 1,
            name: "Groceries".to_string(),
            description: None,
            icon: None,
        };
        assert!(wallet.validate().is_ok());
    }
}
