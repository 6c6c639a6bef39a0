//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{expense_handler, user_handler, wallet_handler};
use crate::domain::{
    CreateExpense, CreateUser, CreateWallet, ExpenseResponse, UserResponse, WalletResponse,
};
use crate::errors::FieldError;

/// OpenAPI documentation for the fintrack API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "fintrack API",
        version = "0.1.0",
        description = "Personal finance tracking backend: users, wallets and expenses",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        // Wallet endpoints
        wallet_handler::list_wallets,
        wallet_handler::get_wallet,
        wallet_handler::create_wallet,
        // Expense endpoints
        expense_handler::list_expenses,
        expense_handler::get_expense,
        expense_handler::create_expense,
    ),
    components(
        schemas(
            CreateUser,
            UserResponse,
            CreateWallet,
            WalletResponse,
            CreateExpense,
            ExpenseResponse,
            FieldError,
        )
    ),
    tags(
        (name = "Users", description = "User management"),
        (name = "Wallets", description = "Wallets owned by users"),
        (name = "Expenses", description = "Expenses recorded against wallets")
    )
)]
pub struct ApiDoc;
