//! HTTP request handlers.

pub mod expense_handler;
pub mod user_handler;
pub mod wallet_handler;

pub use expense_handler::expense_routes;
pub use user_handler::user_routes;
pub use wallet_handler::wallet_routes;
