//! Wallet endpoints.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{CreateWallet, WalletResponse};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create wallet routes
pub fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wallets).post(create_wallet))
        .route("/:id", get(get_wallet))
}

/// List all wallets
#[utoipa::path(
    get,
    path = "/api/wallets",
    tag = "Wallets",
    responses(
        (status = 200, description = "All wallets", body = [WalletResponse]),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn list_wallets(State(state): State<AppState>) -> AppResult<Json<Vec<WalletResponse>>> {
    let wallets = state.wallet_service.list_wallets().await?;
    Ok(Json(wallets.into_iter().map(WalletResponse::from).collect()))
}

/// Get a wallet by id
#[utoipa::path(
    get,
    path = "/api/wallets/{id}",
    tag = "Wallets",
    params(("id" = String, Path, description = "Wallet identifier")),
    responses(
        (status = 200, description = "Wallet found", body = WalletResponse),
        (status = 400, description = "Identifier is not numeric"),
        (status = 404, description = "No wallet with that identifier")
    )
)]
pub async fn get_wallet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<WalletResponse>>> {
    let wallet = state.wallet_service.get_wallet(&id).await?;
    Ok(Json(ApiResponse::success(WalletResponse::from(wallet))))
}

/// Create a new wallet
#[utoipa::path(
    post,
    path = "/api/wallets",
    tag = "Wallets",
    request_body = CreateWallet,
    responses(
        (status = 201, description = "Wallet created", body = WalletResponse),
        (status = 400, description = "Missing or invalid fields, or unknown owner")
    )
)]
pub async fn create_wallet(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateWallet>,
) -> AppResult<Created<WalletResponse>> {
    let wallet = state.wallet_service.create_wallet(payload).await?;
    Ok(Created(WalletResponse::from(wallet)))
}
