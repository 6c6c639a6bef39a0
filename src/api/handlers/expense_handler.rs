//! Expense endpoints.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{CreateExpense, ExpenseResponse};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create expense routes
pub fn expense_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", get(get_expense))
}

/// List all expenses
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Expenses",
    responses(
        (status = 200, description = "All expenses", body = [ExpenseResponse]),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn list_expenses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ExpenseResponse>>> {
    let expenses = state.expense_service.list_expenses().await?;
    Ok(Json(
        expenses.into_iter().map(ExpenseResponse::from).collect(),
    ))
}

/// Get an expense by id
#[utoipa::path(
    get,
    path = "/api/expenses/{id}",
    tag = "Expenses",
    params(("id" = String, Path, description = "Expense identifier")),
    responses(
        (status = 200, description = "Expense found", body = ExpenseResponse),
        (status = 400, description = "Identifier is not numeric"),
        (status = 404, description = "No expense with that identifier")
    )
)]
pub async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ExpenseResponse>>> {
    let expense = state.expense_service.get_expense(&id).await?;
    Ok(Json(ApiResponse::success(ExpenseResponse::from(expense))))
}

/// Create a new expense
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Expenses",
    request_body = CreateExpense,
    responses(
        (status = 201, description = "Expense created", body = ExpenseResponse),
        (status = 400, description = "Missing or invalid fields, or unknown wallet")
    )
)]
pub async fn create_expense(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateExpense>,
) -> AppResult<Created<ExpenseResponse>> {
    let expense = state.expense_service.create_expense(payload).await?;
    Ok(Created(ExpenseResponse::from(expense)))
}
