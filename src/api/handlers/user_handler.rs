//! User endpoints.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, password excluded", body = [UserResponse]),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Identifier is not numeric"),
        (status = 404, description = "No user with that identifier")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or invalid fields, or duplicate username/email")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUser>,
) -> AppResult<Created<UserResponse>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Created(UserResponse::from(user)))
}
