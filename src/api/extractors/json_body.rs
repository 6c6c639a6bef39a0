//! JSON body extractor with domain-shaped rejections.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an `INVALID_INPUT_ERROR` response
/// instead of axum's default plain-text reply.
///
/// # Example
///
/// ```rust,ignore
/// use fintrack::api::extractors::JsonBody;
/// use fintrack::domain::CreateUser;
///
/// async fn create_user(JsonBody(payload): JsonBody<CreateUser>) {
///     // payload deserialized, malformed bodies already rejected
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_input(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
