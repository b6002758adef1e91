use axum::{
    Json, debug_handler,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{ALL_GOOD, ApiError, ApiResult};

use super::Message;

#[derive(Serialize)]
pub(crate) struct SavedMessage {
    message: Message,
    status: &'static str,
}

/// The body is duck-typed: a missing, null, non-string, or empty field
/// is a validation failure, not a deserialization one, so it gets the
/// same envelope as any other save failure.
fn required_field(body: &Value, field: &'static str) -> Result<String, ApiError> {
    match body.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        _ => Err(ApiError::Validation(field)),
    }
}

#[debug_handler]
pub(crate) async fn save_message(
    State(db_pool): State<SqlitePool>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<SavedMessage>> {
    let Json(body) = body.map_err(ApiError::Body)?;
    let name = required_field(&body, "name")?;
    let message = required_field(&body, "message")?;

    let id = Uuid::now_v7().to_string();
    sqlx::query("INSERT INTO messages (id,name,message) values (?,?,?)")
        .bind(&id)
        .bind(&name)
        .bind(&message)
        .execute(&db_pool)
        .await
        .map_err(ApiError::Save)?;

    Ok(Json(SavedMessage {
        message: Message { id, name, message },
        status: ALL_GOOD,
    }))
}
