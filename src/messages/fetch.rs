use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{ALL_GOOD, ApiError, ApiResult};

use super::Message;

#[derive(Serialize)]
pub(crate) struct MessageList {
    messages: Vec<Message>,
    status: &'static str,
}

impl MessageList {
    fn from_rows(rows: Vec<(String, String, String)>) -> Self {
        Self {
            messages: rows
                .into_iter()
                .map(|(id, name, message)| Message { id, name, message })
                .collect(),
            status: ALL_GOOD,
        }
    }
}

#[debug_handler]
pub(crate) async fn list_messages(
    State(db_pool): State<SqlitePool>,
) -> ApiResult<Json<MessageList>> {
    let rows: Vec<(String, String, String)> =
        sqlx::query_as("SELECT id,name,message FROM messages")
            .fetch_all(&db_pool)
            .await
            .map_err(ApiError::Retrieve)?;

    Ok(Json(MessageList::from_rows(rows)))
}

/// An unmatched id is not an error, just an empty list.
#[debug_handler]
pub(crate) async fn get_message(
    State(db_pool): State<SqlitePool>,
    Path(message_id): Path<String>,
) -> ApiResult<Json<MessageList>> {
    let rows: Vec<(String, String, String)> =
        sqlx::query_as("SELECT id,name,message FROM messages WHERE id=?")
            .bind(&message_id)
            .fetch_all(&db_pool)
            .await
            .map_err(ApiError::Retrieve)?;

    Ok(Json(MessageList::from_rows(rows)))
}
