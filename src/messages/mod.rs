mod fetch;
mod save;

use axum::{
    Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub message: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch::list_messages))
        .route("/save", post(save::save_message))
        .route("/{message_id}", get(fetch::get_message))
}
