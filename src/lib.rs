pub mod about;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod messages;
pub mod res;

use axum::{Router, extract::FromRef};
use sqlx::SqlitePool;

pub use error::{ApiError, ApiResult};

/// Envelope status string shared by every successful response.
pub const ALL_GOOD: &str = "all good";

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/messages", messages::router())
        .merge(about::router())
        .with_state(state)
}
