mod page;

use axum::{Router, routing::get};

use crate::AppState;

pub use page::{AboutProfile, about_profile};

pub fn router() -> Router<AppState> {
    Router::new().route("/about", get(page::about))
}
