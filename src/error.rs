use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to retrieve messages")]
    Retrieve(#[source] sqlx::Error),

    #[error("failed to save the message")]
    Save(#[source] sqlx::Error),

    #[error("missing required field `{0}`")]
    Validation(&'static str),

    #[error("malformed request body")]
    Body(#[source] JsonRejection),

    #[error("failed to serialize about data")]
    About(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP code and free-text `status` string for the failure envelope.
    pub fn envelope_status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Retrieve(_) => (
                StatusCode::BAD_REQUEST,
                "failed to retrieve messages from the database",
            ),
            // a rejected field or body shares the save envelope on the wire
            ApiError::Save(_) | ApiError::Validation(_) | ApiError::Body(_) => (
                StatusCode::BAD_REQUEST,
                "failed to save the message to the database",
            ),
            ApiError::About(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to retrieve about data",
            ),
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Retrieve(err) | ApiError::Save(err) => err.to_string(),
            ApiError::About(err) => err.to_string(),
            ApiError::Body(err) => err.to_string(),
            ApiError::Validation(_) => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, status) = self.envelope_status();
        let error = self.detail();
        tracing::error!(status, %error, "request failed");

        (code, Json(json!({ "error": error, "status": status }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::Value;

    use super::ApiError;

    async fn envelope(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let code = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (code, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn retrieve_maps_to_400_with_retrieve_status() {
        let (code, body) = envelope(ApiError::Retrieve(sqlx::Error::PoolClosed)).await;

        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["status"],
            "failed to retrieve messages from the database"
        );
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn validation_shares_the_save_envelope() {
        let (code, body) = envelope(ApiError::Validation("name")).await;

        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "failed to save the message to the database");
        assert_eq!(body["error"], "missing required field `name`");
    }

    #[tokio::test]
    async fn save_maps_to_400_with_save_status() {
        let (code, body) = envelope(ApiError::Save(sqlx::Error::PoolClosed)).await;

        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "failed to save the message to the database");
    }

    #[tokio::test]
    async fn about_maps_to_500() {
        let bad = serde_json::from_str::<Value>("not json").unwrap_err();
        let (code, body) = envelope(ApiError::About(bad)).await;

        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "failed to retrieve about data");
    }
}
