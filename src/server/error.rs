use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::client::provider_error::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Access denied")]
    AccessDenied,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Api error: {0} - {1}")]
    Api(StatusCode, String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Failed to hash password: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Failed to serialize object: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::AccessDenied => (StatusCode::FORBIDDEN, "Unauthorized".to_string()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Api(status, msg) => (status, msg),
            ServerError::Provider(e) => {
                error!("Upstream provider failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream provider failed".into())
            }
            e => {
                error!("Unhandled server error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
