use std::sync::Arc;

use axum::{
    Extension, Json, Router, extract::State, http::StatusCode, response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::error;

use crate::{
    agent::models::ChatAgent,
    auth::{db, models::CurrentUser},
    server::{app_state::AppState, error::ServerError},
};

static DISPLAY_LANGUAGES: [&str; 12] = [
    "English",
    "Tamil",
    "Mandarin",
    "Hindi",
    "Spanish",
    "French",
    "Arabic",
    "Bengali",
    "Portuguese",
    "Russian",
    "Urdu",
    "Indonesian",
];

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(health)).with_state(state)
}

pub fn dashboard_routes(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(dashboard)).with_state(state)
}

async fn health() -> impl IntoResponse {
    "OK".into_response()
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ServerError> {
    let Some(db_user) = db::get_user_by_id(state.get_pool(), &user.user_id).await? else {
        error!("Unexpected: session references a user that is now missing");
        return Err(ServerError::NotFound("User not found".into()));
    };

    let analytics = ChatAgent.analytics();

    Ok((
        StatusCode::OK,
        Json(json!({
            "username": db_user.username,
            "languages": DISPLAY_LANGUAGES,
            "analytics": analytics,
        })),
    ))
}
