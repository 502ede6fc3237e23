use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{
    agent::models::{ChatAgent, ChatMessageRequest},
    auth::models::CurrentUser,
    server::{app_state::AppState, error::ServerError},
};

pub fn agent_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", get(agent_chat))
        .route("/message", post(send_message))
        .with_state(state)
}

async fn agent_chat(
    Extension(_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ServerError> {
    let analytics = ChatAgent.analytics();
    Ok(Json(json!({ "analytics": analytics })))
}

async fn send_message(
    State(_state): State<Arc<AppState>>,
    Extension(_user): Extension<CurrentUser>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let response = ChatAgent.respond(&request.message);

    Ok(Json(json!({
        "success": true,
        "response": response,
    })))
}
