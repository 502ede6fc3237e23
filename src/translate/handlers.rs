use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{
    auth::models::CurrentUser,
    server::{app_state::AppState, error::ServerError},
    translate::{db, models::TranslateRequest},
};

pub fn translate_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(translate))
        .route("/history", get(translation_history))
        .with_state(state)
}

async fn translation_history(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ServerError> {
    let translations = db::list_translations_for_user(state.get_pool(), &user.user_id).await?;
    Ok((StatusCode::OK, Json(translations)))
}

/// Straight passthrough to the translation provider. Unlike the quiz
/// generator there is no fallback here: a provider failure propagates as a
/// server error and nothing is logged.
async fn translate(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<TranslateRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let translated_text = state
        .get_translator()
        .translate(
            state.get_client(),
            &request.input_text,
            &request.source_lang,
            &request.target_lang,
        )
        .await?;

    db::insert_translation(
        state.get_pool(),
        &user.user_id,
        &request.source_lang,
        &request.target_lang,
        &request.input_text,
        &translated_text,
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "translated_text": translated_text })),
    ))
}
