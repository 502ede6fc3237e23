use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::models::CurrentUser,
    progress::db,
    server::{app_state::AppState, error::ServerError},
};

pub fn progress_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_progress))
        .route("/{progress_id}", delete(delete_progress))
        .with_state(state)
}

async fn list_progress(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ServerError> {
    let progress = db::list_progress_for_user(state.get_pool(), &user.user_id).await?;
    Ok((StatusCode::OK, Json(progress)))
}

async fn delete_progress(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(progress_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let Some(owner_id) = db::get_progress_owner(state.get_pool(), &progress_id).await? else {
        return Err(ServerError::NotFound(
            "Progress record does not exist".into(),
        ));
    };

    if owner_id != user.user_id {
        return Err(ServerError::AccessDenied);
    }

    db::delete_progress(state.get_pool(), &progress_id).await?;
    info!("User {} deleted progress record {}", user.user_id, progress_id);

    Ok(StatusCode::OK)
}
