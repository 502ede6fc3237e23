use std::sync::Arc;

use axum::{
    Extension, Json, Router, extract::State, http::StatusCode, response::IntoResponse,
    routing::post,
};
use bcrypt::{DEFAULT_COST, hash, verify};
use serde_json::json;
use tracing::info;

use crate::{
    auth::{
        db,
        models::{CurrentUser, LoginRequest, RegisterRequest},
    },
    server::{app_state::AppState, error::ServerError},
};

pub fn public_auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(state)
}

pub fn protected_auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/logout", post(logout))
        .with_state(state)
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ServerError> {
    if db::username_taken(state.get_pool(), &request.username).await? {
        return Err(ServerError::Validation("Username already exists".into()));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;
    let user_id = db::create_user(
        state.get_pool(),
        &request.username,
        &request.email,
        &password_hash,
    )
    .await?;

    info!("Registered new user: {}", user_id);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registration successful! Login now." })),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let credentials = db::get_credentials_by_username(state.get_pool(), &request.username).await?;

    let Some(credentials) = credentials else {
        return Err(ServerError::Api(
            StatusCode::UNAUTHORIZED,
            "Invalid credentials".into(),
        ));
    };

    if !verify(&request.password, &credentials.password_hash)? {
        return Err(ServerError::Api(
            StatusCode::UNAUTHORIZED,
            "Invalid credentials".into(),
        ));
    }

    let token = state.get_sessions().create(credentials.id);
    info!("User {} logged in", credentials.id);

    Ok((StatusCode::OK, Json(json!({ "token": token }))))
}

async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ServerError> {
    state.get_sessions().remove(&user.token);
    info!("User {} logged out", user.user_id);

    Ok(StatusCode::OK)
}
