use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::models::CurrentUser,
    server::{app_state::AppState, error::ServerError},
};

/// Gates every quiz/translation/progress route behind a live login session.
pub async fn auth_mw(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(header) = extract_header(AUTHORIZATION.as_str(), req.headers()) else {
        return Err(ServerError::Api(
            StatusCode::UNAUTHORIZED,
            "Missing authorization header".into(),
        ));
    };

    let Some(token) = header.strip_prefix("Bearer ") else {
        return Err(ServerError::Api(
            StatusCode::UNAUTHORIZED,
            "Missing auth token".into(),
        ));
    };

    let token = to_uuid(token)?;
    let Some(user_id) = state.get_sessions().user_for(&token) else {
        return Err(ServerError::Api(
            StatusCode::UNAUTHORIZED,
            "Session expired or invalid".into(),
        ));
    };

    info!("Request by user: {}", user_id);
    req.extensions_mut().insert(CurrentUser { user_id, token });

    Ok(next.run(req).await)
}

fn to_uuid(value: &str) -> Result<Uuid, ServerError> {
    value.parse().map_err(|_| {
        ServerError::Api(
            StatusCode::UNAUTHORIZED,
            "Session token is invalid format".into(),
        )
    })
}

fn extract_header(key: &str, header_map: &HeaderMap) -> Option<String> {
    header_map
        .get(key)
        .and_then(|header| header.to_str().ok())
        .map(|s| s.to_owned())
}
