use axum::{Router, middleware::from_fn_with_state};
use dotenv::dotenv;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use crate::{
    agent::handlers::agent_routes,
    auth::handlers::{protected_auth_routes, public_auth_routes},
    common::handlers::{dashboard_routes, health_routes},
    config::config::CONFIG,
    lesson::handlers::lesson_routes,
    mw::auth_mw::auth_mw,
    progress::handlers::progress_routes,
    quiz::handlers::quiz_routes,
    server::app_state::AppState,
    translate::handlers::translate_routes,
};

mod agent;
mod auth;
mod client;
mod common;
mod config;
mod lesson;
mod mw;
mod progress;
mod quiz;
mod server;
mod session;
mod translate;

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    // Initialize state
    let state = AppState::from_connection_string(&CONFIG.database_url)
        .await
        .unwrap_or_else(|e| panic!("{}", e));

    // Initialize routes
    let public_routes = Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/auth", public_auth_routes(state.clone()));

    let protected_routes = Router::new()
        .nest("/auth", protected_auth_routes(state.clone()))
        .nest("/dashboard", dashboard_routes(state.clone()))
        .nest("/lessons", lesson_routes(state.clone()))
        .nest("/translate", translate_routes(state.clone()))
        .nest("/progress", progress_routes(state.clone()))
        .nest("/quiz", quiz_routes(state.clone()))
        .nest("/agent", agent_routes(state.clone()))
        .layer(from_fn_with_state(state.clone(), auth_mw));

    let app = Router::new().merge(protected_routes).merge(public_routes);

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap();

    info!(
        "Server listening on address: {}",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app).await.unwrap();
}
