//! Route definitions for the EventHub HTTP API.
//!
//! Routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(event_routes())
        .merge(registration_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Signup, login, and identity endpoints for both namespaces
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/signup", post(handlers::auth::admin_signup))
        .route("/admin/login", post(handlers::auth::admin_login))
        .route("/user/signup", post(handlers::auth::user_signup))
        .route("/user/login", post(handlers::auth::user_login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Event publishing and listing
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_events))
        .route("/events/create", post(handlers::event::create_event))
        .route("/admin/events", get(handlers::event::admin_events))
}

/// Registration and participant views
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/events/{id}/register", post(handlers::registration::register))
        .route(
            "/events/{id}/participants",
            get(handlers::registration::participants),
        )
        .route(
            "/user/registered-events",
            get(handlers::registration::registered_events),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
