//! Route definitions for the NoteLoft HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/login", post(handlers::auth::login))
        .merge(note_routes())
        .route(
            "/tenants/{slug}/upgrade",
            post(handlers::tenant::upgrade_tenant),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Note CRUD, all bearer-protected via the `AuthUser` extractor.
fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(handlers::note::list_notes))
        .route("/notes", post(handlers::note::create_note))
        .route("/notes/{id}", get(handlers::note::get_note))
        .route("/notes/{id}", put(handlers::note::update_note))
        .route("/notes/{id}", delete(handlers::note::delete_note))
}
