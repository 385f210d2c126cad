//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// API v1 routes (protected)
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/pools/{pool_id}/invitation",
            post(handlers::invitation::respond_to_invite),
        )
        .route("/users/@me/nickname", put(handlers::nickname::claim_nickname))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
