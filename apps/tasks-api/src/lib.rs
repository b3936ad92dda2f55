//! Task Management API
//!
//! The binary in `main.rs` wires configuration, the database and the
//! server together; [`build_app`] assembles the full router so tests can
//! drive it without binding a socket.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use std::io;

use state::AppState;

/// Full application router: task routes, root banner, `/health` and
/// `/ready`, wrapped in the docs and middleware from `create_router`.
pub async fn build_app(state: AppState) -> io::Result<Router> {
    // - /health: liveness check with app name/version
    // - /ready: readiness check that pings the database
    // Both are merged before create_router so its layers cover them too.
    let api_routes = api::routes(&state)
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    create_router::<openapi::ApiDoc>(api_routes, &state.config.server).await
}
