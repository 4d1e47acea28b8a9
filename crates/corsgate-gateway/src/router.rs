//! Axum router wiring.
//!
//! The CORS layer is applied router-wide so every route answers preflights
//! and carries allow-headers for permitted origins.

use axum::{routing::get, Router};

use crate::{app_state::AppState, cors, ops};

pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::build_cors_layer(state.gatekeeper(), &state.cfg().cors, state.metrics());

    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .layer(cors_layer)
        .with_state(state)
}
