//! Axum router wiring.
//!
//! Exposes a single route (`agent.path`) serving the status document.

use axum::{routing::any, Router};

use crate::{app_state::AppState, responder};

pub fn build_router(state: AppState) -> Router {
    let path = state.cfg().agent.path.clone();
    Router::new()
        .route(&path, any(responder::status))
        .with_state(state)
}
