//! Axum router wiring.
//!
//! `GET|POST /` draw a random status, `GET /metrics` serves the scrape.
//! Anything else falls through to axum's 404/405.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handler, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            handler::ROOT_ENDPOINT,
            get(handler::root_get).post(handler::root_post),
        )
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
