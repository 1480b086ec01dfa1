//! Random-status handlers for `/`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use randstatus_core::{draw_status, response_body, RouteMethod};

use crate::app_state::AppState;

pub const ROOT_ENDPOINT: &str = "/";

pub async fn root_get(State(state): State<AppState>) -> Response {
    respond(&state, RouteMethod::Get)
}

pub async fn root_post(State(state): State<AppState>) -> Response {
    respond(&state, RouteMethod::Post)
}

fn respond(state: &AppState, method: RouteMethod) -> Response {
    // STATUS_POOL only holds registered codes, so the fallback is unreachable.
    let code = StatusCode::from_u16(draw_status(&mut rand::thread_rng()))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let status = code.as_u16();

    let response = match response_body(method, status) {
        Some(body) => (code, body).into_response(),
        None => code.into_response(),
    };

    state
        .metrics()
        .record_request(ROOT_ENDPOINT, method.as_str(), status);

    // Message text goes in the `msg` field.
    tracing::info!(
        msg = "Request received",
        method = method.as_str(),
        path = ROOT_ENDPOINT,
        status
    );

    response
}
