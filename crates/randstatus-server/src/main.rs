//! randstatus server
//!
//! - `GET /`, `POST /` : random status from a fixed pool
//! - `GET /metrics`     : `http_requests_total` in Prometheus text format
//! - JSON logs on stdout

use std::process::ExitCode;

use randstatus_server::{app_state::AppState, config, obs, server};

#[tokio::main]
async fn main() -> ExitCode {
    obs::logging::init();

    let cfg = match config::load_from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(
                msg = "Failed to load config",
                code = e.code().as_str(),
                error = %e
            );
            return ExitCode::FAILURE;
        }
    };

    // Failures are logged inside run(); only the exit code is decided here.
    match server::run(AppState::new(cfg)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
