//! Listener lifecycle: Starting -> Serving -> Stopped.
//!
//! No retry, restart or port fallback. A bind or accept failure is logged
//! once with host/port and returned to the caller.

use tokio::net::TcpListener;

use randstatus_core::error::{RandStatusError, Result};

use crate::{app_state::AppState, config::ServerSection, router};

pub async fn bind(server: &ServerSection) -> Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .map_err(|source| RandStatusError::Bind {
            addr: server.addr(),
            source,
        })
}

/// Serve on an already bound listener until the accept loop fails.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = router::build_router(state);
    axum::serve(listener, app)
        .await
        .map_err(RandStatusError::Serve)
}

pub async fn run(state: AppState) -> Result<()> {
    let server = state.cfg().server.clone();

    tracing::info!(
        msg = "Starting HTTP server",
        host = %server.host,
        port = server.port
    );

    let result = match bind(&server).await {
        Ok(listener) => serve(listener, state).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        tracing::error!(
            msg = "Failed to start the HTTP server",
            host = %server.host,
            port = server.port,
            code = e.code().as_str(),
            error = %e
        );
    }

    result
}
