//! Shared application state.
//!
//! Holds the loaded config and the single metrics registry. Cloned into every
//! handler through axum's `State` extractor.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::obs::metrics::AppMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: AppMetrics,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: AppMetrics::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.inner.metrics
    }
}
