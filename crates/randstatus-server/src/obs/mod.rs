//! Observability: the in-process metrics registry and the JSON log sink.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler.
//! Logs go through `tracing` and are formatted as one JSON object per line.

pub mod logging;
pub mod metrics;
