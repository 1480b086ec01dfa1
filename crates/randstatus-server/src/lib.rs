//! randstatus server library entry.
//!
//! Wires config, shared state, the random-status handlers, the metrics
//! registry and the JSON log sink into an axum service. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handler;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
