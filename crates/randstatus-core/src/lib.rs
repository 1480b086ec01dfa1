//! randstatus core: the status pool, the response body rule, and the shared
//! error surface.
//!
//! This crate carries no HTTP or runtime dependencies. The server crate maps
//! these primitives onto axum handlers and the metrics registry.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod status;

/// Shared result type.
pub use error::{Result, RandStatusError};
pub use status::{draw_status, response_body, RouteMethod, HELLO_BODY, STATUS_POOL};
