//! corsgate core: origin allow-list compilation and the CORS decision procedure.
//!
//! This crate defines the decision surface shared by the gateway and tests. It
//! intentionally carries no HTTP or runtime dependencies so the gatekeeper can
//! be exercised and reused without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `CorsGateError`/`Result` so a bad
//! config or malformed header can never crash the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{CorsGateError, Result};
