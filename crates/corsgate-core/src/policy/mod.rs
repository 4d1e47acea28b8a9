//! Policy layer (origin allow-list + gatekeeper).
//!
//! Compiles the configured origin list into an immutable lookup structure and
//! exposes the per-request allow/deny decision the middleware consumes.

pub mod allowlist;
pub mod gatekeeper;

pub use allowlist::{compile_origins, AllowList};
pub use gatekeeper::{Decision, OriginGatekeeper, DENY_REASON};
