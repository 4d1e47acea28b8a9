//! corsgate gateway library entry.
//!
//! This crate wires config, the compiled origin gatekeeper, the CORS layer,
//! and operational endpoints into a runnable gateway. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod cors;
pub mod obs;
pub mod ops;
pub mod router;
