//! Lightweight in-process metrics (dependency-free).
//!
//! Minimal Prometheus-compatible exposition without external crates. The
//! decision counters are stored as atomics and rendered by the `/metrics`
//! handler.

pub mod metrics;
