//! Minimal metrics registry for the gateway.
//!
//! corsgate has exactly one label dimension (decision outcome), so counters
//! are plain atomics rather than label-keyed maps. Relaxed ordering is fine:
//! the counters are monotonic and never coordinate anything.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct GatewayMetrics {
    decisions_allowed: AtomicU64,
    decisions_denied: AtomicU64,
}

impl GatewayMetrics {
    /// Record an allowed origin decision.
    pub fn inc_allowed(&self) {
        self.decisions_allowed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a denied origin decision.
    pub fn inc_denied(&self) {
        self.decisions_denied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn allowed(&self) -> u64 {
        self.decisions_allowed.load(Ordering::Relaxed)
    }

    pub fn denied(&self) -> u64 {
        self.decisions_denied.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# TYPE corsgate_cors_decisions_total counter");
        let _ = writeln!(
            out,
            "corsgate_cors_decisions_total{{outcome=\"allowed\"}} {}",
            self.allowed()
        );
        let _ = writeln!(
            out,
            "corsgate_cors_decisions_total{{outcome=\"denied\"}} {}",
            self.denied()
        );
        out
    }
}
