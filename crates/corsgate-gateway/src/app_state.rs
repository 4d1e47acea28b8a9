//! Shared application state for the corsgate gateway.
//!
//! The allow-list is compiled here, once, at startup; every request after
//! that only reads immutable data. Startup errors are explicit (Result
//! instead of panic).

use std::sync::Arc;

use corsgate_core::error::Result;
use corsgate_core::policy::{compile_origins, OriginGatekeeper};

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    gatekeeper: Arc<OriginGatekeeper>,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let allowlist = compile_origins(&cfg.cors.allowed_origins)?;

        for origin in allowlist.iter() {
            tracing::info!(%origin, "cors origin allowed");
        }

        let gatekeeper = Arc::new(OriginGatekeeper::new(allowlist));
        let metrics = Arc::new(GatewayMetrics::default());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                gatekeeper,
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn gatekeeper(&self) -> Arc<OriginGatekeeper> {
        Arc::clone(&self.inner.gatekeeper)
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
