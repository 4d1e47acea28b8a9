//! CORS layer construction.
//!
//! The gatekeeper makes the allow/deny call; tower-http turns it into
//! response headers. Requests without an `Origin` header never reach the
//! predicate and pass through with no CORS headers attached, which is the
//! permit-unconditionally case (same-origin and server-to-server traffic).
//!
//! Note: a denied request is not rejected at the server. The response is
//! produced without `Access-Control-Allow-*` headers and the browser blocks
//! it on the client side.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue};
use corsgate_core::policy::{Decision, OriginGatekeeper, DENY_REASON};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsSection;
use crate::obs::metrics::GatewayMetrics;

pub fn build_cors_layer(
    gatekeeper: Arc<OriginGatekeeper>,
    cors: &CorsSection,
    metrics: Arc<GatewayMetrics>,
) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            let decision = match origin.to_str() {
                Ok(o) => gatekeeper.decide(Some(o)),
                // Non-UTF-8 header bytes can never equal an allow-list entry.
                Err(_) => Decision::Denied { reason: DENY_REASON },
            };

            match decision {
                Decision::Allowed => {
                    metrics.inc_allowed();
                    true
                }
                Decision::Denied { reason } => {
                    metrics.inc_denied();
                    tracing::debug!(origin = ?origin, %reason, "cors origin denied");
                    false
                }
            }
        }))
        .allow_methods(cors.methods())
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
        ])
        .allow_credentials(cors.allow_credentials)
        .max_age(Duration::from_secs(cors.max_age_secs))
}
