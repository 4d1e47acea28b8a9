//! Origin gatekeeper: the per-request CORS decision.
//!
//! Construct once at startup, then share via Arc. The decision is a pure
//! function over the compiled allow-list and the request's `Origin` header,
//! so it is safe to call concurrently without locking.

use super::allowlist::AllowList;

/// Reason string attached to every denial.
pub const DENY_REASON: &str = "Not allowed by CORS";

/// Decision from origin evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied { reason: &'static str },
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

/// Holds the compiled allow-list and decides ALLOW or DENY per request.
#[derive(Debug, Clone)]
pub struct OriginGatekeeper {
    allowlist: AllowList,
}

impl OriginGatekeeper {
    pub fn new(allowlist: AllowList) -> Self {
        Self { allowlist }
    }

    /// Decide whether a request with the given `Origin` header may proceed.
    ///
    /// An absent header means a same-origin or server-to-server request,
    /// which is permitted unconditionally. A present header must match an
    /// allow-list entry exactly; an unlisted or malformed origin is denied
    /// with the same reason (no finer-grained diagnostics).
    pub fn decide(&self, request_origin: Option<&str>) -> Decision {
        match request_origin {
            None => Decision::Allowed,
            Some(o) if self.allowlist.contains(o) => Decision::Allowed,
            Some(_) => Decision::Denied { reason: DENY_REASON },
        }
    }

    pub fn allowlist(&self) -> &AllowList {
        &self.allowlist
    }
}
