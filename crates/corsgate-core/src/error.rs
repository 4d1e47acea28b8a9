//! Shared error type across corsgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Origin present but not in the allow-list.
    OriginNotAllowed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::OriginNotAllowed => "ORIGIN_NOT_ALLOWED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CorsGateError>;

/// Unified error type used by core and gateway.
///
/// Per-request denials are not errors: the gatekeeper reports those through
/// `policy::Decision`. This type covers config and startup failures.
#[derive(Debug, Error)]
pub enum CorsGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("origin not allowed: {0}")]
    OriginNotAllowed(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CorsGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CorsGateError::BadRequest(_) => ClientCode::BadRequest,
            CorsGateError::OriginNotAllowed(_) => ClientCode::OriginNotAllowed,
            CorsGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            CorsGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
