//! Allow-list compilation and matching.
//!
//! Matching is exact, case-sensitive string equality. No wildcards, no
//! normalization: `http://localhost:3000/` (trailing slash) does not match
//! the entry `http://localhost:3000`.

use crate::error::{CorsGateError, Result};

/// Compiled origin allow-list. Immutable after construction.
#[derive(Debug, Clone)]
pub struct AllowList {
    origins: Vec<String>,
}

/// Validate raw config entries and build an [`AllowList`].
///
/// Rejects empty entries and entries without a `scheme://` prefix; this is
/// config hygiene at startup, not request-time normalization.
pub fn compile_origins(raw: &[String]) -> Result<AllowList> {
    let mut origins = Vec::with_capacity(raw.len());
    for s in raw {
        if s.is_empty() {
            return Err(CorsGateError::BadRequest(
                "allowed_origins entry must not be empty".into(),
            ));
        }
        if !s.contains("://") {
            return Err(CorsGateError::BadRequest(format!(
                "invalid allowed_origins entry: {s} (expected scheme://host[:port])"
            )));
        }
        origins.push(s.clone());
    }
    Ok(AllowList { origins })
}

impl AllowList {
    /// Exact membership test.
    pub fn contains(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Iterate configured origins (startup logging).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }
}
