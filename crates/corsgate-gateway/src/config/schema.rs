use axum::http::Method;
use corsgate_core::error::{CorsGateError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub cors: CorsSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CorsGateError::UnsupportedVersion);
        }

        self.cors.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsSection {
    /// Origins permitted to receive CORS-enabled responses. Exact strings,
    /// scheme://host[:port], no wildcards.
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    #[serde(default = "default_allowed_methods")]
    pub allowed_methods: Vec<String>,

    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allowed_methods: default_allowed_methods(),
            allow_credentials: default_allow_credentials(),
            max_age_secs: default_max_age_secs(),
        }
    }
}

impl CorsSection {
    pub fn validate(&self) -> Result<()> {
        if self.allowed_origins.is_empty() {
            return Err(CorsGateError::BadRequest(
                "cors.allowed_origins must not be empty".into(),
            ));
        }
        for m in &self.allowed_methods {
            Method::from_bytes(m.as_bytes()).map_err(|_| {
                CorsGateError::BadRequest(format!("invalid cors.allowed_methods entry: {m}"))
            })?;
        }
        Ok(())
    }

    /// Parsed method list. Call after `validate()`; unparseable entries are
    /// skipped rather than panicking.
    pub fn methods(&self) -> Vec<Method> {
        self.allowed_methods
            .iter()
            .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
            .collect()
    }
}

fn default_allowed_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_allow_credentials() -> bool {
    true
}

fn default_max_age_secs() -> u64 {
    3600
}
