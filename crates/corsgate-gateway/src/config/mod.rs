//! Gateway config loader (strict parsing).
//!
//! Load order: YAML file, then the `CORSGATE_ALLOWED_ORIGINS` environment
//! variable (comma-separated) overrides the file's origin list. Validation
//! runs after the override so a bad env value fails startup loudly.

pub mod schema;

use std::fs;

use corsgate_core::error::{CorsGateError, Result};

pub use schema::{CorsSection, GatewayConfig, GatewaySection};

/// Env var overriding `cors.allowed_origins` (comma-separated origins).
pub const ORIGINS_ENV: &str = "CORSGATE_ALLOWED_ORIGINS";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CorsGateError::Internal(format!("read config failed: {e}")))?;
    let mut cfg = parse(&s)?;
    if let Ok(v) = std::env::var(ORIGINS_ENV) {
        cfg.cors.allowed_origins = split_origins(&v);
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse(s: &str) -> Result<GatewayConfig> {
    serde_yaml::from_str(s)
        .map_err(|e| CorsGateError::BadRequest(format!("invalid yaml: {e}")))
}

/// Split a comma-separated origin list, trimming whitespace and dropping
/// empty segments (trailing commas are tolerated).
pub fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
