//! Service config loader (strict parsing).
//!
//! Every field has a default, so running without a file yields the stock
//! 7 x 1 MiB every 5 s setup. `PORT` always wins over the file's `server.port`.

pub mod schema;

use std::fs;

use memgrow_core::error::{MemgrowError, Result};

pub use schema::{AllocatorSection, ServerSection, ServiceConfig, StatusSection};

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "MEMGROW_CONFIG";
/// Env var selecting the listening port.
pub const PORT_ENV: &str = "PORT";

/// Load config from `MEMGROW_CONFIG` (if set) and apply `PORT`.
pub fn load_from_env() -> Result<ServiceConfig> {
    load(
        std::env::var(CONFIG_PATH_ENV).ok().as_deref(),
        std::env::var(PORT_ENV).ok().as_deref(),
    )
}

/// Resolve config from an optional file path and an optional `PORT` value.
/// A missing or empty path means built-in defaults.
pub fn load(path: Option<&str>, port: Option<&str>) -> Result<ServiceConfig> {
    let cfg = match path {
        Some(path) if !path.is_empty() => load_from_file(path)?,
        _ => {
            let cfg = ServiceConfig::default();
            cfg.validate()?;
            cfg
        }
    };
    apply_port(cfg, port)
}

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MemgrowError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| MemgrowError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Override the port with a `PORT` value. Unset or empty leaves it alone.
pub fn apply_port(mut cfg: ServiceConfig, port: Option<&str>) -> Result<ServiceConfig> {
    match port.map(str::trim) {
        None | Some("") => Ok(cfg),
        Some(p) => {
            cfg.server.port = p
                .parse()
                .map_err(|e| MemgrowError::Config(format!("{PORT_ENV}={p:?} is not a valid port: {e}")))?;
            Ok(cfg)
        }
    }
}
