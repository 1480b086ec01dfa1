//! Server config loader (strict parsing).
//!
//! The file is optional: without `RANDSTATUS_CONFIG` the built-in defaults
//! (all interfaces, port 8080) apply.

pub mod schema;

use std::{env, fs};

use randstatus_core::error::{RandStatusError, Result};

pub use schema::{ServerConfig, ServerSection};

/// Env var naming the YAML config file.
pub const CONFIG_ENV: &str = "RANDSTATUS_CONFIG";

pub fn load_from_env() -> Result<ServerConfig> {
    match env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => load_from_file(&path),
        _ => Ok(ServerConfig::default()),
    }
}

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RandStatusError::InvalidConfig(format!("read {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| RandStatusError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
