use anyhow::{anyhow, Context, Result};
use std::env;

use crate::mapper::BackendKind;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON-RPC endpoint URL
    pub rpc_url: String,
    /// Node family behind the endpoint
    pub backend: BackendKind,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            backend: BackendKind::Geth,
            timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// Call dotenvy::dotenv() before calling this.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let rpc_url = env::var("ETH_PERSONAL_RPC_URL").unwrap_or(defaults.rpc_url);

        let backend = match env::var("ETH_PERSONAL_BACKEND") {
            Ok(v) => v
                .parse::<BackendKind>()
                .map_err(|e| anyhow!(e))
                .context("ETH_PERSONAL_BACKEND must be geth or ganache")?,
            Err(_) => defaults.backend,
        };

        let timeout_secs: u64 = match env::var("ETH_PERSONAL_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .context("ETH_PERSONAL_TIMEOUT_SECS must be a valid u64")?,
            Err(_) => defaults.timeout_secs,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);

        Ok(Config {
            rpc_url,
            backend,
            timeout_secs,
            log_level,
        })
    }
}
