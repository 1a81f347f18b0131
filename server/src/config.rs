//! Configuration management for the server.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen host
    pub host: String,
    /// HTTP listen port
    pub port: u16,
    /// NetFlow collector, `host:port`
    pub collector_addr: String,
    /// Local address the UDP socket binds to
    pub bind_addr: String,
    /// Source id stamped into packets when a request does not name one
    pub source_id: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let collector_addr = var("COLLECTOR_ADDR")
            .filter(|addr| !addr.trim().is_empty())
            .ok_or(ConfigError::MissingCollectorAddr)?;

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:0".to_string());

        let source_id = var("SOURCE_ID")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidSourceId)?;

        Ok(Self {
            host,
            port,
            collector_addr,
            bind_addr,
            source_id,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("COLLECTOR_ADDR environment variable is required")]
    MissingCollectorAddr,

    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("Invalid SOURCE_ID value")]
    InvalidSourceId,
}
