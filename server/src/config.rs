//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("invalid BIND_ADDR value: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory served at `/images` and other static paths.
    pub assets_dir: PathBuf,
    /// Consultation API base URL forwarded to the browser, if configured.
    pub consultation_api_base: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `ASSETS_DIR`: default `<crate>/../public`
    /// - `CONSULTATION_API_BASE_URL`: external consultation API base
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `PORT` or `BIND_ADDR` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;
        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"));
        let consultation_api_base = std::env::var(site_client::net::config::API_BASE_ENV)
            .ok()
            .and_then(|v| site_client::net::config::normalize_base_url(&v));

        Ok(Self { bind_addr, port, assets_dir, consultation_api_base })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
