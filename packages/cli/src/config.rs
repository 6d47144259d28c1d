use std::env;
use std::net::IpAddr;
use std::num::ParseIntError;
use std::path::PathBuf;

use axum::http::{HeaderValue, Method};
use listkeep_config::constants::{
    CORS_ORIGIN, DEFAULT_CORS_ORIGIN, DEFAULT_DATABASE_PATH, DEFAULT_HOST, DEFAULT_PORT, HOST,
    LISTKEEP_DATABASE_PATH, PORT,
};
use listkeep_config::env_or;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// `*` for any origin, otherwise a comma-separated list of origins
    pub cors_origin: String,
    pub database_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var(PORT).unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let port = parse_port(&port_str)?;

        let host_str = env_or(HOST, DEFAULT_HOST);
        let host = host_str
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str.clone()))?;

        let cors_origin = env_or(CORS_ORIGIN, DEFAULT_CORS_ORIGIN);
        let database_path = PathBuf::from(env_or(LISTKEEP_DATABASE_PATH, DEFAULT_DATABASE_PATH));

        Ok(Config {
            host,
            port,
            cors_origin,
            database_path,
        })
    }

    /// CORS layer for the configured origins; the API only speaks JSON over these verbs
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);

        if self.cors_origin.trim() == "*" {
            return Ok(layer.allow_origin(Any));
        }

        let origins = self
            .cors_origin
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Err(ConfigError::InvalidCorsOrigin(self.cors_origin.clone()));
        }

        Ok(layer.allow_origin(AllowOrigin::list(origins)))
    }
}

pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
    let port = value.trim().parse::<u16>()?;

    // Validate port is in valid range
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }

    Ok(port)
}
