//! Server configuration read from the environment.

use std::net::SocketAddr;

use crate::error::AppError;

/// Listen host used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// OTLP collector endpoint; traces are only exported when set.
    pub otlp_endpoint: Option<String>,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `OTEL_EXPORTER_OTLP_ENDPOINT`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid u16.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid u16.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
            .map(|endpoint| endpoint.trim().to_owned())
            .filter(|endpoint| !endpoint.is_empty());

        Ok(Self {
            host,
            port,
            otlp_endpoint,
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
