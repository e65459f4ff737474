//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to local-development defaults:
//! - `ECOFINDS_HOST` - Bind address (default: 127.0.0.1)
//! - `ECOFINDS_PORT` - Listen port (default: 3000)
//! - `ECOFINDS_MOCK_LATENCY_MS` - Simulated network delay (default: 800)
//! - `ECOFINDS_SESSION_FILE` - Durable session snapshot path
//!   (default: `.ecofinds-session.json`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::latency::MockLatency;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Simulated network delay for mock backend calls, in milliseconds
    pub mock_latency_ms: u64,
    /// Path of the durable session snapshot file
    pub session_file: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ECOFINDS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ECOFINDS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ECOFINDS_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ECOFINDS_PORT".to_string(), e.to_string()))?;
        let mock_latency_ms = get_env_or_default("ECOFINDS_MOCK_LATENCY_MS", "800")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ECOFINDS_MOCK_LATENCY_MS".to_string(), e.to_string())
            })?;
        let session_file =
            PathBuf::from(get_env_or_default("ECOFINDS_SESSION_FILE", ".ecofinds-session.json"));

        Ok(Self {
            host,
            port,
            mock_latency_ms,
            session_file,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the configured mock network latency.
    #[must_use]
    pub const fn mock_latency(&self) -> MockLatency {
        MockLatency::from_millis(self.mock_latency_ms)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            mock_latency_ms: 800,
            session_file: PathBuf::from(".ecofinds-session.json"),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            ..StorefrontConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_mock_latency_from_config() {
        let config = StorefrontConfig {
            mock_latency_ms: 1500,
            ..StorefrontConfig::default()
        };
        assert_eq!(config.mock_latency().delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.session_file, PathBuf::from(".ecofinds-session.json"));
    }
}
