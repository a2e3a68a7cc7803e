//! Configuration management for the server.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Upper bound of pooled database connections
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidMaxConnections)?;

        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,

    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("Invalid DATABASE_MAX_CONNECTIONS value")]
    InvalidMaxConnections,
}
