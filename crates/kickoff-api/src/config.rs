//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Port to bind (`PORT`, default `3000`).
    pub port: u16,
    /// PostgreSQL URL (`DATABASE_URL`). Selections are kept in memory when unset.
    pub database_url: Option<String>,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`, default `10`).
    pub database_max_connections: u32,
    /// Fixture file for the static provider (`FIXTURES_PATH`, default `fixtures.yaml`).
    pub fixtures_path: PathBuf,
    /// League ids to list (`WATCHED_LEAGUES`, comma separated). Empty lists all.
    pub watched_leagues: Vec<u32>,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let database_max_connections: u32 = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|e| {
                AppError::Config(format!("DATABASE_MAX_CONNECTIONS must be a valid u32: {e}"))
            })?;
        let fixtures_path =
            PathBuf::from(lookup("FIXTURES_PATH").unwrap_or_else(|| "fixtures.yaml".to_string()));
        let watched_leagues = lookup("WATCHED_LEAGUES")
            .map(|value| parse_leagues(&value))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            fixtures_path,
            watched_leagues,
        })
    }

    /// Returns the address to listen on.
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

fn parse_leagues(value: &str) -> Result<Vec<u32>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse()
                .map_err(|e| AppError::Config(format!("WATCHED_LEAGUES entry {id:?}: {e}")))
        })
        .collect()
}
