//! Configuration management for the Contacts API.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::http::ErrorStatusPolicy;
use std::env;
use std::net::SocketAddr;

/// Which repository implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local maps, lost on restart
    Memory,
    /// Postgres via `DATABASE_URL` (requires the `postgres` feature)
    Postgres,
}

/// Configuration for the Contacts API server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Storage backend (default: memory)
    pub storage: StorageBackend,

    /// Postgres connection string, required when `storage` is Postgres
    pub database_url: Option<String>,

    /// How use-case errors map onto HTTP status codes (default: collapsed to 500)
    pub error_status: ErrorStatusPolicy,

    /// Maximum accepted request body size in bytes (default: 1 MiB)
    pub max_body_bytes: usize,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIND_ADDR`: listen address (default: 0.0.0.0:8080)
    /// - `STORAGE_BACKEND`: `memory` or `postgres` (default: memory)
    /// - `DATABASE_URL`: Postgres URL, required for the postgres backend
    /// - `DISTINCT_ERROR_STATUS`: report missing entities as 404 (default: false)
    /// - `MAX_BODY_BYTES`: request body cap (default: 1048576)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 0.0.0.0:8080, got: {}", val),
            })?,
            Err(_) => Self::default().bind_addr,
        };

        let storage = match env::var("STORAGE_BACKEND") {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "memory" => StorageBackend::Memory,
                "postgres" => StorageBackend::Postgres,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "STORAGE_BACKEND".to_string(),
                        reason: format!("Must be 'memory' or 'postgres', got: {}", val),
                    })
                }
            },
            Err(_) => StorageBackend::Memory,
        };

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingVar("DATABASE_URL".to_string()));
        }

        let error_status = if Self::parse_env_bool("DISTINCT_ERROR_STATUS", false)? {
            ErrorStatusPolicy::Distinct
        } else {
            ErrorStatusPolicy::Collapsed
        };

        let max_body_bytes = Self::parse_env_usize("MAX_BODY_BYTES", 1024 * 1024)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_BODY_BYTES".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            bind_addr,
            storage,
            database_url,
            error_status,
            max_body_bytes,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            storage: StorageBackend::Memory,
            database_url: None,
            error_status: ErrorStatusPolicy::Collapsed,
            max_body_bytes: 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}
