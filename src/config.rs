//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default SQLite location used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://payloads.db";

/// Default artificial delay applied to every uncached transformation, in seconds.
pub const DEFAULT_TRANSFORMER_DELAY_SECS: f64 = 0.1;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the relational store
    pub database_url: String,
    /// Simulated cost of one uncached transformation
    pub transformer_delay: Duration,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - SQLite path or `sqlite://` URL (default: `sqlite://payloads.db`)
    /// - `TRANSFORMER_DELAY` - Delay in seconds per uncached transformation (default: 0.1)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            transformer_delay: env::var("TRANSFORMER_DELAY")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .unwrap_or_else(default_transformer_delay),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Resolves `database_url` to a filesystem path.
    ///
    /// Accepts `sqlite://path`, `sqlite:path` or a bare path.
    pub fn database_path(&self) -> PathBuf {
        let url = self.database_url.trim();
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        PathBuf::from(path)
    }
}

fn default_transformer_delay() -> Duration {
    Duration::from_secs_f64(DEFAULT_TRANSFORMER_DELAY_SECS)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            transformer_delay: default_transformer_delay(),
            server_port: 8000,
        }
    }
}
