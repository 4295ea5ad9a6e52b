//! Configuration management for the catalog service.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (CATALOG__ prefix, `__` between sections)
//! 2. Config file (catalog.toml)
//! 3. Defaults

use serde::Deserialize;

use crate::error::Result;

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub server: ServerConfig,
    pub graphql: GraphqlConfig,
    pub seed: SeedConfig,
    pub log: LogConfig,
}

/// Listener address.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Schema limits and the in-browser explorer.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GraphqlConfig {
    /// Serve GraphiQL to browser (`Accept: text/html`) GETs on `/graphql`.
    pub graphiql: bool,
    pub max_depth: usize,
    pub max_complexity: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the fixed seed records at start.
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            graphiql: true,
            max_depth: 16,
            max_complexity: 256,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from `<file_prefix>.toml` (optional) and
    /// `CATALOG__` environment variables.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = cfg.try_deserialize()?;
        tracing::debug!(?loaded, "Configuration loaded");
        Ok(loaded)
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
