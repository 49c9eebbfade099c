//! Configuration management for roleguard
//!
//! This module handles loading and validation of the database and RBAC configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RbacError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable holding the database URL
pub const ENV_DATABASE_URL: &str = "ROLEGUARD_DATABASE_URL";
/// Environment variable holding the connection pool size
pub const ENV_MAX_CONNECTIONS: &str = "ROLEGUARD_MAX_CONNECTIONS";
/// Environment variable holding the default guard name
pub const ENV_DEFAULT_GUARD: &str = "ROLEGUARD_DEFAULT_GUARD";

/// Main configuration struct
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Role and permission configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RbacError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| RbacError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_DATABASE_URL) {
            config.database.url = url;
        }
        if let Ok(max) = std::env::var(ENV_MAX_CONNECTIONS) {
            config.database.max_connections = max.parse().map_err(|e| {
                RbacError::Config(format!("Invalid {}: {}", ENV_MAX_CONNECTIONS, e))
            })?;
        }
        if let Ok(guard) = std::env::var(ENV_DEFAULT_GUARD) {
            config.rbac.default_guard = guard;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.database
            .validate()
            .map_err(|e| RbacError::Config(format!("Database config error: {}", e)))?;

        self.rbac
            .validate()
            .map_err(|e| RbacError::Config(format!("RBAC config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RbacError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
