//! Storage configuration

use super::{default_connection_timeout, default_database_url, default_max_connections};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite configuration, limited to the single connection it supports
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: default_connection_timeout(),
        }
    }

    /// Whether the URL targets SQLite
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    /// Whether the URL targets an in-memory SQLite database, which lives only
    /// as long as its connection
    pub fn is_in_memory(&self) -> bool {
        self.is_sqlite() && (self.sqlite_path().is_none() || self.url.contains("mode=memory"))
    }

    /// File backing a SQLite URL, if any
    pub fn sqlite_file(&self) -> Option<PathBuf> {
        if self.url.contains("mode=memory") {
            return None;
        }
        self.sqlite_path().map(PathBuf::from)
    }

    fn sqlite_path(&self) -> Option<&str> {
        let rest = self.url.strip_prefix("sqlite:")?;
        let rest = rest.strip_prefix("//").unwrap_or(rest);
        let path = rest.split('?').next().unwrap_or_default();
        (!path.is_empty() && path != ":memory:").then_some(path)
    }
}
