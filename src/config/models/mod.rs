//! Configuration data models
//!
//! This module defines all configuration structures used by roleguard.

pub mod rbac;
pub mod storage;

pub use rbac::*;
pub use storage::*;

/// Default database URL
pub fn default_database_url() -> String {
    "sqlite://data/roleguard.db?mode=rwc".to_string()
}

/// Default pool size
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default authentication guard
pub fn default_guard() -> String {
    "web".to_string()
}
