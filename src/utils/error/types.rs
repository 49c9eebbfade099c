//! Error types for roleguard

use thiserror::Error;

/// Result type alias for roleguard
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for roleguard
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors that are not a known constraint failure
    #[error("Database error: {0}")]
    Database(#[source] sea_orm::DbErr),

    /// A role or permission reference did not resolve
    #[error("Not found: {0}")]
    NotFound(String),

    /// An insert or delete violated a foreign-key or other store constraint
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Unique-name collisions
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
