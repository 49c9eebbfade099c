use crate::config::DatabaseConfig;
use crate::utils::error::{RbacError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

/// Idle and lifetime limit for in-memory SQLite pools
const IN_MEMORY_KEEPALIVE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = if config.is_sqlite() {
            DatabaseBackendType::SQLite
        } else {
            DatabaseBackendType::PostgreSQL
        };

        if let Some(parent) = config.sqlite_file().as_deref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating database directory {:?}", parent);
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    RbacError::internal(format!(
                        "Failed to create database directory {:?}: {}",
                        parent, e
                    ))
                })?;
            }
        }

        let db = Self::try_connect(&config.url, config).await?;
        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let opt = Self::connect_options(url, config);
        Database::connect(opt).await.map_err(RbacError::Database)
    }

    fn connect_options(url: &str, config: &DatabaseConfig) -> ConnectOptions {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        // An in-memory database lives and dies with its single connection.
        // Unset limits fall back to the pool defaults, so pin them explicitly.
        if config.is_in_memory() {
            opt.max_connections(1)
                .idle_timeout(IN_MEMORY_KEEPALIVE)
                .max_lifetime(IN_MEMORY_KEEPALIVE);
        } else {
            opt.idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(3600));
        }
        opt
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            RbacError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(RbacError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        let _result = entities::Role::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(RbacError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}
