//! # roleguard
//!
//! Role-based access control backed by a relational store.
//!
//! Roles own permissions; subjects (any host entity implementing [`Subject`])
//! hold roles and may also be granted permissions directly. A subject holds a
//! permission when it was granted directly or through any of its roles.
//!
//! ## Features
//!
//! - **Typed references**: roles and permissions can be passed by name, id or entity
//! - **Idempotent mutations**: assigning twice or revoking what is not held is a no-op
//! - **All-or-nothing batches**: every reference is resolved before anything is written
//! - **SeaORM storage**: SQLite (default) and PostgreSQL backends, migrations included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roleguard::{Database, DatabaseConfig, RbacConfig, RbacSystem, SubjectKey};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::in_memory()).await?;
//!     db.migrate().await?;
//!     let rbac = RbacSystem::new(Arc::new(db), &RbacConfig::default());
//!
//!     let editor = rbac.create_role("editor", None).await?;
//!     rbac.create_permission("publish-article", None).await?;
//!     rbac.role(&editor).give_permission_to(["publish-article"]).await?;
//!
//!     let user = SubjectKey::new("user", "42");
//!     rbac.subject(&user).assign_role(["editor"]).await?;
//!     assert!(rbac.subject(&user).has_permission_to("publish-article").await?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{PermissionCheck, PermissionRef, RbacSystem, RoleRef};
pub use config::{Config, DatabaseConfig, RbacConfig};
pub use crate::core::models::{Permission, PermissionId, Role, RoleId, Subject, SubjectKey};
pub use storage::Database;
pub use utils::error::{RbacError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
