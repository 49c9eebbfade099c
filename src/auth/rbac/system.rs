//! RBAC system core functionality

use crate::config::RbacConfig;
use crate::core::models::{Permission, Role, Subject};
use crate::storage::Database;
use crate::utils::error::{RbacError, Result};
use std::sync::Arc;
use tracing::{debug, info};

use super::permissions::PermissionHandle;
use super::roles::RoleHandle;
use super::subject::SubjectHandle;
use super::types::{PermissionRef, RoleRef};

/// RBAC system for managing roles, permissions and their assignments
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// Backing store
    pub(super) db: Arc<Database>,
    /// RBAC configuration
    pub(super) config: RbacConfig,
}

impl RbacSystem {
    /// Create a new RBAC system over an already-migrated database
    pub fn new(db: Arc<Database>, config: &RbacConfig) -> Self {
        Self {
            db,
            config: config.clone(),
        }
    }

    /// Get the backing database
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Guard stored on roles and permissions created through this system
    pub fn default_guard(&self) -> &str {
        &self.config.default_guard
    }

    /// Operations on a single role
    pub fn role(&self, role: &Role) -> RoleHandle<'_> {
        RoleHandle::new(self, role.clone())
    }

    /// Operations on a single permission
    pub fn permission(&self, permission: &Permission) -> PermissionHandle<'_> {
        PermissionHandle::new(self, permission.clone())
    }

    /// Role and permission operations for any subject
    pub fn subject<S: Subject + ?Sized>(&self, subject: &S) -> SubjectHandle<'_> {
        SubjectHandle::new(self, subject.subject_key())
    }

    /// Create a role with the default guard
    pub async fn create_role(&self, name: &str, description: Option<String>) -> Result<Role> {
        let name = validate_name("Role", name)?;
        let role = self
            .db
            .insert_role(name, description, &self.config.default_guard)
            .await
            .map_err(|e| match e {
                RbacError::Conflict(_) => {
                    RbacError::conflict(format!("Role '{}' already exists", name))
                }
                other => other,
            })?;

        info!("Created role '{}' ({})", role.name, role.id);
        Ok(role)
    }

    /// Create a permission with the default guard
    pub async fn create_permission(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Permission> {
        let name = validate_name("Permission", name)?;
        let permission = self
            .db
            .insert_permission(name, description, &self.config.default_guard)
            .await
            .map_err(|e| match e {
                RbacError::Conflict(_) => {
                    RbacError::conflict(format!("Permission '{}' already exists", name))
                }
                other => other,
            })?;

        info!("Created permission '{}' ({})", permission.name, permission.id);
        Ok(permission)
    }

    /// Look up a role by name or id
    pub async fn find_role(&self, role: impl Into<RoleRef>) -> Result<Role> {
        self.resolve_role(role.into()).await
    }

    /// Look up a permission by name or id
    pub async fn find_permission(&self, permission: impl Into<PermissionRef>) -> Result<Permission> {
        self.resolve_permission(permission.into()).await
    }

    /// List all roles
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        self.db.list_roles().await
    }

    /// List all permissions
    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        self.db.list_permissions().await
    }

    /// Delete a role and every assignment referencing it
    pub async fn delete_role(&self, role: impl Into<RoleRef>) -> Result<()> {
        let role = role.into();
        let role_id = self.resolve_role_id(role.clone()).await?;

        if !self.db.delete_role(role_id).await? {
            return Err(RbacError::not_found(format!("Role '{}' not found", role)));
        }

        info!("Deleted role {}", role);
        Ok(())
    }

    /// Delete a permission and every grant referencing it
    pub async fn delete_permission(&self, permission: impl Into<PermissionRef>) -> Result<()> {
        let permission = permission.into();
        let permission_id = self.resolve_permission_id(permission.clone()).await?;

        if !self.db.delete_permission(permission_id).await? {
            return Err(RbacError::not_found(format!(
                "Permission '{}' not found",
                permission
            )));
        }

        info!("Deleted permission {}", permission);
        Ok(())
    }

    /// Create the configured permissions and roles, linking each role to its
    /// declared permissions. Entries that already exist are reused.
    pub async fn seed(&self) -> Result<()> {
        info!(
            "Seeding {} permission(s) and {} role(s)",
            self.config.permissions.len(),
            self.config.roles.len()
        );

        for seed in &self.config.permissions {
            let name = seed.name.trim();
            if self.db.find_permission_by_name(name).await?.is_some() {
                debug!("Permission '{}' already present", name);
                continue;
            }
            match self.create_permission(name, seed.description.clone()).await {
                Ok(_) | Err(RbacError::Conflict(_)) => {}
                Err(e) => return Err(e),
            }
        }

        for seed in &self.config.roles {
            let name = seed.name.trim();
            let role = match self.db.find_role_by_name(name).await? {
                Some(role) => role,
                None => match self.create_role(name, seed.description.clone()).await {
                    Ok(role) => role,
                    // Another seeder won the race
                    Err(RbacError::Conflict(_)) => self.find_role(name).await?,
                    Err(e) => return Err(e),
                },
            };

            self.role(&role)
                .give_permission_to(seed.permissions.iter().map(|p| p.trim()))
                .await?;
        }

        info!("RBAC seed completed");
        Ok(())
    }
}

fn validate_name<'a>(kind: &str, name: &'a str) -> Result<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RbacError::validation(format!("{} name cannot be empty", kind)));
    }
    Ok(name)
}
