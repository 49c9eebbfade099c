//! Permission-scoped operations

use crate::core::models::{Permission, Role, SubjectKey};
use crate::utils::error::Result;
use tracing::debug;

use super::system::RbacSystem;
use super::types::RoleRef;

/// A permission bound to the system that stores its links
#[derive(Debug, Clone)]
pub struct PermissionHandle<'a> {
    rbac: &'a RbacSystem,
    permission: Permission,
}

impl<'a> PermissionHandle<'a> {
    pub(super) fn new(rbac: &'a RbacSystem, permission: Permission) -> Self {
        Self { rbac, permission }
    }

    /// The underlying permission
    pub fn permission(&self) -> &Permission {
        &self.permission
    }

    /// Roles holding this permission
    pub async fn roles(&self) -> Result<Vec<Role>> {
        self.rbac.db.roles_for_permission(self.permission.id).await
    }

    /// Subjects holding this permission directly (role grants are not included)
    pub async fn users(&self) -> Result<Vec<SubjectKey>> {
        self.rbac
            .db
            .subjects_for_permission(self.permission.id, None)
            .await
    }

    /// Subjects of one type holding this permission directly
    pub async fn users_of_type(&self, subject_type: &str) -> Result<Vec<SubjectKey>> {
        self.rbac
            .db
            .subjects_for_permission(self.permission.id, Some(subject_type))
            .await
    }

    /// Add this permission to the given roles
    pub async fn assign_role<I>(&self, roles: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<RoleRef>,
    {
        let refs: Vec<RoleRef> = roles.into_iter().map(Into::into).collect();
        let ids = self.rbac.resolve_role_ids(refs).await?;

        debug!(
            "Adding permission '{}' to {} role(s)",
            self.permission.name,
            ids.len()
        );
        self.rbac
            .db
            .link_permission_roles(self.permission.id, &ids)
            .await?;
        Ok(self)
    }

    /// Take this permission away from the given roles
    pub async fn remove_role<I>(&self, roles: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<RoleRef>,
    {
        let refs: Vec<RoleRef> = roles.into_iter().map(Into::into).collect();
        let ids = self.rbac.resolve_role_ids(refs).await?;

        debug!(
            "Removing permission '{}' from {} role(s)",
            self.permission.name,
            ids.len()
        );
        self.rbac
            .db
            .unlink_permission_roles(self.permission.id, &ids)
            .await?;
        Ok(self)
    }
}
