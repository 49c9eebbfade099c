//! Role-scoped operations

use crate::core::models::{Permission, PermissionId, Role, SubjectKey};
use crate::utils::error::Result;
use tracing::debug;

use super::system::RbacSystem;
use super::types::PermissionRef;

/// A role bound to the system that stores its permissions
#[derive(Debug, Clone)]
pub struct RoleHandle<'a> {
    rbac: &'a RbacSystem,
    role: Role,
}

impl<'a> RoleHandle<'a> {
    pub(super) fn new(rbac: &'a RbacSystem, role: Role) -> Self {
        Self { rbac, role }
    }

    /// The underlying role
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// All permissions linked to this role
    pub async fn permissions(&self) -> Result<Vec<Permission>> {
        self.rbac.db.permissions_for_role(self.role.id).await
    }

    /// Whether this role holds the permission. Fails with `NotFound` when a
    /// permission name does not resolve.
    pub async fn has_permission_to(&self, permission: impl Into<PermissionRef>) -> Result<bool> {
        let permission_id = self.rbac.resolve_permission_id(permission.into()).await?;
        self.has_permission_id(permission_id).await
    }

    pub(super) async fn has_permission_id(&self, permission_id: PermissionId) -> Result<bool> {
        self.rbac
            .db
            .role_has_permission(self.role.id, permission_id)
            .await
    }

    /// Link permissions to this role. Already-linked permissions are left untouched.
    pub async fn give_permission_to<I>(&self, permissions: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<PermissionRef>,
    {
        let refs: Vec<PermissionRef> = permissions.into_iter().map(Into::into).collect();
        let ids = self.rbac.resolve_permission_ids(refs).await?;

        debug!("Giving {} permission(s) to role '{}'", ids.len(), self.role.name);
        self.rbac.db.link_role_permissions(self.role.id, &ids).await?;
        Ok(self)
    }

    /// Unlink permissions from this role. Permissions the role lacks are ignored.
    pub async fn revoke_permission_to<I>(&self, permissions: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<PermissionRef>,
    {
        let refs: Vec<PermissionRef> = permissions.into_iter().map(Into::into).collect();
        let ids = self.rbac.resolve_permission_ids(refs).await?;

        debug!(
            "Revoking {} permission(s) from role '{}'",
            ids.len(),
            self.role.name
        );
        self.rbac
            .db
            .unlink_role_permissions(self.role.id, &ids)
            .await?;
        Ok(self)
    }

    /// Every subject holding this role, of any type
    pub async fn users(&self) -> Result<Vec<SubjectKey>> {
        self.rbac.db.subjects_for_role(self.role.id, None).await
    }

    /// Subjects of one type holding this role
    pub async fn users_of_type(&self, subject_type: &str) -> Result<Vec<SubjectKey>> {
        self.rbac
            .db
            .subjects_for_role(self.role.id, Some(subject_type))
            .await
    }
}
