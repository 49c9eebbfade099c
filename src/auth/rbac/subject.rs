//! Subject capability: roles, direct permissions and transitive checks

use crate::core::models::{Permission, PermissionId, Role, SubjectKey};
use crate::utils::error::Result;
use std::collections::BTreeMap;
use tracing::debug;

use super::system::RbacSystem;
use super::types::{PermissionCheck, PermissionRef, RoleRef};

/// Role and permission operations for one subject
#[derive(Debug, Clone)]
pub struct SubjectHandle<'a> {
    rbac: &'a RbacSystem,
    subject: SubjectKey,
}

impl<'a> SubjectHandle<'a> {
    pub(super) fn new(rbac: &'a RbacSystem, subject: SubjectKey) -> Self {
        Self { rbac, subject }
    }

    /// The `(type, id)` pair this handle operates on
    pub fn key(&self) -> &SubjectKey {
        &self.subject
    }

    /// Roles assigned to the subject
    pub async fn roles(&self) -> Result<Vec<Role>> {
        self.rbac.db.roles_for_subject(&self.subject).await
    }

    /// Assign roles. Roles already held are left untouched; if any reference
    /// fails to resolve nothing is assigned.
    pub async fn assign_role<I>(&self, roles: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<RoleRef>,
    {
        let refs: Vec<RoleRef> = roles.into_iter().map(Into::into).collect();
        let ids = self.rbac.resolve_role_ids(refs).await?;

        self.rbac.db.link_subject_roles(&self.subject, &ids).await?;
        Ok(self)
    }

    /// Remove roles. Roles the subject does not hold are ignored.
    pub async fn remove_role<I>(&self, roles: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<RoleRef>,
    {
        let refs: Vec<RoleRef> = roles.into_iter().map(Into::into).collect();
        let ids = self.rbac.resolve_role_ids(refs).await?;

        self.rbac
            .db
            .unlink_subject_roles(&self.subject, &ids)
            .await?;
        Ok(self)
    }

    /// True if the subject holds at least one of the roles. A name that does
    /// not match any stored role is treated as not held.
    pub async fn has_role<I>(&self, roles: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<RoleRef>,
    {
        let refs: Vec<RoleRef> = roles.into_iter().map(Into::into).collect();

        for role in refs {
            let held = match &role {
                RoleRef::Name(name) => {
                    self.rbac
                        .db
                        .subject_has_role_named(&self.subject, name)
                        .await?
                }
                RoleRef::Id(id) => self.rbac.db.subject_has_role(&self.subject, *id).await?,
            };
            if held {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Permissions granted directly, not those inherited through roles
    pub async fn permissions(&self) -> Result<Vec<Permission>> {
        self.rbac.db.permissions_for_subject(&self.subject).await
    }

    /// Grant permissions directly. Existing grants are left untouched.
    pub async fn give_permission_to<I>(&self, permissions: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<PermissionRef>,
    {
        let refs: Vec<PermissionRef> = permissions.into_iter().map(Into::into).collect();
        let ids = self.rbac.resolve_permission_ids(refs).await?;

        self.rbac
            .db
            .link_subject_permissions(&self.subject, &ids)
            .await?;
        Ok(self)
    }

    /// Revoke direct grants. Permissions inherited through roles are unaffected.
    pub async fn revoke_permission_to<I>(&self, permissions: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<PermissionRef>,
    {
        let refs: Vec<PermissionRef> = permissions.into_iter().map(Into::into).collect();
        let ids = self.rbac.resolve_permission_ids(refs).await?;

        self.rbac
            .db
            .unlink_subject_permissions(&self.subject, &ids)
            .await?;
        Ok(self)
    }

    /// Whether the subject holds the permission directly or through any of its roles
    pub async fn has_permission_to(&self, permission: impl Into<PermissionRef>) -> Result<bool> {
        let permission_id = self.rbac.resolve_permission_id(permission.into()).await?;

        if self.has_direct_permission_id(permission_id).await? {
            return Ok(true);
        }

        for role in self.roles().await? {
            if self.rbac.role(&role).has_permission_id(permission_id).await? {
                debug!(
                    "{} holds permission {} through role '{}'",
                    self.subject, permission_id, role.name
                );
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Whether the permission is granted directly, ignoring roles
    pub async fn has_direct_permission(
        &self,
        permission: impl Into<PermissionRef>,
    ) -> Result<bool> {
        let permission_id = self.rbac.resolve_permission_id(permission.into()).await?;
        self.has_direct_permission_id(permission_id).await
    }

    async fn has_direct_permission_id(&self, permission_id: PermissionId) -> Result<bool> {
        self.rbac
            .db
            .subject_has_permission(&self.subject, permission_id)
            .await
    }

    /// Detailed permission check listing every source of the grant
    pub async fn check_permission(
        &self,
        permission: impl Into<PermissionRef>,
    ) -> Result<PermissionCheck> {
        let permission = self.rbac.resolve_permission(permission.into()).await?;
        let direct = self.has_direct_permission_id(permission.id).await?;

        let mut granted_by_roles = Vec::new();
        for role in self.roles().await? {
            if self.rbac.role(&role).has_permission_id(permission.id).await? {
                granted_by_roles.push(role.name);
            }
        }

        let granted = direct || !granted_by_roles.is_empty();
        Ok(PermissionCheck {
            denial_reason: (!granted)
                .then(|| format!("Missing permission: {}", permission.name)),
            permission: permission.name,
            granted,
            direct,
            granted_by_roles,
        })
    }

    /// Direct grants plus everything reachable through roles, deduplicated and ordered by name
    pub async fn get_all_permissions(&self) -> Result<Vec<Permission>> {
        let mut all: BTreeMap<String, Permission> = self
            .permissions()
            .await?
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();

        for role in self.roles().await? {
            for permission in self.rbac.role(&role).permissions().await? {
                all.entry(permission.name.clone()).or_insert(permission);
            }
        }

        Ok(all.into_values().collect())
    }
}
