//! Reference resolution
//!
//! Turns [`RoleRef`] / [`PermissionRef`] values into ids. Names are looked up
//! in a single query per call and every reference is resolved before the
//! caller performs any write, so a miss leaves the store untouched.

use crate::core::models::{Permission, PermissionId, Role, RoleId};
use crate::utils::error::{RbacError, Result};
use std::collections::HashMap;

use super::system::RbacSystem;
use super::types::{PermissionRef, RoleRef};

impl RbacSystem {
    /// Resolve role references to distinct ids, preserving first-seen order
    pub(super) async fn resolve_role_ids(&self, refs: Vec<RoleRef>) -> Result<Vec<RoleId>> {
        let names: Vec<String> = refs
            .iter()
            .filter_map(|r| match r {
                RoleRef::Name(name) => Some(name.clone()),
                RoleRef::Id(_) => None,
            })
            .collect();

        let found: HashMap<String, RoleId> = self
            .db
            .find_roles_by_names(&names)
            .await?
            .into_iter()
            .map(|role| (role.name, role.id))
            .collect();

        let mut ids = Vec::with_capacity(refs.len());
        for role in refs {
            let id = match role {
                RoleRef::Id(id) => id,
                RoleRef::Name(name) => *found
                    .get(&name)
                    .ok_or_else(|| RbacError::not_found(format!("Role '{}' not found", name)))?,
            };
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Resolve permission references to distinct ids, preserving first-seen order
    pub(super) async fn resolve_permission_ids(
        &self,
        refs: Vec<PermissionRef>,
    ) -> Result<Vec<PermissionId>> {
        let names: Vec<String> = refs
            .iter()
            .filter_map(|p| match p {
                PermissionRef::Name(name) => Some(name.clone()),
                PermissionRef::Id(_) => None,
            })
            .collect();

        let found: HashMap<String, PermissionId> = self
            .db
            .find_permissions_by_names(&names)
            .await?
            .into_iter()
            .map(|permission| (permission.name, permission.id))
            .collect();

        let mut ids = Vec::with_capacity(refs.len());
        for permission in refs {
            let id = match permission {
                PermissionRef::Id(id) => id,
                PermissionRef::Name(name) => *found.get(&name).ok_or_else(|| {
                    RbacError::not_found(format!("Permission '{}' not found", name))
                })?,
            };
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    pub(super) async fn resolve_role_id(&self, role: RoleRef) -> Result<RoleId> {
        match role {
            RoleRef::Id(id) => Ok(id),
            RoleRef::Name(name) => self
                .db
                .find_role_by_name(&name)
                .await?
                .map(|role| role.id)
                .ok_or_else(|| RbacError::not_found(format!("Role '{}' not found", name))),
        }
    }

    pub(super) async fn resolve_permission_id(
        &self,
        permission: PermissionRef,
    ) -> Result<PermissionId> {
        match permission {
            PermissionRef::Id(id) => Ok(id),
            PermissionRef::Name(name) => self
                .db
                .find_permission_by_name(&name)
                .await?
                .map(|permission| permission.id)
                .ok_or_else(|| RbacError::not_found(format!("Permission '{}' not found", name))),
        }
    }

    /// Load the full role; unlike id resolution this also verifies an id reference exists
    pub(super) async fn resolve_role(&self, role: RoleRef) -> Result<Role> {
        let found = match &role {
            RoleRef::Id(id) => self.db.find_role_by_id(*id).await?,
            RoleRef::Name(name) => self.db.find_role_by_name(name).await?,
        };
        found.ok_or_else(|| RbacError::not_found(format!("Role '{}' not found", role)))
    }

    /// Load the full permission; also verifies an id reference exists
    pub(super) async fn resolve_permission(&self, permission: PermissionRef) -> Result<Permission> {
        let found = match &permission {
            PermissionRef::Id(id) => self.db.find_permission_by_id(*id).await?,
            PermissionRef::Name(name) => self.db.find_permission_by_name(name).await?,
        };
        found.ok_or_else(|| {
            RbacError::not_found(format!("Permission '{}' not found", permission))
        })
    }
}
