//! RBAC type definitions

use crate::core::models::{Permission, PermissionId, Role, RoleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a role, either by unique name or by an already-known id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleRef {
    Name(String),
    Id(RoleId),
}

/// Reference to a permission, either by unique name or by an already-known id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PermissionRef {
    Name(String),
    Id(PermissionId),
}

impl From<&str> for RoleRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for RoleRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for RoleRef {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<RoleId> for RoleRef {
    fn from(id: RoleId) -> Self {
        Self::Id(id)
    }
}

impl From<&Role> for RoleRef {
    fn from(role: &Role) -> Self {
        Self::Id(role.id)
    }
}

impl From<Role> for RoleRef {
    fn from(role: Role) -> Self {
        Self::Id(role.id)
    }
}

impl From<&str> for PermissionRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PermissionRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for PermissionRef {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<PermissionId> for PermissionRef {
    fn from(id: PermissionId) -> Self {
        Self::Id(id)
    }
}

impl From<&Permission> for PermissionRef {
    fn from(permission: &Permission) -> Self {
        Self::Id(permission.id)
    }
}

impl From<Permission> for PermissionRef {
    fn from(permission: Permission) -> Self {
        Self::Id(permission.id)
    }
}

impl fmt::Display for RoleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Id(id) => write!(f, "#{}", id),
        }
    }
}

impl fmt::Display for PermissionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Id(id) => write!(f, "#{}", id),
        }
    }
}

/// Permission check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionCheck {
    /// Name of the permission that was checked
    pub permission: String,
    /// Whether permission is granted
    pub granted: bool,
    /// Whether the permission is granted directly to the subject
    pub direct: bool,
    /// Roles that granted the permission
    pub granted_by_roles: Vec<String>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
