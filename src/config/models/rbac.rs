//! Role and permission configuration

use super::default_guard;
use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Guard name stored on newly created roles and permissions
    #[serde(default = "default_guard")]
    pub default_guard: String,
    /// Permissions created by `seed`
    #[serde(default)]
    pub permissions: Vec<PermissionSeed>,
    /// Roles created by `seed`
    #[serde(default)]
    pub roles: Vec<RoleSeed>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            default_guard: default_guard(),
            permissions: Vec::new(),
            roles: Vec::new(),
        }
    }
}

/// Permission declared in configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSeed {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Role declared in configuration, with the names of the permissions it holds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleSeed {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}
