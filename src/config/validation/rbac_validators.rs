//! RBAC configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        if self.default_guard.trim().is_empty() {
            return Err("Default guard cannot be empty".to_string());
        }

        let mut permission_names = HashSet::new();
        for permission in &self.permissions {
            permission.validate()?;
            if !permission_names.insert(permission.name.trim()) {
                return Err(format!("Duplicate permission seed: {}", permission.name));
            }
        }

        let mut role_names = HashSet::new();
        for role in &self.roles {
            role.validate()?;
            if !role_names.insert(role.name.trim()) {
                return Err(format!("Duplicate role seed: {}", role.name));
            }
            for permission in &role.permissions {
                if !permission_names.contains(permission.trim()) {
                    return Err(format!(
                        "Role '{}' references undeclared permission '{}'",
                        role.name, permission
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Validate for PermissionSeed {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Permission name cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for RoleSeed {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Role name cannot be empty".to_string());
        }
        Ok(())
    }
}
