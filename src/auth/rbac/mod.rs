//! Role-Based Access Control (RBAC) system
//!
//! Roles own permissions; subjects own roles and direct permissions. A subject
//! holds a permission when it is granted directly or through any of its roles.

mod permissions;
mod resolver;
mod roles;
mod subject;
mod system;
mod types;

// Re-export public types and structs
pub use permissions::PermissionHandle;
pub use roles::RoleHandle;
pub use subject::SubjectHandle;
pub use system::RbacSystem;
pub use types::{PermissionCheck, PermissionRef, RoleRef};
