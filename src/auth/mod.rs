//! Authorization system
//!
//! Role and permission resolution for any entity implementing
//! [`Subject`](crate::core::models::Subject).

pub mod rbac;

pub use rbac::{
    PermissionCheck, PermissionHandle, PermissionRef, RbacSystem, RoleHandle, RoleRef,
    SubjectHandle,
};
