//! Domain models for roles, permissions and subjects

pub mod permission;
pub mod role;
pub mod subject;

pub use permission::{Permission, PermissionId};
pub use role::{Role, RoleId};
pub use subject::{Subject, SubjectKey};
