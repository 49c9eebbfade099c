/// Subject-to-permission association entity module
pub mod model_has_permission;
/// Subject-to-role association entity module
pub mod model_has_role;
/// Permission entity module
pub mod permission;
/// Role entity module
pub mod role;
/// Role-to-permission association entity module
pub mod role_has_permission;

pub use model_has_permission::Entity as ModelHasPermission;
pub use model_has_role::Entity as ModelHasRole;
pub use permission::Entity as Permission;
pub use role::Entity as Role;
pub use role_has_permission::Entity as RoleHasPermission;
