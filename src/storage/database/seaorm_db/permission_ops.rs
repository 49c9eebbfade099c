use crate::core::models::{Permission, PermissionId};
use crate::utils::error::Result;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, model_has_permission, permission, role_has_permission};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a new permission
    pub async fn insert_permission(
        &self,
        name: &str,
        description: Option<String>,
        guard_name: &str,
    ) -> Result<Permission> {
        debug!("Creating permission: {}", name);

        let model = permission::Model::new_active(name, description, guard_name)
            .insert(&self.db)
            .await?;

        Ok(model.to_domain())
    }

    /// Find permission by ID
    pub async fn find_permission_by_id(&self, permission_id: PermissionId) -> Result<Option<Permission>> {
        debug!("Finding permission by ID: {}", permission_id);

        let model = entities::Permission::find_by_id(permission_id.0).one(&self.db).await?;
        Ok(model.map(|m| m.to_domain()))
    }

    /// Find permission by name
    pub async fn find_permission_by_name(&self, name: &str) -> Result<Option<Permission>> {
        debug!("Finding permission by name: {}", name);

        let model = entities::Permission::find()
            .filter(permission::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Find every permission whose name is in `names`; missing names are simply absent from the result
    pub async fn find_permissions_by_names(&self, names: &[String]) -> Result<Vec<Permission>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        debug!("Finding {} permission(s) by name", names.len());

        let models = entities::Permission::find()
            .filter(permission::Column::Name.is_in(names.iter().map(String::as_str)))
            .all(&self.db)
            .await?;

        Ok(models.iter().map(permission::Model::to_domain).collect())
    }

    /// List all permissions ordered by name
    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        let models = entities::Permission::find()
            .order_by_asc(permission::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(permission::Model::to_domain).collect())
    }

    /// Delete a permission together with every association row that references it
    pub async fn delete_permission(&self, permission_id: PermissionId) -> Result<bool> {
        debug!("Deleting permission: {}", permission_id);

        let txn = self.db.begin().await?;

        entities::ModelHasPermission::delete_many()
            .filter(model_has_permission::Column::PermissionId.eq(permission_id.0))
            .exec(&txn)
            .await?;

        entities::RoleHasPermission::delete_many()
            .filter(role_has_permission::Column::PermissionId.eq(permission_id.0))
            .exec(&txn)
            .await?;

        let result = entities::Permission::delete_by_id(permission_id.0).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
