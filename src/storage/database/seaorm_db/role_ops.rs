use crate::core::models::{Role, RoleId};
use crate::utils::error::Result;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, model_has_role, role, role_has_permission};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a new role
    pub async fn insert_role(
        &self,
        name: &str,
        description: Option<String>,
        guard_name: &str,
    ) -> Result<Role> {
        debug!("Creating role: {}", name);

        let model = role::Model::new_active(name, description, guard_name)
            .insert(&self.db)
            .await?;

        Ok(model.to_domain())
    }

    /// Find role by ID
    pub async fn find_role_by_id(&self, role_id: RoleId) -> Result<Option<Role>> {
        debug!("Finding role by ID: {}", role_id);

        let model = entities::Role::find_by_id(role_id.0).one(&self.db).await?;
        Ok(model.map(|m| m.to_domain()))
    }

    /// Find role by name
    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        debug!("Finding role by name: {}", name);

        let model = entities::Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Find every role whose name is in `names`; missing names are simply absent from the result
    pub async fn find_roles_by_names(&self, names: &[String]) -> Result<Vec<Role>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        debug!("Finding {} role(s) by name", names.len());

        let models = entities::Role::find()
            .filter(role::Column::Name.is_in(names.iter().map(String::as_str)))
            .all(&self.db)
            .await?;

        Ok(models.iter().map(role::Model::to_domain).collect())
    }

    /// List all roles ordered by name
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        let models = entities::Role::find()
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(role::Model::to_domain).collect())
    }

    /// Delete a role together with every association row that references it
    pub async fn delete_role(&self, role_id: RoleId) -> Result<bool> {
        debug!("Deleting role: {}", role_id);

        let txn = self.db.begin().await?;

        entities::ModelHasRole::delete_many()
            .filter(model_has_role::Column::RoleId.eq(role_id.0))
            .exec(&txn)
            .await?;

        entities::RoleHasPermission::delete_many()
            .filter(role_has_permission::Column::RoleId.eq(role_id.0))
            .exec(&txn)
            .await?;

        let result = entities::Role::delete_by_id(role_id.0).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
