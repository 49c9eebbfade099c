//! Association sets: role-permission, subject-role and subject-permission
//!
//! Links are written with `ON CONFLICT DO NOTHING` against the composite
//! primary key, so re-linking an existing pair keeps the original row and
//! concurrent writers cannot produce duplicates. Unlinking a missing pair
//! deletes nothing.

use crate::core::models::{Permission, PermissionId, Role, RoleId, SubjectKey};
use crate::utils::error::Result;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{
    self, model_has_permission, model_has_role, permission, role, role_has_permission,
};
use super::types::SeaOrmDatabase;

fn now() -> DateTimeWithTimeZone {
    chrono::Utc::now().into()
}

impl SeaOrmDatabase {
    // ==================== Role -> Permission ====================

    /// Link permissions to a role, skipping pairs that already exist
    pub async fn link_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<()> {
        if permission_ids.is_empty() {
            return Ok(());
        }
        debug!(
            "Linking {} permission(s) to role {}",
            permission_ids.len(),
            role_id
        );

        let created_at = now();
        let rows = permission_ids
            .iter()
            .map(|permission_id| role_has_permission::ActiveModel {
                role_id: Set(role_id.0),
                permission_id: Set(permission_id.0),
                created_at: Set(created_at),
            });

        entities::RoleHasPermission::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    role_has_permission::Column::RoleId,
                    role_has_permission::Column::PermissionId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    /// Link roles to a permission; same rows as `link_role_permissions`, seen from the permission
    pub async fn link_permission_roles(
        &self,
        permission_id: PermissionId,
        role_ids: &[RoleId],
    ) -> Result<()> {
        if role_ids.is_empty() {
            return Ok(());
        }
        debug!(
            "Linking {} role(s) to permission {}",
            role_ids.len(),
            permission_id
        );

        let created_at = now();
        let rows = role_ids.iter().map(|role_id| role_has_permission::ActiveModel {
            role_id: Set(role_id.0),
            permission_id: Set(permission_id.0),
            created_at: Set(created_at),
        });

        entities::RoleHasPermission::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    role_has_permission::Column::RoleId,
                    role_has_permission::Column::PermissionId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    /// Remove role-permission links; missing pairs are ignored
    pub async fn unlink_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<()> {
        if permission_ids.is_empty() {
            return Ok(());
        }
        debug!(
            "Unlinking {} permission(s) from role {}",
            permission_ids.len(),
            role_id
        );

        entities::RoleHasPermission::delete_many()
            .filter(role_has_permission::Column::RoleId.eq(role_id.0))
            .filter(
                role_has_permission::Column::PermissionId.is_in(permission_ids.iter().map(|p| p.0)),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Remove links between a permission and the given roles
    pub async fn unlink_permission_roles(
        &self,
        permission_id: PermissionId,
        role_ids: &[RoleId],
    ) -> Result<()> {
        if role_ids.is_empty() {
            return Ok(());
        }
        debug!(
            "Unlinking {} role(s) from permission {}",
            role_ids.len(),
            permission_id
        );

        entities::RoleHasPermission::delete_many()
            .filter(role_has_permission::Column::PermissionId.eq(permission_id.0))
            .filter(role_has_permission::Column::RoleId.is_in(role_ids.iter().map(|r| r.0)))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Whether the role holds the permission
    pub async fn role_has_permission(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
    ) -> Result<bool> {
        let count = entities::RoleHasPermission::find()
            .filter(role_has_permission::Column::RoleId.eq(role_id.0))
            .filter(role_has_permission::Column::PermissionId.eq(permission_id.0))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Permissions held by a role, in link order
    pub async fn permissions_for_role(&self, role_id: RoleId) -> Result<Vec<Permission>> {
        let models = entities::Permission::find()
            .inner_join(entities::RoleHasPermission)
            .filter(role_has_permission::Column::RoleId.eq(role_id.0))
            .order_by_asc(role_has_permission::Column::CreatedAt)
            .order_by_asc(permission::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(permission::Model::to_domain).collect())
    }

    /// Roles holding a permission, in link order
    pub async fn roles_for_permission(&self, permission_id: PermissionId) -> Result<Vec<Role>> {
        let models = entities::Role::find()
            .inner_join(entities::RoleHasPermission)
            .filter(role_has_permission::Column::PermissionId.eq(permission_id.0))
            .order_by_asc(role_has_permission::Column::CreatedAt)
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(role::Model::to_domain).collect())
    }

    // ==================== Subject -> Role ====================

    /// Assign roles to a subject, skipping roles it already holds
    pub async fn link_subject_roles(&self, subject: &SubjectKey, role_ids: &[RoleId]) -> Result<()> {
        if role_ids.is_empty() {
            return Ok(());
        }
        debug!("Assigning {} role(s) to {}", role_ids.len(), subject);

        let created_at = now();
        let rows = role_ids.iter().map(|role_id| model_has_role::ActiveModel {
            role_id: Set(role_id.0),
            model_type: Set(subject.subject_type.clone()),
            model_id: Set(subject.subject_id.clone()),
            created_at: Set(created_at),
        });

        entities::ModelHasRole::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    model_has_role::Column::RoleId,
                    model_has_role::Column::ModelType,
                    model_has_role::Column::ModelId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    /// Remove roles from a subject; roles it does not hold are ignored
    pub async fn unlink_subject_roles(
        &self,
        subject: &SubjectKey,
        role_ids: &[RoleId],
    ) -> Result<()> {
        if role_ids.is_empty() {
            return Ok(());
        }
        debug!("Removing {} role(s) from {}", role_ids.len(), subject);

        entities::ModelHasRole::delete_many()
            .filter(model_has_role::Column::ModelType.eq(subject.subject_type.as_str()))
            .filter(model_has_role::Column::ModelId.eq(subject.subject_id.as_str()))
            .filter(model_has_role::Column::RoleId.is_in(role_ids.iter().map(|r| r.0)))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Whether the subject holds the role
    pub async fn subject_has_role(&self, subject: &SubjectKey, role_id: RoleId) -> Result<bool> {
        let count = entities::ModelHasRole::find()
            .filter(model_has_role::Column::ModelType.eq(subject.subject_type.as_str()))
            .filter(model_has_role::Column::ModelId.eq(subject.subject_id.as_str()))
            .filter(model_has_role::Column::RoleId.eq(role_id.0))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether the subject holds a role with this name; unknown names are simply not held
    pub async fn subject_has_role_named(&self, subject: &SubjectKey, name: &str) -> Result<bool> {
        let count = entities::ModelHasRole::find()
            .inner_join(entities::Role)
            .filter(model_has_role::Column::ModelType.eq(subject.subject_type.as_str()))
            .filter(model_has_role::Column::ModelId.eq(subject.subject_id.as_str()))
            .filter(role::Column::Name.eq(name))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Roles assigned to a subject, in assignment order
    pub async fn roles_for_subject(&self, subject: &SubjectKey) -> Result<Vec<Role>> {
        let models = entities::Role::find()
            .inner_join(entities::ModelHasRole)
            .filter(model_has_role::Column::ModelType.eq(subject.subject_type.as_str()))
            .filter(model_has_role::Column::ModelId.eq(subject.subject_id.as_str()))
            .order_by_asc(model_has_role::Column::CreatedAt)
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(role::Model::to_domain).collect())
    }

    /// Subjects holding a role, optionally restricted to one subject type
    pub async fn subjects_for_role(
        &self,
        role_id: RoleId,
        subject_type: Option<&str>,
    ) -> Result<Vec<SubjectKey>> {
        let mut query =
            entities::ModelHasRole::find().filter(model_has_role::Column::RoleId.eq(role_id.0));
        if let Some(subject_type) = subject_type {
            query = query.filter(model_has_role::Column::ModelType.eq(subject_type));
        }

        let models = query
            .order_by_asc(model_has_role::Column::CreatedAt)
            .order_by_asc(model_has_role::Column::ModelType)
            .order_by_asc(model_has_role::Column::ModelId)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(model_has_role::Model::subject_key).collect())
    }

    // ==================== Subject -> Permission ====================

    /// Grant permissions directly to a subject, skipping existing grants
    pub async fn link_subject_permissions(
        &self,
        subject: &SubjectKey,
        permission_ids: &[PermissionId],
    ) -> Result<()> {
        if permission_ids.is_empty() {
            return Ok(());
        }
        debug!(
            "Granting {} permission(s) directly to {}",
            permission_ids.len(),
            subject
        );

        let created_at = now();
        let rows = permission_ids
            .iter()
            .map(|permission_id| model_has_permission::ActiveModel {
                permission_id: Set(permission_id.0),
                model_type: Set(subject.subject_type.clone()),
                model_id: Set(subject.subject_id.clone()),
                created_at: Set(created_at),
            });

        entities::ModelHasPermission::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    model_has_permission::Column::PermissionId,
                    model_has_permission::Column::ModelType,
                    model_has_permission::Column::ModelId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    /// Revoke direct grants from a subject; missing grants are ignored
    pub async fn unlink_subject_permissions(
        &self,
        subject: &SubjectKey,
        permission_ids: &[PermissionId],
    ) -> Result<()> {
        if permission_ids.is_empty() {
            return Ok(());
        }
        debug!(
            "Revoking {} direct permission(s) from {}",
            permission_ids.len(),
            subject
        );

        entities::ModelHasPermission::delete_many()
            .filter(model_has_permission::Column::ModelType.eq(subject.subject_type.as_str()))
            .filter(model_has_permission::Column::ModelId.eq(subject.subject_id.as_str()))
            .filter(
                model_has_permission::Column::PermissionId
                    .is_in(permission_ids.iter().map(|p| p.0)),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Whether the permission is granted directly to the subject
    pub async fn subject_has_permission(
        &self,
        subject: &SubjectKey,
        permission_id: PermissionId,
    ) -> Result<bool> {
        let count = entities::ModelHasPermission::find()
            .filter(model_has_permission::Column::ModelType.eq(subject.subject_type.as_str()))
            .filter(model_has_permission::Column::ModelId.eq(subject.subject_id.as_str()))
            .filter(model_has_permission::Column::PermissionId.eq(permission_id.0))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Permissions granted directly to a subject, in grant order
    pub async fn permissions_for_subject(&self, subject: &SubjectKey) -> Result<Vec<Permission>> {
        let models = entities::Permission::find()
            .inner_join(entities::ModelHasPermission)
            .filter(model_has_permission::Column::ModelType.eq(subject.subject_type.as_str()))
            .filter(model_has_permission::Column::ModelId.eq(subject.subject_id.as_str()))
            .order_by_asc(model_has_permission::Column::CreatedAt)
            .order_by_asc(permission::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(permission::Model::to_domain).collect())
    }

    /// Subjects holding a permission directly, optionally restricted to one subject type
    pub async fn subjects_for_permission(
        &self,
        permission_id: PermissionId,
        subject_type: Option<&str>,
    ) -> Result<Vec<SubjectKey>> {
        let mut query = entities::ModelHasPermission::find()
            .filter(model_has_permission::Column::PermissionId.eq(permission_id.0));
        if let Some(subject_type) = subject_type {
            query = query.filter(model_has_permission::Column::ModelType.eq(subject_type));
        }

        let models = query
            .order_by_asc(model_has_permission::Column::CreatedAt)
            .order_by_asc(model_has_permission::Column::ModelType)
            .order_by_asc(model_has_permission::Column::ModelId)
            .all(&self.db)
            .await?;

        Ok(models
            .iter()
            .map(model_has_permission::Model::subject_key)
            .collect())
    }
}
