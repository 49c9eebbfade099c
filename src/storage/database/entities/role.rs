use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::models::{Role as DomainRole, RoleId};

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    /// Role ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Role name (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Description (optional)
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Authentication guard
    pub guard_name: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Role entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Permission links
    #[sea_orm(has_many = "super::role_has_permission::Entity")]
    RoleHasPermissions,

    /// Subject assignments
    #[sea_orm(has_many = "super::model_has_role::Entity")]
    ModelHasRoles,
}

impl Related<super::role_has_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleHasPermissions.def()
    }
}

impl Related<super::model_has_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelHasRoles.def()
    }
}

impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_has_permission::Relation::Permission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_has_permission::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain role
    pub fn to_domain(&self) -> DomainRole {
        DomainRole {
            id: RoleId(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            guard_name: self.guard_name.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Build an insertable active model; the id is assigned by the store
    pub fn new_active(name: &str, description: Option<String>, guard_name: &str) -> ActiveModel {
        let now = chrono::Utc::now();
        ActiveModel {
            name: Set(name.to_string()),
            description: Set(description),
            guard_name: Set(guard_name.to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
    }
}
