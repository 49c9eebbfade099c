use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::models::SubjectKey;

/// Polymorphic subject-to-role assignment
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "model_has_roles")]
pub struct Model {
    /// Assigned role
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,

    /// Subject type tag
    #[sea_orm(primary_key, auto_increment = false)]
    pub model_type: String,

    /// Subject identifier within its type
    #[sea_orm(primary_key, auto_increment = false)]
    pub model_id: String,

    /// Assignment timestamp
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_delete = "Cascade"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn subject_key(&self) -> SubjectKey {
        SubjectKey::new(self.model_type.clone(), self.model_id.clone())
    }
}
