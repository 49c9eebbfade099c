use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::models::SubjectKey;

/// Polymorphic direct grant of a permission to a subject
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "model_has_permissions")]
pub struct Model {
    /// Granted permission
    #[sea_orm(primary_key, auto_increment = false)]
    pub permission_id: i32,

    /// Subject type tag
    #[sea_orm(primary_key, auto_increment = false)]
    pub model_type: String,

    /// Subject identifier within its type
    #[sea_orm(primary_key, auto_increment = false)]
    pub model_id: String,

    /// Grant timestamp
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::permission::Entity",
        from = "Column::PermissionId",
        to = "super::permission::Column::Id",
        on_delete = "Cascade"
    )]
    Permission,
}

impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Permission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn subject_key(&self) -> SubjectKey {
        SubjectKey::new(self.model_type.clone(), self.model_id.clone())
    }
}
