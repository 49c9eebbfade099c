use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModelHasRoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ModelHasRoles::RoleId).integer().not_null())
                    .col(ColumnDef::new(ModelHasRoles::ModelType).string().not_null())
                    .col(ColumnDef::new(ModelHasRoles::ModelId).string().not_null())
                    .col(
                        ColumnDef::new(ModelHasRoles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_model_has_roles")
                            .col(ModelHasRoles::RoleId)
                            .col(ModelHasRoles::ModelType)
                            .col(ModelHasRoles::ModelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_model_has_roles_role_id")
                            .from(ModelHasRoles::Table, ModelHasRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Subject lookups filter on the type/id pair first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_model_has_roles_model")
                    .table(ModelHasRoles::Table)
                    .col(ModelHasRoles::ModelType)
                    .col(ModelHasRoles::ModelId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModelHasRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ModelHasRoles {
    Table,
    RoleId,
    ModelType,
    ModelId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
}
